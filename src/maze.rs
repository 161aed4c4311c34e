//! Maze shortest-path solver.
//!
//! Levels arrive as multi-line text: `+` is a wall, `S` the agent start,
//! `X` the exit, and any other character a floor cell. The solver runs
//! plain BFS over agent positions and reports the minimum number of
//! U/D/L/R moves from `S` to `X`.

use smallvec::SmallVec;

use crate::grid::{Direction, Position};
use crate::outcome::SolveReport;
use crate::search;

const WALL: char = '+';
const START: char = 'S';
const EXIT: char = 'X';

/// Parsed maze level: a rectangular cell grid plus the marker cells.
#[derive(Debug, Clone)]
pub struct MazeLevel {
    cells: Vec<Vec<char>>,
    start: Position,
    exit: Position,
}

impl MazeLevel {
    /// Parse a multi-line maze. Rows are trimmed and right-padded to the
    /// widest row. Returns `None` when the grid is empty or the `S` or
    /// `X` marker is missing.
    pub fn parse(text: &str) -> Option<Self> {
        let mut cells: Vec<Vec<char>> = text
            .lines()
            .map(|row| row.trim().chars().collect())
            .filter(|row: &Vec<char>| !row.is_empty())
            .collect();
        if cells.is_empty() {
            return None;
        }

        let width = cells.iter().map(|row| row.len()).max().unwrap_or(0);
        for row in &mut cells {
            row.resize(width, ' ');
        }

        let mut start = None;
        let mut exit = None;
        for (y, row) in cells.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                if cell == START {
                    start = Some(Position::new(x as i32, y as i32));
                } else if cell == EXIT {
                    exit = Some(Position::new(x as i32, y as i32));
                }
            }
        }

        Some(Self {
            cells,
            start: start?,
            exit: exit?,
        })
    }

    pub fn start(&self) -> Position {
        self.start
    }

    pub fn exit(&self) -> Position {
        self.exit
    }

    /// A cell is walkable when it lies inside the grid and is not a wall.
    pub fn is_walkable(&self, position: Position) -> bool {
        if position.x < 0 || position.y < 0 {
            return false;
        }
        self.cells
            .get(position.y as usize)
            .and_then(|row| row.get(position.x as usize))
            .map_or(false, |&cell| cell != WALL)
    }

    /// Positions reachable by one move, in fixed U/D/L/R order.
    pub fn neighbors(&self, position: Position) -> SmallVec<[Position; 4]> {
        Direction::ALL
            .iter()
            .map(|&direction| position.step(direction))
            .filter(|&target| self.is_walkable(target))
            .collect()
    }
}

/// Minimum number of moves from `S` to `X`, or unsolvable when the maze
/// is malformed or the exit is walled off.
pub fn solve_maze(text: &str) -> SolveReport {
    let level = match MazeLevel::parse(text) {
        Some(level) => level,
        None => return SolveReport::unsolvable(0),
    };

    let exit = level.exit();
    search::bfs(
        level.start(),
        |&position| level.neighbors(position),
        |&position| position == exit,
    )
    .into_report()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::outcome::SolveOutcome;

    const SNAKE: &str = "\
+++++
+S  +
+++ +
+X  +
+++++";

    /// Apply a U/D/L/R move string, asserting every step stays on floor.
    fn walk(level: &MazeLevel, moves: &str) -> Position {
        let mut position = level.start();
        for letter in moves.chars() {
            let direction = match letter {
                'U' => Direction::Up,
                'D' => Direction::Down,
                'L' => Direction::Left,
                'R' => Direction::Right,
                _ => panic!("bad move letter {letter}"),
            };
            position = position.step(direction);
            assert!(level.is_walkable(position));
        }
        position
    }

    #[test]
    fn test_snake_maze_shortest_path() {
        let report = solve_maze(SNAKE);
        assert_eq!(report.outcome, SolveOutcome::Moves(6));

        // Re-simulating a shortest move sequence lands exactly on the exit.
        let level = MazeLevel::parse(SNAKE).unwrap();
        assert_eq!(walk(&level, "RRDDLL"), level.exit());
    }

    #[test]
    fn test_start_equals_exit_is_zero_moves() {
        // S adjacent to X still costs one move; S on its own cell costs
        // zero only when the exit is the same cell, which the text form
        // cannot express, so check the adjacent case instead.
        let report = solve_maze("SX");
        assert_eq!(report.outcome, SolveOutcome::Moves(1));
    }

    #[test]
    fn test_walled_off_exit_is_unsolvable() {
        let maze = "\
+++++
+S+X+
+++++";
        let report = solve_maze(maze);
        assert_eq!(report.outcome, SolveOutcome::Unsolvable);
    }

    #[test]
    fn test_missing_marker_is_unsolvable_without_search() {
        let report = solve_maze("+++\n+S+\n+++");
        assert_eq!(report.outcome, SolveOutcome::Unsolvable);
        assert_eq!(report.states_explored, 0);
        assert_eq!(solve_maze("").outcome, SolveOutcome::Unsolvable);
    }

    #[test]
    fn test_repeated_calls_are_deterministic() {
        let first = solve_maze(SNAKE);
        let second = solve_maze(SNAKE);
        assert_eq!(first, second);
    }
}
