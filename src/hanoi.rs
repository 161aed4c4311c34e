//! Tower of Hanoi optimal-move solver.
//!
//! A puzzle instance maps rod names to bottom-to-top disk stacks. Disks
//! are single letters totally ordered by size, smaller letter = smaller
//! disk, so a legal stack reads in descending letter order from the
//! bottom. BFS over full rod configurations yields the minimum move
//! count to gather every disk on the target rod.

use std::collections::BTreeMap;

use smallvec::SmallVec;

use crate::outcome::SolveReport;
use crate::search;

/// Target rod used by the benchmark levels.
pub const DEFAULT_TARGET_ROD: &str = "D";

/// Rod contents keyed by rod name, each stack listed bottom to top.
pub type Rods = BTreeMap<String, Vec<char>>;

/// Full rod configuration. Equality and hash cover every rod's contents;
/// the BTreeMap keeps rod iteration in sorted-name order so neighbor
/// generation is deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HanoiState {
    rods: Rods,
}

impl HanoiState {
    pub fn new(rods: Rods) -> Self {
        Self { rods }
    }

    fn disk_count(&self) -> usize {
        self.rods.values().map(Vec::len).sum()
    }

    /// A move is legal when the source rod is non-empty and the target
    /// is empty or shows a larger top disk.
    fn can_move(&self, from: &str, to: &str) -> bool {
        let moving = match self.rods.get(from).and_then(|stack| stack.last()) {
            Some(&disk) => disk,
            None => return false,
        };
        match self.rods.get(to).and_then(|stack| stack.last()) {
            Some(&top) => top > moving,
            None => true,
        }
    }

    /// One child per legal (from, to) rod pair, rods visited in
    /// sorted-name order. Up to 12 children with four rods.
    pub fn neighbors(&self) -> SmallVec<[HanoiState; 12]> {
        let names: Vec<String> = self.rods.keys().cloned().collect();
        let mut children = SmallVec::new();
        for from in &names {
            for to in &names {
                if from == to || !self.can_move(from, to) {
                    continue;
                }
                let mut rods = self.rods.clone();
                let disk = rods
                    .get_mut(from)
                    .and_then(Vec::pop)
                    .expect("can_move checked source rod");
                if let Some(stack) = rods.get_mut(to) {
                    stack.push(disk);
                }
                children.push(HanoiState::new(rods));
            }
        }
        children
    }

    /// Every disk stacked on the target rod, largest letter at the bottom.
    pub fn is_goal(&self, target: &str) -> bool {
        match self.rods.get(target) {
            Some(stack) => {
                stack.len() == self.disk_count()
                    && stack.windows(2).all(|pair| pair[0] > pair[1])
            }
            None => false,
        }
    }
}

/// Minimum moves to gather all disks on `target`, or unsolvable when the
/// target rod is not part of the instance.
pub fn solve_hanoi(rods: Rods, target: &str) -> SolveReport {
    if !rods.contains_key(target) {
        return SolveReport::unsolvable(0);
    }

    search::bfs(
        HanoiState::new(rods),
        |state| state.neighbors(),
        |state| state.is_goal(target),
    )
    .into_report()
}
