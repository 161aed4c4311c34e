//! Sliding-tile puzzle solver (15-puzzle and smaller), A* with the
//! Manhattan-distance heuristic.
//!
//! The goal layout is row-major ascending with the blank last. Manhattan
//! distance never overestimates and is consistent, so the first goal
//! popped from the frontier carries the optimal move count.

use smallvec::SmallVec;

use crate::outcome::SolveReport;
use crate::search;

/// Immutable board snapshot: tiles in row-major order, 0 for the blank.
/// The side length rides along so solvers work on any square size.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    tiles: Vec<u8>,
}

impl Board {
    /// Build from a square row-major grid. The tiles must be a
    /// permutation of `0..size*size`; anything else is malformed.
    pub fn parse(grid: &[Vec<u8>]) -> Option<Self> {
        let size = grid.len();
        if size == 0 || grid.iter().any(|row| row.len() != size) {
            return None;
        }

        let tiles: Vec<u8> = grid.iter().flatten().copied().collect();
        let mut seen = vec![false; tiles.len()];
        for &tile in &tiles {
            let index = tile as usize;
            if index >= tiles.len() || seen[index] {
                return None;
            }
            seen[index] = true;
        }

        Some(Self { size, tiles })
    }

    fn blank_index(&self) -> usize {
        self.tiles
            .iter()
            .position(|&tile| tile == 0)
            .expect("parse guarantees one blank")
    }

    /// Row-major ascending with the blank in the last cell.
    pub fn is_goal(&self) -> bool {
        let count = self.tiles.len();
        self.tiles
            .iter()
            .enumerate()
            .all(|(index, &tile)| tile as usize == (index + 1) % count)
    }

    /// Sum over non-blank tiles of the row and column distance to each
    /// tile's goal cell.
    pub fn manhattan_distance(&self) -> usize {
        let mut distance = 0;
        for (index, &tile) in self.tiles.iter().enumerate() {
            if tile == 0 {
                continue;
            }
            let goal = tile as usize - 1;
            distance += (index / self.size).abs_diff(goal / self.size)
                + (index % self.size).abs_diff(goal % self.size);
        }
        distance
    }

    /// One child per orthogonal neighbor of the blank, produced by
    /// swapping the blank with that tile. Row above first, then below,
    /// left, right.
    pub fn neighbors(&self) -> SmallVec<[Board; 4]> {
        let blank = self.blank_index();
        let row = (blank / self.size) as i32;
        let col = (blank % self.size) as i32;
        let side = self.size as i32;

        let mut children = SmallVec::new();
        for (d_row, d_col) in [(-1, 0), (1, 0), (0, -1), (0, 1)] {
            let swap_row = row + d_row;
            let swap_col = col + d_col;
            if swap_row < 0 || swap_col < 0 || swap_row >= side || swap_col >= side {
                continue;
            }
            let swap = swap_row as usize * self.size + swap_col as usize;
            let mut tiles = self.tiles.clone();
            tiles.swap(blank, swap);
            children.push(Board {
                size: self.size,
                tiles,
            });
        }
        children
    }
}

/// Optimal move count to the solved layout, or unsolvable for malformed
/// grids and odd-parity boards whose search space exhausts.
pub fn solve_n_puzzle(grid: &[Vec<u8>]) -> SolveReport {
    let board = match Board::parse(grid) {
        Some(board) => board,
        None => return SolveReport::unsolvable(0),
    };

    search::astar(
        board,
        |board| board.neighbors(),
        |board| board.is_goal(),
        |board| board.manhattan_distance(),
    )
    .into_report()
}
