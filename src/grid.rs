//! Grid plumbing shared by the tile-based puzzles.

use serde::{Deserialize, Serialize};

/// Position on a grid. `x` is the column, `y` the row, growing rightward
/// and downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The adjacent cell one step in `direction`.
    pub fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Orthogonal move direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Fixed expansion order. Searches iterate this array so repeated
    /// runs explore the state space identically.
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The direction that undoes this one.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_follows_delta() {
        let origin = Position::new(3, 4);
        assert_eq!(origin.step(Direction::Up), Position::new(3, 3));
        assert_eq!(origin.step(Direction::Down), Position::new(3, 5));
        assert_eq!(origin.step(Direction::Left), Position::new(2, 4));
        assert_eq!(origin.step(Direction::Right), Position::new(4, 4));
    }

    #[test]
    fn test_opposite_round_trips() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            let there = Position::new(0, 0).step(direction);
            assert_eq!(there.step(direction.opposite()), Position::new(0, 0));
        }
    }
}
