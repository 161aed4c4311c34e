//! Exact puzzle solvers for scoring agent play against the optimum.
//!
//! Six puzzle domains share one search toolkit: breadth-first search
//! for mazes and rod stacks, A* for sliding tiles, bidirectional BFS
//! for sokoban, and backtracking for n-queens. Each domain wires an
//! immutable hashable state, a deterministic transition generator and a
//! goal test into a facade that reports the minimal remaining move
//! count or an unsolvable sentinel. Sudoku is graded by direct
//! comparison instead of search.

pub mod grid;
pub mod hanoi;
pub mod maze;
pub mod n_puzzle;
pub mod n_queens;
pub mod outcome;
pub mod score;
pub mod search;
pub mod sokoban;
pub mod sudoku;

// Re-export main types
pub use grid::{Direction, Position};
pub use hanoi::{solve_hanoi, HanoiState, Rods, DEFAULT_TARGET_ROD};
pub use maze::{solve_maze, MazeLevel};
pub use n_puzzle::{solve_n_puzzle, Board};
pub use n_queens::{solve_n_queens, BOARD_SIZE};
pub use outcome::{SolveOutcome, SolveReport, UNSOLVABLE_SENTINEL};
pub use score::{clamp_degree, completion_degree, MOVE_PENALTY, QUEEN_PENALTY};
pub use search::{astar, bfs, bidirectional_bfs, SearchResult};
pub use sokoban::{solve_sokoban, SokobanLevel, SokobanState};
pub use sudoku::grade_sudoku;
