//! CLI entry point for the puzzle oracle.
//!
//! Usage:
//!   puzzle-oracle maze <level.txt>
//!   puzzle-oracle sokoban --stdin
//!   puzzle-oracle hanoi <rods.json> [--target D]
//!   puzzle-oracle n-puzzle <grid.json>
//!   puzzle-oracle queens <queens.json> [--board-size 8]
//!   puzzle-oracle sudoku <board.json>
//!
//! Prints a JSON report with the move count (or the unsolvable
//! sentinel) and exits 0 when the puzzle is solvable from the given
//! state, 1 otherwise.

mod grid;
mod hanoi;
mod maze;
mod n_puzzle;
mod n_queens;
mod outcome;
mod score;
mod search;
mod sokoban;
mod sudoku;

use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::time::Instant;

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};

use outcome::SolveReport;

#[derive(Parser)]
#[command(name = "puzzle-oracle")]
#[command(about = "Exact puzzle solvers for scoring agent play against the optimum")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct InputArgs {
    /// Path to the puzzle file (use --stdin to read from stdin)
    #[arg(value_name = "FILE")]
    file: Option<PathBuf>,

    /// Read the puzzle from stdin instead of a file
    #[arg(long)]
    stdin: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Minimum moves from S to X in a maze level
    Maze {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Minimum moves to stack every disk on the target rod
    Hanoi {
        #[command(flatten)]
        input: InputArgs,

        /// Target rod name
        #[arg(long, default_value = hanoi::DEFAULT_TARGET_ROD)]
        target: String,
    },

    /// Optimal slide count for an n-puzzle grid
    NPuzzle {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Minimum worker moves to put every box on a goal
    Sokoban {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Queens still needed to finish the board
    Queens {
        #[command(flatten)]
        input: InputArgs,

        /// Board side length
        #[arg(long, default_value_t = n_queens::BOARD_SIZE)]
        board_size: i32,
    },

    /// Grade a finished sudoku against its solution
    Sudoku {
        #[command(flatten)]
        input: InputArgs,
    },
}

/// Output format for solver results
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SolveOutput {
    solvable: bool,
    moves: usize,
    states_explored: usize,
    time_elapsed_ms: u64,
}

/// Output format for the sudoku comparison grade
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct GradeOutput {
    degree: f64,
}

/// Sudoku input: the agent's final board and the level's solution,
/// both as flat cell vectors.
#[derive(Debug, Deserialize)]
struct SudokuInput {
    position: Vec<u8>,
    solution: Vec<u8>,
}

fn main() {
    let cli = Cli::parse();
    let started = Instant::now();

    match cli.command {
        Commands::Maze { input } => {
            let text = read_input(&input);
            finish(maze::solve_maze(&text), started);
        }
        Commands::Hanoi { input, target } => {
            let rods: hanoi::Rods = parse_json(&read_input(&input));
            finish(hanoi::solve_hanoi(rods, &target), started);
        }
        Commands::NPuzzle { input } => {
            let grid: Vec<Vec<u8>> = parse_json(&read_input(&input));
            finish(n_puzzle::solve_n_puzzle(&grid), started);
        }
        Commands::Sokoban { input } => {
            let text = read_input(&input);
            finish(sokoban::solve_sokoban(&text), started);
        }
        Commands::Queens { input, board_size } => {
            let queens: Vec<(i32, i32)> = parse_json(&read_input(&input));
            finish(n_queens::solve_n_queens(&queens, board_size), started);
        }
        Commands::Sudoku { input } => {
            let board: SudokuInput = parse_json(&read_input(&input));
            let grade = sudoku::grade_sudoku(&board.position, &board.solution);
            let output = GradeOutput {
                degree: score::clamp_degree(f64::from(grade)),
            };
            println!("{}", serde_json::to_string_pretty(&output).unwrap());
        }
    }
}

/// Read the puzzle text from the chosen source.
fn read_input(input: &InputArgs) -> String {
    if input.stdin {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .expect("Failed to read from stdin");
        buffer
    } else if let Some(path) = &input.file {
        fs::read_to_string(path)
            .unwrap_or_else(|e| panic!("Failed to read file {:?}: {}", path, e))
    } else {
        eprintln!("Error: Must provide either a file path or --stdin");
        std::process::exit(1);
    }
}

fn parse_json<T: serde::de::DeserializeOwned>(content: &str) -> T {
    match serde_json::from_str(content) {
        Ok(value) => value,
        Err(e) => {
            eprintln!("Error parsing puzzle JSON: {}", e);
            std::process::exit(1);
        }
    }
}

/// Print the JSON report and exit 0 when solvable, 1 otherwise.
fn finish(report: SolveReport, started: Instant) -> ! {
    let output = SolveOutput {
        solvable: report.outcome.is_solvable(),
        moves: report.outcome.move_count(),
        states_explored: report.states_explored,
        time_elapsed_ms: started.elapsed().as_millis() as u64,
    };
    println!("{}", serde_json::to_string_pretty(&output).unwrap());

    if output.solvable {
        std::process::exit(0);
    } else {
        std::process::exit(1);
    }
}
