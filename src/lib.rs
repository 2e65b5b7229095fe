// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Dancing Links (DLX) implementation of Knuth's Algorithm X.
//!
//! Enumerates the exact covers of a sparse 0/1 constraint matrix, with
//! optional (secondary) columns that may be covered at most once but need
//! not be covered at all.
//!
//! # Architecture
//!
//! The implementation is arena-based throughout:
//!
//! - [`arena`] - a contiguous pool of link records; every "pointer" is an
//!   index into it, so the cyclic rings of the matrix involve no ownership
//!   cycles and a whole matrix can be snapshotted by cloning one `Vec`.
//! - [`matrix`] - builds the rings from a [`Problem`] description and
//!   provides the reversible cover/uncover primitives.
//! - [`engine`] - the backtracking drivers (recursive and state-stack), the
//!   column-selection strategies, and the callback-driven solve API with
//!   cooperative termination.
//! - [`problems`] - example encoders (sudoku, n-queens) built on the public
//!   interface.
//!
//! # Example
//!
//! ```
//! use dlx_search::{solve_many, ListProblem, Strategy};
//!
//! // The 6x7 matrix from Knuth's Dancing Links paper.
//! let mut problem = ListProblem::new(7, 0);
//! problem.add_row("A", &[2, 4, 5]);
//! problem.add_row("B", &[0, 3, 6]);
//! problem.add_row("C", &[1, 2, 5]);
//! problem.add_row("D", &[0, 3]);
//! problem.add_row("E", &[1, 6]);
//! problem.add_row("F", &[3, 4, 6]);
//!
//! let solutions = solve_many(&problem, Strategy::MinimumSize, None).unwrap();
//! assert_eq!(solutions.len(), 1);
//!
//! let mut rows = solutions[0].rows.clone();
//! rows.sort();
//! assert_eq!(rows, vec!["A", "D", "E"]);
//! ```
//!
//! # Concurrency
//!
//! A solve is single-threaded and synchronous: the callback runs inline and
//! must return before the search continues. Independent solves own
//! independent arenas and may run on separate threads without coordination.

pub mod arena;
pub mod engine;
pub mod matrix;
pub mod problem;
pub mod problems;

// Re-export commonly used types
pub use engine::{
    solve, solve_first, solve_many, Counters, SearchState, Solution, Solver, Statistics, Strategy,
};
pub use matrix::{BuildFailure, Matrix};
pub use problem::{ListProblem, Problem};
