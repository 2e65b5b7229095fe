// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Backtracking search over the linked matrix.
//!
//! This module implements Algorithm X on top of the cover/uncover
//! primitives: choose a column, try each row that covers it, cover the rest
//! of the row, recurse, undo, move on. When no mandatory column remains the
//! current path is a complete cover and is delivered to the caller's
//! callback.
//!
//! # Delivery model
//!
//! The engine pushes solutions at the caller; there is no iterator. Covers
//! must be undone before the next candidate row is tried, so pausing
//! mid-search would need an explicit state machine. The state-stack driver
//! in [`stack`] is exactly that machine and yields the identical solution
//! sequence; the recursive form stays the primary one.
//!
//! # Termination
//!
//! The callback receives a mutable [`SearchState`] and may call
//! [`SearchState::terminate`]. The driver checks the flag after every child
//! return and stops without delivering further solutions. A terminated
//! unwind does not restore covered columns; the matrix is discarded when the
//! solve returns.
//!
//! # Example
//!
//! ```
//! use dlx_search::{solve_first, ListProblem, Strategy};
//!
//! let mut problem = ListProblem::new(3, 0);
//! problem.add_row("left", &[0]);
//! problem.add_row("rest", &[1, 2]);
//!
//! let solution = solve_first(&problem, Strategy::MinimumSize).unwrap();
//! assert_eq!(solution.unwrap().rows, vec!["left", "rest"]);
//! ```

pub mod stack;
pub mod statistics;
pub mod strategy;

pub use statistics::{Counters, Statistics};
pub use strategy::Strategy;

use crate::matrix::{BuildFailure, Matrix};
use crate::problem::Problem;

/// Cooperative termination flag, owned by one solve and handed to the
/// callback on every delivery.
#[derive(Debug)]
pub struct SearchState {
    terminated: bool,
}

impl SearchState {
    pub(crate) fn new() -> Self {
        Self { terminated: false }
    }

    /// Ask the driver to stop. No further callbacks will be made.
    pub fn terminate(&mut self) {
        self.terminated = true;
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }
}

/// One exact cover: the chosen row identifiers in order of descent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution<R> {
    pub rows: Vec<R>,
}

/// A built matrix plus the state needed to run it.
///
/// [`solve`] and the convenience wrappers construct one of these per call;
/// holding a `Solver` directly is useful when the caller wants the
/// [`Statistics`] afterwards, or wants to run the state-stack driver.
///
/// A run that was terminated by its callback leaves the matrix partially
/// covered; build a fresh solver to search again.
#[derive(Debug)]
pub struct Solver<R> {
    matrix: Matrix<R>,
    strategy: Strategy,
    statistics: Statistics,
}

impl<R: Clone> Solver<R> {
    /// Build the matrix for `problem`.
    pub fn new<P>(problem: &P, strategy: Strategy) -> Result<Self, BuildFailure>
    where
        P: Problem<RowId = R>,
    {
        Ok(Self {
            matrix: Matrix::build(problem)?,
            strategy,
            statistics: Statistics::new(),
        })
    }

    /// Run the recursive driver, invoking `callback` once per solution.
    pub fn run<F>(&mut self, mut callback: F)
    where
        F: FnMut(&Solution<R>, &mut SearchState),
    {
        if self.matrix.mandatory_columns() == 0 {
            return;
        }
        let mut state = SearchState::new();
        let mut path = Vec::new();
        self.search(&mut path, &mut state, &mut callback);
    }

    /// Run the non-recursive driver. Observable behavior is identical to
    /// [`Solver::run`] for the same matrix and strategy.
    pub fn run_iterative<F>(&mut self, callback: F)
    where
        F: FnMut(&Solution<R>, &mut SearchState),
    {
        stack::run(
            &mut self.matrix,
            self.strategy,
            &mut self.statistics,
            callback,
        );
    }

    /// Counters accumulated by the runs so far.
    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }

    /// The underlying matrix.
    pub fn matrix(&self) -> &Matrix<R> {
        &self.matrix
    }

    fn search<F>(&mut self, path: &mut Vec<usize>, state: &mut SearchState, callback: &mut F)
    where
        F: FnMut(&Solution<R>, &mut SearchState),
    {
        if state.terminated {
            return;
        }

        let Some(column) = self.strategy.choose(&self.matrix) else {
            // Every mandatory constraint is covered.
            self.statistics.increment(Counters::Solutions);
            let solution = Solution {
                rows: path
                    .iter()
                    .map(|&row| self.matrix.row_id(row).clone())
                    .collect(),
            };
            callback(&solution, state);
            return;
        };

        self.matrix.cover(column);

        let mut cell = self.matrix.down(column);
        while cell != column {
            self.statistics.increment(Counters::Branches);
            path.push(self.matrix.row_of(cell));
            self.matrix.cover_row(cell);

            self.search(path, state, callback);
            if state.terminated {
                // Unwind without restoring; the matrix dies with the solve.
                return;
            }

            self.statistics.increment(Counters::Backtracks);
            path.pop();
            self.matrix.uncover_row(cell);
            cell = self.matrix.down(cell);
        }

        self.matrix.uncover(column);
    }
}

/// Enumerate every exact cover of `problem`, delivering each to `callback`.
///
/// The callback runs inline on the calling thread and may stop the
/// enumeration through its [`SearchState`] argument. Solutions arrive in a
/// deterministic order fixed by the problem's row generator and the
/// strategy.
///
/// # Errors
///
/// Fails only if the matrix cannot be built; see [`BuildFailure`].
pub fn solve<P, F>(problem: &P, strategy: Strategy, callback: F) -> Result<(), BuildFailure>
where
    P: Problem,
    P::RowId: Clone,
    F: FnMut(&Solution<P::RowId>, &mut SearchState),
{
    let mut solver = Solver::new(problem, strategy)?;
    solver.run(callback);
    Ok(())
}

/// Find one exact cover, or `None` if the problem has none.
pub fn solve_first<P>(
    problem: &P,
    strategy: Strategy,
) -> Result<Option<Solution<P::RowId>>, BuildFailure>
where
    P: Problem,
    P::RowId: Clone,
{
    let mut first = None;
    solve(problem, strategy, |solution, state| {
        first = Some(solution.clone());
        state.terminate();
    })?;
    Ok(first)
}

/// Collect up to `limit` solutions in discovery order.
///
/// `None` collects every solution; `Some(0)` returns an empty vector without
/// searching.
pub fn solve_many<P>(
    problem: &P,
    strategy: Strategy,
    limit: Option<usize>,
) -> Result<Vec<Solution<P::RowId>>, BuildFailure>
where
    P: Problem,
    P::RowId: Clone,
{
    // Build first so a malformed problem fails the same way at every limit.
    let mut solver = Solver::new(problem, strategy)?;
    if limit == Some(0) {
        return Ok(Vec::new());
    }
    let mut solutions = Vec::new();
    solver.run(|solution, state| {
        solutions.push(solution.clone());
        if let Some(limit) = limit {
            if solutions.len() >= limit {
                state.terminate();
            }
        }
    });
    Ok(solutions)
}
