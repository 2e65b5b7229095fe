// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Non-recursive search driver.
//!
//! The recursion in [`super::Solver::run`] is replaced by an explicit stack
//! of frames, one per level of descent. Each frame remembers the column
//! being branched on and the cell of the row currently tried; backtracking
//! pops a frame, undoes its row, advances the cell down the column's ring,
//! and either descends again or gives the column up.
//!
//! The driver visits branches in exactly the order of the recursive form,
//! so both deliver identical solution sequences for identical inputs.

use super::statistics::{Counters, Statistics};
use super::strategy::Strategy;
use super::{SearchState, Solution};
use crate::arena::NodeIndex;
use crate::matrix::Matrix;

/// One level of descent: the column covered at this level and the cell of
/// the row currently selected from its vertical ring.
#[derive(Debug, Clone, Copy)]
struct Frame {
    column: NodeIndex,
    cell: NodeIndex,
}

pub(crate) fn run<R, F>(
    matrix: &mut Matrix<R>,
    strategy: Strategy,
    statistics: &mut Statistics,
    mut callback: F,
) where
    R: Clone,
    F: FnMut(&Solution<R>, &mut SearchState),
{
    if matrix.mandatory_columns() == 0 {
        return;
    }

    let mut state = SearchState::new();
    let mut path: Vec<usize> = Vec::new();
    let mut frames: Vec<Frame> = Vec::new();

    'descend: loop {
        if state.is_terminated() {
            return;
        }

        match strategy.choose(matrix) {
            None => {
                statistics.increment(Counters::Solutions);
                let solution = Solution {
                    rows: path.iter().map(|&row| matrix.row_id(row).clone()).collect(),
                };
                callback(&solution, &mut state);
                if state.is_terminated() {
                    return;
                }
            }
            Some(column) => {
                matrix.cover(column);
                let cell = matrix.down(column);
                if cell != column {
                    statistics.increment(Counters::Branches);
                    path.push(matrix.row_of(cell));
                    matrix.cover_row(cell);
                    frames.push(Frame { column, cell });
                    continue 'descend;
                }
                // The column has no candidate rows; this level is dead.
                matrix.uncover(column);
            }
        }

        // Backtrack: undo the most recent branch, advance it, and descend
        // again; when a column's ring is exhausted, release the column and
        // keep unwinding.
        loop {
            let Some(frame) = frames.pop() else {
                return;
            };
            statistics.increment(Counters::Backtracks);
            path.pop();
            matrix.uncover_row(frame.cell);

            let next = matrix.down(frame.cell);
            if next != frame.column {
                statistics.increment(Counters::Branches);
                path.push(matrix.row_of(next));
                matrix.cover_row(next);
                frames.push(Frame {
                    column: frame.column,
                    cell: next,
                });
                continue 'descend;
            }
            matrix.uncover(frame.column);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::engine::{Solver, Strategy};
    use crate::problem::ListProblem;

    fn small_problem() -> ListProblem<&'static str> {
        let mut problem = ListProblem::new(4, 0);
        problem.add_row("ab", &[0, 1]);
        problem.add_row("cd", &[2, 3]);
        problem.add_row("a", &[0]);
        problem.add_row("b", &[1]);
        problem.add_row("abcd", &[0, 1, 2, 3]);
        problem
    }

    fn collect(run_iterative: bool, strategy: Strategy) -> Vec<Vec<&'static str>> {
        let mut solver = Solver::new(&small_problem(), strategy).unwrap();
        let mut seen = Vec::new();
        let callback = |solution: &crate::engine::Solution<&'static str>,
                        _: &mut crate::engine::SearchState| {
            seen.push(solution.rows.clone());
        };
        if run_iterative {
            solver.run_iterative(callback);
        } else {
            solver.run(callback);
        }
        seen
    }

    #[test]
    fn test_matches_recursive_driver() {
        for strategy in [Strategy::First, Strategy::MinimumSize] {
            let recursive = collect(false, strategy);
            let iterative = collect(true, strategy);
            assert_eq!(recursive, iterative);
            assert!(!recursive.is_empty());
        }
    }

    #[test]
    fn test_termination_after_first_solution() {
        let mut solver = Solver::new(&small_problem(), Strategy::First).unwrap();
        let mut count = 0;
        solver.run_iterative(|_, state| {
            count += 1;
            state.terminate();
        });
        assert_eq!(count, 1);
    }

    #[test]
    fn test_empty_problem() {
        let problem: ListProblem<u32> = ListProblem::new(0, 0);
        let mut solver = Solver::new(&problem, Strategy::First).unwrap();
        let mut count = 0;
        solver.run_iterative(|_, _| count += 1);
        assert_eq!(count, 0);
    }
}
