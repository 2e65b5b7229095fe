// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! End-to-end checks on the small fixed matrices from Knuth's paper and the
//! staircase matrix, including determinism and the equivalence of the two
//! search drivers.

use dlx_search::{solve_many, ListProblem, Solver, Strategy};

/// The 6x7 matrix from the Dancing Links paper. Its unique exact cover is
/// the row set {A, D, E}.
fn knuth_problem() -> ListProblem<&'static str> {
    let mut problem = ListProblem::new(7, 0);
    problem.add_row("A", &[2, 4, 5]);
    problem.add_row("B", &[0, 3, 6]);
    problem.add_row("C", &[1, 2, 5]);
    problem.add_row("D", &[0, 3]);
    problem.add_row("E", &[1, 6]);
    problem.add_row("F", &[3, 4, 6]);
    problem
}

#[test]
fn test_knuth_matrix_has_unique_cover() {
    for strategy in [Strategy::First, Strategy::MinimumSize] {
        let solutions = solve_many(&knuth_problem(), strategy, None).unwrap();
        assert_eq!(solutions.len(), 1);

        let mut rows = solutions[0].rows.clone();
        rows.sort();
        assert_eq!(rows, vec!["A", "D", "E"]);
    }
}

#[test]
fn test_staircase_keeps_only_the_full_row() {
    let mut problem = ListProblem::new(5, 0);
    problem.add_row("r0", &[0]);
    problem.add_row("r1", &[0, 1]);
    problem.add_row("r2", &[0, 1, 2]);
    problem.add_row("r3", &[0, 1, 2, 3]);
    problem.add_row("r4", &[0, 1, 2, 3, 4]);

    let solutions = solve_many(&problem, Strategy::MinimumSize, None).unwrap();
    assert_eq!(solutions.len(), 1);
    assert_eq!(solutions[0].rows, vec!["r4"]);
}

#[test]
fn test_identical_runs_deliver_identical_sequences() {
    for strategy in [Strategy::First, Strategy::MinimumSize] {
        let first = solve_many(&knuth_problem(), strategy, None).unwrap();
        let second = solve_many(&knuth_problem(), strategy, None).unwrap();
        assert_eq!(first, second);
    }
}

#[test]
fn test_recursive_and_stack_drivers_agree() {
    for strategy in [Strategy::First, Strategy::MinimumSize] {
        let mut recursive = Vec::new();
        let mut solver = Solver::new(&knuth_problem(), strategy).unwrap();
        solver.run(|solution, _| recursive.push(solution.rows.clone()));

        let mut iterative = Vec::new();
        let mut solver = Solver::new(&knuth_problem(), strategy).unwrap();
        solver.run_iterative(|solution, _| iterative.push(solution.rows.clone()));

        assert_eq!(recursive, iterative);
    }
}

#[test]
fn test_duplicate_solutions_are_not_invented() {
    // Two interchangeable rows for the same column pair give exactly two
    // covers, each delivered once.
    let mut problem = ListProblem::new(2, 0);
    problem.add_row("x", &[0, 1]);
    problem.add_row("y", &[0, 1]);

    let solutions = solve_many(&problem, Strategy::First, None).unwrap();
    let rows: Vec<_> = solutions.iter().map(|s| s.rows.clone()).collect();
    assert_eq!(rows, vec![vec!["x"], vec!["y"]]);
}
