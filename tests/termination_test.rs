// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Cooperative termination: the callback flips the flag and the engine
//! unwinds without delivering anything further.

use dlx_search::{solve, solve_many, ListProblem, Solver, Strategy};

/// Ten independent columns with two candidate rows each: 1024 covers, far
/// more than any test should enumerate.
fn many_solutions() -> ListProblem<(usize, usize)> {
    let mut problem = ListProblem::new(10, 0);
    for column in 0..10 {
        problem.add_row((column, 0), &[column]);
        problem.add_row((column, 1), &[column]);
    }
    problem
}

#[test]
fn test_termination_after_third_solution() {
    let mut deliveries = 0;
    solve(&many_solutions(), Strategy::MinimumSize, |_, state| {
        deliveries += 1;
        if deliveries == 3 {
            state.terminate();
        }
    })
    .unwrap();
    assert_eq!(deliveries, 3);
}

#[test]
fn test_termination_matches_limit_collection() {
    let mut collected = Vec::new();
    solve(&many_solutions(), Strategy::MinimumSize, |solution, state| {
        collected.push(solution.rows.clone());
        if collected.len() == 3 {
            state.terminate();
        }
    })
    .unwrap();

    let limited = solve_many(&many_solutions(), Strategy::MinimumSize, Some(3)).unwrap();
    let limited: Vec<_> = limited.into_iter().map(|s| s.rows).collect();
    assert_eq!(collected, limited);
}

#[test]
fn test_termination_in_stack_driver() {
    let mut deliveries = 0;
    let mut solver = Solver::new(&many_solutions(), Strategy::MinimumSize).unwrap();
    solver.run_iterative(|_, state| {
        deliveries += 1;
        if deliveries == 3 {
            state.terminate();
        }
    });
    assert_eq!(deliveries, 3);
}

#[test]
fn test_termination_on_first_delivery() {
    let mut deliveries = 0;
    solve(&many_solutions(), Strategy::First, |_, state| {
        deliveries += 1;
        state.terminate();
    })
    .unwrap();
    assert_eq!(deliveries, 1);
}

#[test]
fn test_fresh_solves_are_unaffected_by_terminated_ones() {
    // A terminated run abandons its covered columns with the discarded
    // matrix; a new solve over the same problem starts clean.
    let mut deliveries = 0;
    solve(&many_solutions(), Strategy::MinimumSize, |_, state| {
        deliveries += 1;
        state.terminate();
    })
    .unwrap();

    let all = solve_many(&many_solutions(), Strategy::MinimumSize, None).unwrap();
    assert_eq!(all.len(), 1024);
}
