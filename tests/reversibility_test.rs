// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Structural reversibility under fuzzing: at every level of the search
//! tree, a matched set of covers and uncovers must restore the arena to the
//! exact state it had on entry.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use dlx_search::{solve_many, ListProblem, Matrix, Strategy};

/// A random sparse problem with row identifiers 0, 1, 2, ...
fn random_problem(rng: &mut StdRng) -> ListProblem<usize> {
    let mandatory = rng.gen_range(2..=7);
    let optional = rng.gen_range(0..=2);
    let rows = rng.gen_range(3..=14);
    let columns = mandatory + optional;

    let mut problem = ListProblem::new(mandatory, optional);
    for row in 0..rows {
        let mut covered = Vec::new();
        for column in 0..columns {
            if rng.gen_bool(0.35) {
                covered.push(column);
            }
        }
        problem.add_row(row, &covered);
    }
    problem
}

/// Walk the whole search tree by hand, snapshotting the arena at every
/// level and checking it is restored field for field on the way out.
fn explore(matrix: &mut Matrix<usize>, solutions: &mut usize) {
    let snapshot = matrix.snapshot();

    match Strategy::MinimumSize.choose(matrix) {
        None => *solutions += 1,
        Some(column) => {
            matrix.cover(column);
            let mut cell = matrix.down(column);
            while cell != column {
                matrix.cover_row(cell);
                explore(matrix, solutions);
                matrix.uncover_row(cell);
                cell = matrix.down(cell);
            }
            matrix.uncover(column);
        }
    }

    assert_eq!(matrix.snapshot(), snapshot);
}

#[test]
fn test_arena_restored_at_every_level() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for _ in 0..50 {
        let problem = random_problem(&mut rng);
        let mut matrix = Matrix::build(&problem).unwrap();
        let mut solutions = 0;
        explore(&mut matrix, &mut solutions);
    }
}

#[test]
fn test_manual_walk_agrees_with_the_engine() {
    let mut rng = StdRng::seed_from_u64(0xdecade);
    for _ in 0..25 {
        let problem = random_problem(&mut rng);

        let mut matrix = Matrix::build(&problem).unwrap();
        let mut expected = 0;
        explore(&mut matrix, &mut expected);

        let found = solve_many(&problem, Strategy::MinimumSize, None)
            .unwrap()
            .len();
        assert_eq!(found, expected);
    }
}

#[test]
fn test_complete_run_restores_the_matrix() {
    // A termination-free search undoes every cover before returning, so the
    // arena it leaves behind matches the arena it started from.
    let mut rng = StdRng::seed_from_u64(17);
    for _ in 0..25 {
        let problem = random_problem(&mut rng);
        let mut matrix = Matrix::build(&problem).unwrap();
        let before = matrix.snapshot();
        let mut solutions = 0;
        explore(&mut matrix, &mut solutions);
        assert_eq!(matrix.snapshot(), before);
    }
}

#[test]
fn test_drivers_agree_on_random_problems() {
    use dlx_search::Solver;

    let mut rng = StdRng::seed_from_u64(99);
    for _ in 0..25 {
        let problem = random_problem(&mut rng);
        for strategy in [Strategy::First, Strategy::MinimumSize] {
            let mut recursive = Vec::new();
            let mut solver = Solver::new(&problem, strategy).unwrap();
            solver.run(|solution, _| recursive.push(solution.rows.clone()));

            let mut iterative = Vec::new();
            let mut solver = Solver::new(&problem, strategy).unwrap();
            solver.run_iterative(|solution, _| iterative.push(solution.rows.clone()));

            assert_eq!(recursive, iterative);
        }
    }
}
