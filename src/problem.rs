// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The contract between a problem encoder and the engine.
//!
//! A problem describes a sparse 0/1 matrix: a number of mandatory
//! constraints, a number of optional constraints, and a generator that emits
//! the rows. The engine never sees the caller's domain; it only sees column
//! indices and opaque row identifiers, which it hands back untouched in each
//! solution.

/// An exact-cover problem description.
///
/// Mandatory constraints occupy column indices `0..constraints()`; optional
/// constraints follow at `constraints()..constraints() +
/// optional_constraints()`. A mandatory constraint must be covered by exactly
/// one chosen row, an optional constraint by at most one.
///
/// # Example
///
/// ```
/// use dlx_search::{solve_many, Problem, Strategy};
///
/// /// Cover {0, 1, 2} with the subsets {0}, {1, 2} and {0, 1}.
/// struct Tiny;
///
/// impl Problem for Tiny {
///     type RowId = &'static str;
///
///     fn constraints(&self) -> usize {
///         3
///     }
///
///     fn generate_rows<F>(&self, mut emit: F)
///     where
///         F: FnMut(Self::RowId, &[usize]),
///     {
///         emit("a", &[0]);
///         emit("bc", &[1, 2]);
///         emit("ab", &[0, 1]);
///     }
/// }
///
/// // Column 2 is the smallest, so the row covering it is chosen first and
/// // leads the delivered solution.
/// let solutions = solve_many(&Tiny, Strategy::MinimumSize, None).unwrap();
/// assert_eq!(solutions.len(), 1);
/// assert_eq!(solutions[0].rows, vec!["bc", "a"]);
/// ```
pub trait Problem {
    /// Opaque row key, cloned into each delivered solution.
    type RowId: Clone;

    /// Number of mandatory constraints (M).
    fn constraints(&self) -> usize;

    /// Number of optional constraints (K). Defaults to zero for plain
    /// exact-cover problems.
    fn optional_constraints(&self) -> usize {
        0
    }

    /// Produce the rows of the matrix, calling `emit` once per row with the
    /// row's identifier and the column indices it covers.
    ///
    /// Rows with an empty column list are skipped by the builder. A row that
    /// lists the same column twice is accepted silently and its behavior
    /// during search is unspecified.
    fn generate_rows<F>(&self, emit: F)
    where
        F: FnMut(Self::RowId, &[usize]);
}

/// A problem held directly as a list of rows.
///
/// Useful for small matrices and for tests; larger encoders usually
/// implement [`Problem`] themselves and generate rows on the fly.
#[derive(Debug, Clone, Default)]
pub struct ListProblem<R> {
    constraints: usize,
    optional_constraints: usize,
    rows: Vec<(R, Vec<usize>)>,
}

impl<R: Clone> ListProblem<R> {
    /// Create a problem with the given mandatory and optional column counts
    /// and no rows.
    pub fn new(constraints: usize, optional_constraints: usize) -> Self {
        Self {
            constraints,
            optional_constraints,
            rows: Vec::new(),
        }
    }

    /// Append a row covering `columns`.
    pub fn add_row(&mut self, id: R, columns: &[usize]) {
        self.rows.push((id, columns.to_vec()));
    }
}

impl<R: Clone> Problem for ListProblem<R> {
    type RowId = R;

    fn constraints(&self) -> usize {
        self.constraints
    }

    fn optional_constraints(&self) -> usize {
        self.optional_constraints
    }

    fn generate_rows<F>(&self, mut emit: F)
    where
        F: FnMut(R, &[usize]),
    {
        for (id, columns) in &self.rows {
            emit(id.clone(), columns);
        }
    }
}
