// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! The linked matrix: construction and the cover/uncover primitives.
//!
//! A [`Matrix`] is the arena-backed sparse representation of one exact-cover
//! problem. Column records form a doubly-linked ring anchored at the header,
//! mandatory columns first; each column anchors a vertical ring of the cells
//! that cover it; the cells of one row form a horizontal ring. All rings are
//! circular and doubly linked.
//!
//! # Reversibility
//!
//! [`Matrix::cover`] removes a column and every row touching it from the
//! active matrix; [`Matrix::uncover`] replays the removal in exact reverse
//! order, relying on the link fields still stored in the unlinked records.
//! After any matched cover/uncover pair the arena is field-for-field
//! identical to its prior state. The search engine is built entirely on this
//! guarantee, and the test suite checks it with arena snapshots.
//!
//! # Row identifiers
//!
//! Caller row identifiers are kept in a dense side table and cells carry the
//! dense index, so the arena records stay plain copyable values no matter
//! what the caller uses as a row key.

pub mod errors;

pub use errors::BuildFailure;

use crate::arena::{Arena, NodeIndex};
use crate::problem::Problem;

/// The linked representation of an exact-cover problem.
#[derive(Debug, Clone)]
pub struct Matrix<R> {
    arena: Arena,
    header: NodeIndex,
    mandatory: usize,
    optional: usize,
    row_ids: Vec<R>,
}

impl<R> Matrix<R> {
    /// Build the initial matrix for `problem`.
    ///
    /// Appends the header, then one column record per constraint (mandatory
    /// before optional, each linked into the column ring immediately left of
    /// the header), then threads every generated row into the vertical and
    /// horizontal rings. Rows with no columns are skipped; they cannot take
    /// part in an exact cover.
    ///
    /// A problem with zero mandatory constraints produces a degenerate
    /// matrix: no columns, no rows, and the row generator is never invoked.
    ///
    /// # Errors
    ///
    /// Returns [`BuildFailure::ColumnOutOfRange`] if a generated row names a
    /// column index at or beyond `constraints() + optional_constraints()`.
    pub fn build<P>(problem: &P) -> Result<Self, BuildFailure>
    where
        P: Problem<RowId = R>,
    {
        let mandatory = problem.constraints();
        let optional = problem.optional_constraints();

        let mut arena = Arena::new();
        arena.reserve(1 + mandatory + optional);
        let header = arena.append_header();

        if mandatory == 0 {
            return Ok(Self {
                arena,
                header,
                mandatory,
                optional,
                row_ids: Vec::new(),
            });
        }

        for index in 0..mandatory + optional {
            let column = arena.append_column(index < mandatory);
            let last = arena.left(header);
            arena.set_left(column, last);
            arena.set_right(column, header);
            arena.set_right(last, column);
            arena.set_left(header, column);
        }

        let mut row_ids: Vec<R> = Vec::new();
        let mut failure: Option<BuildFailure> = None;
        let columns = mandatory + optional;

        problem.generate_rows(|row_id, row_columns: &[usize]| {
            if failure.is_some() || row_columns.is_empty() {
                return;
            }
            for &c in row_columns {
                if c >= columns {
                    failure = Some(BuildFailure::ColumnOutOfRange {
                        row: row_ids.len(),
                        column: c,
                        columns,
                    });
                    return;
                }
            }

            let row = row_ids.len();
            row_ids.push(row_id);
            let mut first: Option<NodeIndex> = None;
            for &c in row_columns {
                let column = 1 + c;
                let cell = arena.append_cell(row, column);

                // Bottom of the vertical ring, just above the column record.
                let above = arena.up(column);
                arena.set_up(cell, above);
                arena.set_down(cell, column);
                arena.set_down(above, cell);
                arena.set_up(column, cell);
                arena.increment_size(column);

                // Thread the horizontal ring in the order supplied.
                match first {
                    None => first = Some(cell),
                    Some(first) => {
                        let last = arena.left(first);
                        arena.set_left(cell, last);
                        arena.set_right(cell, first);
                        arena.set_right(last, cell);
                        arena.set_left(first, cell);
                    }
                }
            }
        });

        match failure {
            Some(failure) => Err(failure),
            None => Ok(Self {
                arena,
                header,
                mandatory,
                optional,
                row_ids,
            }),
        }
    }

    /// Index of the header record.
    pub fn header(&self) -> NodeIndex {
        self.header
    }

    /// Number of mandatory constraints.
    pub fn mandatory_columns(&self) -> usize {
        self.mandatory
    }

    /// Number of optional constraints.
    pub fn optional_columns(&self) -> usize {
        self.optional
    }

    /// Number of rows threaded into the matrix (empty rows excluded).
    pub fn rows(&self) -> usize {
        self.row_ids.len()
    }

    /// Arena index of the column record for constraint `constraint`.
    ///
    /// # Panics
    ///
    /// Panics if `constraint` is not below the total column count.
    pub fn column_node(&self, constraint: usize) -> NodeIndex {
        assert!(
            constraint < self.mandatory + self.optional,
            "constraint index out of range: {}",
            constraint
        );
        1 + constraint
    }

    /// Caller row identifier for a dense row index.
    pub fn row_id(&self, row: usize) -> &R {
        &self.row_ids[row]
    }

    /// Dense row index of a cell record.
    pub fn row_of(&self, cell: NodeIndex) -> usize {
        self.arena.row(cell)
    }

    /// Owning column record of a cell.
    pub fn column_of(&self, cell: NodeIndex) -> NodeIndex {
        self.arena.column(cell)
    }

    pub fn left(&self, node: NodeIndex) -> NodeIndex {
        self.arena.left(node)
    }

    pub fn right(&self, node: NodeIndex) -> NodeIndex {
        self.arena.right(node)
    }

    pub fn up(&self, node: NodeIndex) -> NodeIndex {
        self.arena.up(node)
    }

    pub fn down(&self, node: NodeIndex) -> NodeIndex {
        self.arena.down(node)
    }

    /// Live cell count of a column.
    pub fn size(&self, column: NodeIndex) -> usize {
        self.arena.size(column)
    }

    /// Whether a column record is mandatory.
    pub fn is_mandatory(&self, column: NodeIndex) -> bool {
        self.arena.is_mandatory(column)
    }

    /// Clone the arena for later comparison.
    pub fn snapshot(&self) -> Arena {
        self.arena.clone()
    }

    /// Remove column `column` and every row intersecting it from the active
    /// matrix.
    ///
    /// The column is unlinked from the column ring, and each cell of each row
    /// in the column's vertical ring is unlinked from its own column's
    /// vertical ring. Horizontal links are never rewritten, and the unlinked
    /// records keep their link fields, which is what makes [`Matrix::uncover`]
    /// possible.
    pub fn cover(&mut self, column: NodeIndex) {
        let a = &mut self.arena;
        let left = a.left(column);
        let right = a.right(column);
        a.set_right(left, right);
        a.set_left(right, left);

        let mut v = a.down(column);
        while v != column {
            let mut h = a.right(v);
            while h != v {
                let above = a.up(h);
                let below = a.down(h);
                a.set_down(above, below);
                a.set_up(below, above);
                let owner = a.column(h);
                a.decrement_size(owner);
                h = a.right(h);
            }
            v = a.down(v);
        }
    }

    /// Exact inverse of [`Matrix::cover`], traversed in reverse order so each
    /// relink sees the structure its unlink left behind.
    pub fn uncover(&mut self, column: NodeIndex) {
        let a = &mut self.arena;
        let mut v = a.up(column);
        while v != column {
            let mut h = a.left(v);
            while h != v {
                let owner = a.column(h);
                a.increment_size(owner);
                let above = a.up(h);
                let below = a.down(h);
                a.set_down(above, h);
                a.set_up(below, h);
                h = a.left(h);
            }
            v = a.up(v);
        }

        let left = a.left(column);
        let right = a.right(column);
        a.set_right(left, column);
        a.set_left(right, column);
    }

    /// Cover the column of every other cell in `cell`'s row, walking right.
    ///
    /// Used when a branch selects the row containing `cell`; the column that
    /// produced the branch is already covered.
    pub fn cover_row(&mut self, cell: NodeIndex) {
        let mut h = self.arena.right(cell);
        while h != cell {
            let column = self.arena.column(h);
            self.cover(column);
            h = self.arena.right(h);
        }
    }

    /// Exact inverse of [`Matrix::cover_row`], walking left.
    pub fn uncover_row(&mut self, cell: NodeIndex) {
        let mut h = self.arena.left(cell);
        while h != cell {
            let column = self.arena.column(h);
            self.uncover(column);
            h = self.arena.left(h);
        }
    }
}
