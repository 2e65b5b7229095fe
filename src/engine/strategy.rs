// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Column selection heuristics.

use crate::arena::NodeIndex;
use crate::matrix::Matrix;

/// How the driver picks the next column to branch on.
///
/// Both strategies enumerate the same set of solutions; they differ only in
/// the order solutions are discovered and in how much of the search tree is
/// visited along the way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Branch on the first active mandatory column in ring order.
    First,
    /// Branch on the active mandatory column with the fewest live cells.
    /// Knuth's "S heuristic"; ties go to the earlier ring position.
    #[default]
    MinimumSize,
}

impl Strategy {
    /// Choose the next column to branch on, or `None` when no mandatory
    /// column remains active.
    ///
    /// `None` means every mandatory constraint is covered, so the current
    /// path is a solution. Optional columns never force a branch: mandatory
    /// columns precede optional ones in the ring, so the scan stops at the
    /// first optional column or at the header.
    pub fn choose<R>(self, matrix: &Matrix<R>) -> Option<NodeIndex> {
        let header = matrix.header();
        match self {
            Strategy::First => {
                let column = matrix.right(header);
                if column == header || !matrix.is_mandatory(column) {
                    None
                } else {
                    Some(column)
                }
            }
            Strategy::MinimumSize => {
                let mut best = None;
                let mut best_size = usize::MAX;
                let mut column = matrix.right(header);
                while column != header && matrix.is_mandatory(column) {
                    let size = matrix.size(column);
                    if size < best_size {
                        best_size = size;
                        best = Some(column);
                    }
                    column = matrix.right(column);
                }
                best
            }
        }
    }
}
