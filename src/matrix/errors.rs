// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Error types for matrix construction.

use std::error::Error;
use std::fmt;

/// Errors that can occur while translating a problem into the linked matrix.
///
/// Construction is the only fallible stage of a solve; the search itself
/// never fails. A build failure leaves no partially usable matrix behind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildFailure {
    /// A generated row referenced a column index outside `[0, M + K)`.
    ColumnOutOfRange {
        row: usize,
        column: usize,
        columns: usize,
    },
}

impl fmt::Display for BuildFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildFailure::ColumnOutOfRange {
                row,
                column,
                columns,
            } => {
                write!(
                    f,
                    "row {} references column {} but the problem has {} columns",
                    row, column, columns
                )
            }
        }
    }
}

impl Error for BuildFailure {}
