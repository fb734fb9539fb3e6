//! Error types for grid construction.

use std::error::Error;
use std::fmt;

/// Errors from [`Grid`](crate::Grid) construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Zero rows or zero columns requested.
    Empty,
    /// A row's length disagrees with the first row's length.
    RaggedRow {
        /// Zero-based index of the offending row.
        row: usize,
        /// Column count established by the first row.
        expected: usize,
        /// Column count actually found.
        actual: usize,
    },
    /// The flat buffer length does not equal `rows * cols`.
    SizeMismatch {
        /// Declared number of rows.
        rows: usize,
        /// Declared number of columns.
        cols: usize,
        /// Length of the supplied buffer.
        len: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "grid must have at least one row and one column"),
            Self::RaggedRow {
                row,
                expected,
                actual,
            } => write!(
                f,
                "row {row} has {actual} columns, expected {expected}"
            ),
            Self::SizeMismatch { rows, cols, len } => write!(
                f,
                "buffer of length {len} does not match {rows}x{cols} grid"
            ),
        }
    }
}

impl Error for GridError {}
