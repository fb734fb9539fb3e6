//! Positional tolerance comparison of equal-shaped grids.
//!
//! Compares two grids cell by cell in row-major order against an
//! absolute tolerance. Shape disagreement is a typed error, never a
//! silent truncation or broadcast: the two inputs are supposed to be
//! outputs of the same run configuration, so differing shapes mean a
//! structurally broken run, not a value drift.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use std::error::Error;
use std::fmt;

use swelter_core::Grid;

/// Maximum number of mismatch positions retained in a report.
pub const MAX_SAMPLES: usize = 5;

/// One cell where the absolute difference exceeded the tolerance.
#[derive(Clone, Debug, PartialEq)]
pub struct MismatchSample {
    /// Row of the cell.
    pub row: usize,
    /// Column of the cell.
    pub col: usize,
    /// Value in the first grid.
    pub a: f32,
    /// Value in the second grid.
    pub b: f32,
    /// Absolute difference `|a - b|`.
    pub diff: f32,
}

/// Outcome of a tolerance comparison.
#[derive(Clone, Debug, PartialEq)]
pub enum Comparison {
    /// Every cell pair is within the tolerance.
    Match,
    /// At least one cell pair exceeds the tolerance.
    Mismatch {
        /// Total number of cells exceeding the tolerance.
        count: usize,
        /// The first [`MAX_SAMPLES`] mismatches in row-major scan order.
        samples: Vec<MismatchSample>,
    },
}

/// Errors from [`compare`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CompareError {
    /// The two grids have different shapes.
    ShapeMismatch {
        /// `(rows, cols)` of the first grid.
        a: (usize, usize),
        /// `(rows, cols)` of the second grid.
        b: (usize, usize),
    },
}

impl fmt::Display for CompareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ShapeMismatch { a, b } => write!(
                f,
                "grid shapes differ: {}x{} vs {}x{}",
                a.0, a.1, b.0, b.1
            ),
        }
    }
}

impl Error for CompareError {}

/// Compare two grids cell by cell against an absolute tolerance.
///
/// Cells are scanned in row-major order; a cell mismatches when
/// `|a - b| > tolerance`. The report counts every mismatch but retains
/// at most [`MAX_SAMPLES`] positions.
///
/// # Examples
///
/// ```
/// use swelter_core::Grid;
/// use swelter_compare::{compare, Comparison};
///
/// let a = Grid::filled(2, 2, 1.0).unwrap();
/// let b = Grid::filled(2, 2, 1.0).unwrap();
/// assert_eq!(compare(&a, &b, 1e-6).unwrap(), Comparison::Match);
/// ```
pub fn compare(a: &Grid, b: &Grid, tolerance: f32) -> Result<Comparison, CompareError> {
    if a.shape() != b.shape() {
        return Err(CompareError::ShapeMismatch {
            a: a.shape(),
            b: b.shape(),
        });
    }
    let cols = a.cols();
    let mut count = 0;
    let mut samples = Vec::new();
    for (i, (&va, &vb)) in a.as_slice().iter().zip(b.as_slice()).enumerate() {
        let diff = (va - vb).abs();
        if diff > tolerance {
            count += 1;
            if samples.len() < MAX_SAMPLES {
                samples.push(MismatchSample {
                    row: i / cols,
                    col: i % cols,
                    a: va,
                    b: vb,
                    diff,
                });
            }
        }
    }
    if count == 0 {
        Ok(Comparison::Match)
    } else {
        Ok(Comparison::Mismatch { count, samples })
    }
}
