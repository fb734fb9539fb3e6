//! Centered sub-rectangle extraction.
//!
//! Large simulation grids are unreadable when dumped whole; the tools
//! inspect a window cut from the center instead. The requested window is
//! clamped to the grid, the start offsets use integer floor division, and
//! the returned range records which source rows and columns (inclusive)
//! the window covers.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

use std::error::Error;
use std::fmt;

use swelter_core::Grid;

/// Inclusive source index range covered by an extracted window.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WindowRange {
    /// First source row in the window.
    pub row_start: usize,
    /// Last source row in the window (inclusive).
    pub row_end: usize,
    /// First source column in the window.
    pub col_start: usize,
    /// Last source column in the window (inclusive).
    pub col_end: usize,
}

impl fmt::Display for WindowRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rows {} to {}, cols {} to {}",
            self.row_start, self.row_end, self.col_start, self.col_end
        )
    }
}

/// Errors from [`centered_window`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ViewError {
    /// A requested dimension is zero.
    InvalidSize {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
    },
}

impl fmt::Display for ViewError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { rows, cols } => write!(
                f,
                "window dimensions must be positive, got {rows}x{cols}"
            ),
        }
    }
}

impl Error for ViewError {}

/// Extract a `target_rows x target_cols` window from the center of `grid`.
///
/// Dimensions larger than the grid are clamped to it, so requesting an
/// oversized window returns the whole grid. Start offsets are
/// `(len - window) / 2` with integer floor division, biasing one cell
/// toward the top-left when the leftover is odd.
///
/// # Examples
///
/// ```
/// use swelter_core::Grid;
/// use swelter_view::centered_window;
///
/// let g = Grid::filled(10, 10, 0.0).unwrap();
/// let (window, range) = centered_window(&g, 4, 6).unwrap();
/// assert_eq!(window.shape(), (4, 6));
/// assert_eq!((range.row_start, range.col_start), (3, 2));
/// ```
pub fn centered_window(
    grid: &Grid,
    target_rows: usize,
    target_cols: usize,
) -> Result<(Grid, WindowRange), ViewError> {
    if target_rows == 0 || target_cols == 0 {
        return Err(ViewError::InvalidSize {
            rows: target_rows,
            cols: target_cols,
        });
    }
    let rows = target_rows.min(grid.rows());
    let cols = target_cols.min(grid.cols());
    let row_start = (grid.rows() - rows) / 2;
    let col_start = (grid.cols() - cols) / 2;

    let mut data = Vec::with_capacity(rows * cols);
    for r in row_start..row_start + rows {
        data.extend_from_slice(&grid.row(r)[col_start..col_start + cols]);
    }
    let window = Grid::from_flat(rows, cols, data)
        .expect("clamped window dimensions must form a valid grid");
    Ok((
        window,
        WindowRange {
            row_start,
            row_end: row_start + rows - 1,
            col_start,
            col_end: col_start + cols - 1,
        },
    ))
}
