//! The row-major `f32` grid shared by every Swelter tool.

use crate::error::GridError;

/// A rectangular 2D grid of `f32` values in row-major order.
///
/// Dimensions are fixed at construction and construction rejects empty
/// grids, so every instance has at least one cell. Cell `(r, c)` lives
/// at flat index `r * cols + c`.
///
/// # Examples
///
/// ```
/// use swelter_core::Grid;
///
/// let g = Grid::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
/// assert_eq!(g.rows(), 2);
/// assert_eq!(g.cols(), 2);
/// assert_eq!(g.get(1, 0), 3.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    data: Vec<f32>,
}

impl Grid {
    /// Build a grid from nested rows.
    ///
    /// Fails with [`GridError::Empty`] if there are no rows or the first
    /// row is empty, and [`GridError::RaggedRow`] if any later row has a
    /// different length than the first.
    pub fn from_rows(rows: Vec<Vec<f32>>) -> Result<Self, GridError> {
        let cols = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => return Err(GridError::Empty),
        };
        let mut data = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(GridError::RaggedRow {
                    row: i,
                    expected: cols,
                    actual: row.len(),
                });
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            data,
        })
    }

    /// Build a grid from a flat row-major buffer.
    ///
    /// Fails with [`GridError::Empty`] for zero dimensions and
    /// [`GridError::SizeMismatch`] when `data.len() != rows * cols`.
    pub fn from_flat(rows: usize, cols: usize, data: Vec<f32>) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        if data.len() != rows * cols {
            return Err(GridError::SizeMismatch {
                rows,
                cols,
                len: data.len(),
            });
        }
        Ok(Self { rows, cols, data })
    }

    /// Build a grid with every cell set to `value`.
    pub fn filled(rows: usize, cols: usize, value: f32) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }
        Ok(Self {
            rows,
            cols,
            data: vec![value; rows * cols],
        })
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Total cell count (`rows * cols`).
    pub fn cell_count(&self) -> usize {
        self.rows * self.cols
    }

    /// `(rows, cols)` pair, convenient for shape comparisons.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Value at `(r, c)`.
    ///
    /// # Panics
    ///
    /// Panics if `r >= rows` or `c >= cols`.
    pub fn get(&self, r: usize, c: usize) -> f32 {
        assert!(r < self.rows && c < self.cols, "cell ({r}, {c}) out of bounds");
        self.data[r * self.cols + c]
    }

    /// Set the value at `(r, c)`.
    ///
    /// # Panics
    ///
    /// Panics if `r >= rows` or `c >= cols`.
    pub fn set(&mut self, r: usize, c: usize, value: f32) {
        assert!(r < self.rows && c < self.cols, "cell ({r}, {c}) out of bounds");
        self.data[r * self.cols + c] = value;
    }

    /// The flat row-major cell buffer.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Mutable access to the flat row-major cell buffer.
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// One row as a slice.
    ///
    /// # Panics
    ///
    /// Panics if `r >= rows`.
    pub fn row(&self, r: usize) -> &[f32] {
        assert!(r < self.rows, "row {r} out of bounds");
        &self.data[r * self.cols..(r + 1) * self.cols]
    }

    /// Sum of all cells, accumulated in `f32` in row-major order.
    ///
    /// Used as a cheap equality proxy between two runs of the same
    /// configuration. Accumulation stays in `f32` so the result is
    /// value-comparable with 32-bit reference implementations; widening
    /// to `f64` would change low-order bits.
    pub fn checksum(&self) -> f32 {
        let mut sum = 0.0f32;
        for &v in &self.data {
            sum += v;
        }
        sum
    }
}
