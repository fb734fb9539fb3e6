//! Grid fixtures for Swelter development and testing.
//!
//! Deterministic generators for the shapes that show up in validator
//! tests: uniform grids, linear ramps, and seeded random heat fields.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use swelter_core::Grid;

/// A grid with every cell set to `value`.
pub fn uniform(rows: usize, cols: usize, value: f32) -> Grid {
    Grid::filled(rows, cols, value).expect("fixture dimensions must be positive")
}

/// A grid whose cell `(r, c)` holds `r * cols + c`, useful for checking
/// positional logic.
pub fn ramp(rows: usize, cols: usize) -> Grid {
    let data = (0..rows * cols).map(|i| i as f32).collect();
    Grid::from_flat(rows, cols, data).expect("fixture dimensions must be positive")
}

/// A seeded random heat field with values in `[lo, hi)`.
///
/// Uses ChaCha8 so the same seed always produces the same grid,
/// regardless of platform.
pub fn random_field(rows: usize, cols: usize, seed: u64, lo: f32, hi: f32) -> Grid {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let data = (0..rows * cols)
        .map(|_| rng.random_range(lo..hi))
        .collect();
    Grid::from_flat(rows, cols, data).expect("fixture dimensions must be positive")
}
