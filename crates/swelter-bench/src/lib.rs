//! Benchmark profiles for the Swelter validation toolkit.
//!
//! Provides pre-built grid/config pairs for benchmarking:
//!
//! - [`reference_profile`]: 100x100 grid with the reference run configuration
//! - [`stress_profile`]: 1000x1000 grid for throughput measurement

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use swelter_core::Grid;
use swelter_stencil::RunConfig;

/// Deterministic pseudo-heat field: a ramp folded around the padding value.
fn profile_grid(rows: usize, cols: usize) -> Grid {
    let data = (0..rows * cols)
        .map(|i| 30.0 + ((i % 97) as f32 - 48.0))
        .collect();
    Grid::from_flat(rows, cols, data).expect("profile dimensions are positive")
}

/// Reference benchmark profile: 100x100 grid, reference configuration.
pub fn reference_profile() -> (Grid, RunConfig) {
    (profile_grid(100, 100), RunConfig::reference())
}

/// Stress profile: 1000x1000 grid, reference kernel, 10 passes.
pub fn stress_profile() -> (Grid, RunConfig) {
    let config = RunConfig::builder()
        .iterations(10)
        .build()
        .expect("reference kernel and padding are finite");
    (profile_grid(1000, 1000), config)
}
