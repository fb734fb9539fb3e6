//! Swelter: batch tools for validating heat-diffusion simulation output.
//!
//! This is the top-level facade crate that re-exports the public API from
//! all Swelter sub-crates. For most users, adding `swelter` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use swelter::prelude::*;
//! use std::path::Path;
//!
//! // Parse a grid, run the reference configuration, and checksum it.
//! let grid = swelter::io::parse_grid("1.0,2.0\n3.0,4.0\n", ',', Path::new("<demo>")).unwrap();
//! let config = RunConfig::builder().iterations(2).build().unwrap();
//! let out = run(grid, &config);
//! assert_eq!(out.shape(), (2, 2));
//! assert!(out.checksum().is_finite());
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`grid`] | `swelter-core` | The [`grid::Grid`] type and construction errors |
//! | [`io`] | `swelter-io` | Delimited-text grid reading and writing |
//! | [`stencil`] | `swelter-stencil` | Kernel, run configuration, and the pass driver |
//! | [`compare`] | `swelter-compare` | Positional tolerance comparison |
//! | [`view`] | `swelter-view` | Centered window extraction |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// The grid type and construction errors (`swelter-core`).
pub use swelter_core as grid;

/// Delimited-text grid reading and writing (`swelter-io`).
///
/// [`io::read_grid`] and [`io::write_grid`] speak the reference tools'
/// on-disk format: delimiter-separated rows, two decimals on output.
pub use swelter_io as io;

/// The stencil kernel, run configuration, and pass driver (`swelter-stencil`).
///
/// [`stencil::run`] applies the configured number of Jacobi passes with
/// constant boundary padding.
pub use swelter_stencil as stencil;

/// Positional tolerance comparison (`swelter-compare`).
pub use swelter_compare as compare;

/// Centered window extraction (`swelter-view`).
pub use swelter_view as view;

/// Common imports for typical Swelter usage.
///
/// ```rust
/// use swelter::prelude::*;
/// ```
pub mod prelude {
    pub use swelter_compare::{compare, CompareError, Comparison, MismatchSample};
    pub use swelter_core::{Grid, GridError};
    pub use swelter_io::{read_grid, write_grid, ReadError, WriteError, DEFAULT_DELIMITER};
    pub use swelter_stencil::{run, Kernel, RunConfig};
    pub use swelter_view::{centered_window, ViewError, WindowRange};
}
