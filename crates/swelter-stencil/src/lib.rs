//! Jacobi-style 3x3 stencil convolution with constant boundary padding.
//!
//! This crate is the reference implementation the external simulation is
//! validated against. Each pass computes every output cell as the
//! kernel-weighted sum of its 3x3 neighborhood in the *previous* pass's
//! grid, substituting a constant padding value for out-of-bounds
//! neighbors. The multi-pass driver double-buffers and swaps, so no cell
//! ever reads a value written during its own pass.
//!
//! All arithmetic stays in `f32` to remain value-comparable with the
//! 32-bit external reference.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod config;
mod kernel;
mod run;

pub use config::{ConfigError, RunConfig, RunConfigBuilder};
pub use kernel::Kernel;
pub use run::{apply_pass, run};
