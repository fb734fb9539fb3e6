//! Core types for the Swelter validation toolkit.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the [`Grid`] type shared by every tool in the workspace, plus the
//! error types for grid construction.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod error;
mod grid;

pub use error::GridError;
pub use grid::Grid;
