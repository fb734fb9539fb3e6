//! Error types for grid file I/O.

use std::error::Error;
use std::fmt;
use std::io;
use std::path::PathBuf;

use swelter_core::GridError;

/// Errors from reading a delimited-text grid.
#[derive(Debug)]
pub enum ReadError {
    /// The file could not be opened or read.
    Open {
        /// Path of the file.
        path: PathBuf,
        /// The underlying OS error.
        source: io::Error,
    },
    /// A token failed to parse as `f32`.
    BadToken {
        /// Path of the file.
        path: PathBuf,
        /// One-based line number of the offending row.
        line: usize,
        /// The token as read from the file.
        token: String,
    },
    /// A row's width disagrees with the first row's width.
    RaggedRow {
        /// Path of the file.
        path: PathBuf,
        /// One-based line number of the offending row.
        line: usize,
        /// Column count established by the first row.
        expected: usize,
        /// Column count actually found.
        actual: usize,
    },
    /// The file contained no data rows.
    Empty {
        /// Path of the file.
        path: PathBuf,
    },
    /// Grid construction rejected the parsed rows.
    Grid(GridError),
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, source } => {
                write!(f, "cannot open {}: {source}", path.display())
            }
            Self::BadToken { path, line, token } => write!(
                f,
                "{}:{line}: token '{token}' is not a number",
                path.display()
            ),
            Self::RaggedRow {
                path,
                line,
                expected,
                actual,
            } => write!(
                f,
                "{}:{line}: row has {actual} columns, expected {expected}",
                path.display()
            ),
            Self::Empty { path } => {
                write!(f, "{}: no data rows", path.display())
            }
            Self::Grid(e) => write!(f, "invalid grid: {e}"),
        }
    }
}

impl Error for ReadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ReadError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Errors from writing a grid to a delimited-text file.
#[derive(Debug)]
pub enum WriteError {
    /// The file could not be created or written.
    Open {
        /// Path of the file.
        path: PathBuf,
        /// The underlying OS error.
        source: io::Error,
    },
}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Open { path, source } => {
                write!(f, "cannot write {}: {source}", path.display())
            }
        }
    }
}

impl Error for WriteError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Open { source, .. } => Some(source),
        }
    }
}
