//! Delimited-text grid reading and writing.
//!
//! The on-disk format matches the external reference tools: one row per
//! line, values separated by a single delimiter character (comma by
//! default), written back with exactly two digits after the decimal
//! point. Parse errors carry the file path and one-based line number so
//! the operator can find the offending cell.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

mod error;

pub use error::{ReadError, WriteError};

use std::fs::File;
use std::io::{BufWriter, Read, Write};
use std::path::Path;

use swelter_core::Grid;

/// The delimiter used by the reference tools.
pub const DEFAULT_DELIMITER: char = ',';

/// Read a grid from a delimited-text file.
///
/// Rows are lines; values are split on `delimiter` and trimmed before
/// parsing as `f32`. Blank lines (such as a trailing newline) are
/// skipped. The first data row fixes the column count; any later row of
/// a different width is a [`ReadError::RaggedRow`].
pub fn read_grid(path: &Path, delimiter: char) -> Result<Grid, ReadError> {
    let mut text = String::new();
    File::open(path)
        .and_then(|mut f| f.read_to_string(&mut text))
        .map_err(|source| ReadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
    parse_grid(&text, delimiter, path)
}

/// Parse a grid from in-memory text. `path` is used only for error context.
pub fn parse_grid(text: &str, delimiter: char, path: &Path) -> Result<Grid, ReadError> {
    let mut rows: Vec<Vec<f32>> = Vec::new();
    let mut expected = None;
    for (i, line) in text.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let mut row = Vec::with_capacity(expected.unwrap_or(0));
        for token in line.split(delimiter) {
            let token = token.trim();
            let value: f32 = token.parse().map_err(|_| ReadError::BadToken {
                path: path.to_path_buf(),
                line: i + 1,
                token: token.to_string(),
            })?;
            row.push(value);
        }
        if let Some(expected) = expected {
            if row.len() != expected {
                return Err(ReadError::RaggedRow {
                    path: path.to_path_buf(),
                    line: i + 1,
                    expected,
                    actual: row.len(),
                });
            }
        } else {
            expected = Some(row.len());
        }
        rows.push(row);
    }
    if rows.is_empty() {
        return Err(ReadError::Empty {
            path: path.to_path_buf(),
        });
    }
    Ok(Grid::from_rows(rows)?)
}

/// Write a grid to a delimited-text file, two decimal places per value.
pub fn write_grid(path: &Path, grid: &Grid, delimiter: char) -> Result<(), WriteError> {
    let file = File::create(path).map_err(|source| WriteError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let mut out = BufWriter::new(file);
    write!(out, "{}", format_grid(grid, delimiter)).map_err(|source| WriteError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    out.flush().map_err(|source| WriteError::Open {
        path: path.to_path_buf(),
        source,
    })
}

/// Render a grid in the on-disk format: `{:.2}` per value, one row per line.
pub fn format_grid(grid: &Grid, delimiter: char) -> String {
    let mut out = String::new();
    for r in 0..grid.rows() {
        for (c, v) in grid.row(r).iter().enumerate() {
            if c > 0 {
                out.push(delimiter);
            }
            out.push_str(&format!("{v:.2}"));
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn mem() -> PathBuf {
        PathBuf::from("<memory>")
    }

    #[test]
    fn parses_comma_grid() {
        let g = parse_grid("1.0,2.0\n3.0,4.0\n", ',', &mem()).unwrap();
        assert_eq!(g.shape(), (2, 2));
        assert_eq!(g.get(1, 1), 4.0);
    }

    #[test]
    fn tolerates_spaces_and_crlf() {
        let g = parse_grid("1.0, 2.0\r\n3.0, 4.0\r\n", ',', &mem()).unwrap();
        assert_eq!(g.get(0, 1), 2.0);
    }

    #[test]
    fn skips_trailing_blank_line() {
        let g = parse_grid("5.0\n\n", ',', &mem()).unwrap();
        assert_eq!(g.shape(), (1, 1));
    }

    #[test]
    fn rejects_non_numeric_token() {
        let err = parse_grid("1.0,oops\n", ',', &mem()).unwrap_err();
        match err {
            ReadError::BadToken { line, token, .. } => {
                assert_eq!(line, 1);
                assert_eq!(token, "oops");
            }
            other => panic!("expected BadToken, got {other}"),
        }
    }

    #[test]
    fn rejects_ragged_row() {
        let err = parse_grid("1.0,2.0\n3.0\n", ',', &mem()).unwrap_err();
        match err {
            ReadError::RaggedRow {
                line,
                expected,
                actual,
                ..
            } => {
                assert_eq!((line, expected, actual), (2, 2, 1));
            }
            other => panic!("expected RaggedRow, got {other}"),
        }
    }

    #[test]
    fn rejects_empty_input() {
        assert!(matches!(
            parse_grid("", ',', &mem()),
            Err(ReadError::Empty { .. })
        ));
        assert!(matches!(
            parse_grid("\n\n", ',', &mem()),
            Err(ReadError::Empty { .. })
        ));
    }

    #[test]
    fn formats_two_decimals() {
        let g = swelter_core::Grid::from_rows(vec![vec![1.0, 2.345], vec![30.0, 0.006]]).unwrap();
        assert_eq!(format_grid(&g, ','), "1.00,2.35\n30.00,0.01\n");
    }

    #[test]
    fn format_then_parse_round_trips_shape() {
        let g = swelter_core::Grid::filled(3, 5, 30.0).unwrap();
        let text = format_grid(&g, ',');
        let back = parse_grid(&text, ',', &mem()).unwrap();
        assert_eq!(back, g);
    }

    #[test]
    fn alternate_delimiter() {
        let g = parse_grid("1.0;2.0\n", ';', &mem()).unwrap();
        assert_eq!(g.shape(), (1, 2));
    }
}
