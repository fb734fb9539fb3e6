//! Positional grid comparison.
//!
//! Compares two delimited-text grids cell by cell against an absolute
//! tolerance. Exit code 0 on match, 1 on any mismatch (value or shape),
//! 2 on usage or I/O errors.

use std::path::PathBuf;
use std::process::ExitCode;

use swelter_compare::{compare, CompareError, Comparison};
use swelter_io::{read_grid, DEFAULT_DELIMITER};

const DEFAULT_TOLERANCE: f32 = 1e-6;

fn usage() -> ExitCode {
    eprintln!("usage: griddiff <file_a> <file_b> [tolerance] [delimiter]");
    eprintln!("  tolerance  absolute per-cell tolerance (default: {DEFAULT_TOLERANCE})");
    eprintln!("  delimiter  field delimiter character (default: '{DEFAULT_DELIMITER}')");
    ExitCode::from(2)
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 2 || args.len() > 4 {
        return usage();
    }
    let file_a = PathBuf::from(&args[0]);
    let file_b = PathBuf::from(&args[1]);
    let tolerance = match args.get(2) {
        Some(raw) => match raw.parse::<f32>() {
            Ok(t) if t >= 0.0 => t,
            _ => {
                eprintln!("griddiff: tolerance '{raw}' is not a non-negative number");
                return usage();
            }
        },
        None => DEFAULT_TOLERANCE,
    };
    let delimiter = match args.get(3) {
        Some(raw) => {
            let mut chars = raw.chars();
            match (chars.next(), chars.next()) {
                (Some(d), None) => d,
                _ => {
                    eprintln!("griddiff: delimiter must be a single character");
                    return usage();
                }
            }
        }
        None => DEFAULT_DELIMITER,
    };

    let a = match read_grid(&file_a, delimiter) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("griddiff: {e}");
            return ExitCode::from(2);
        }
    };
    let b = match read_grid(&file_b, delimiter) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("griddiff: {e}");
            return ExitCode::from(2);
        }
    };

    println!(
        "comparing {} and {} (tolerance {tolerance})",
        file_a.display(),
        file_b.display()
    );

    match compare(&a, &b, tolerance) {
        Ok(Comparison::Match) => {
            println!(
                "MATCH: all {} cells within tolerance",
                a.cell_count()
            );
            ExitCode::SUCCESS
        }
        Ok(Comparison::Mismatch { count, samples }) => {
            println!("MISMATCH: {count} cells exceed tolerance {tolerance}");
            for s in &samples {
                println!(
                    "  [{}, {}] diff {:.8} | a: {:.6} | b: {:.6}",
                    s.row, s.col, s.diff, s.a, s.b
                );
            }
            ExitCode::from(1)
        }
        Err(CompareError::ShapeMismatch { a, b }) => {
            eprintln!(
                "STRUCTURAL MISMATCH: {} is {}x{}, {} is {}x{}",
                file_a.display(),
                a.0,
                a.1,
                file_b.display(),
                b.0,
                b.1
            );
            ExitCode::from(1)
        }
    }
}
