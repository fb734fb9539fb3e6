//! Centered window extraction.
//!
//! Cuts a window from the center of a delimited-text grid and prints it
//! with the source index range, for eyeballing a region of a grid too
//! large to dump whole.

use std::path::PathBuf;
use std::process::ExitCode;

use swelter_io::{format_grid, read_grid, DEFAULT_DELIMITER};
use swelter_view::centered_window;

fn usage() -> ExitCode {
    eprintln!("usage: crop <input> <rows> <cols>");
    eprintln!("  rows, cols  window dimensions, clamped to the grid");
    ExitCode::from(2)
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let [input, rows, cols] = args.as_slice() else {
        return usage();
    };
    let input = PathBuf::from(input);
    let (Ok(rows), Ok(cols)) = (rows.parse::<usize>(), cols.parse::<usize>()) else {
        eprintln!("crop: rows and cols must be non-negative integers");
        return usage();
    };

    let grid = match read_grid(&input, DEFAULT_DELIMITER) {
        Ok(g) => g,
        Err(e) => {
            eprintln!("crop: {e}");
            return ExitCode::from(2);
        }
    };

    match centered_window(&grid, rows, cols) {
        Ok((window, range)) => {
            println!(
                "{} ({} x {}), window {} x {} ({range})",
                input.display(),
                grid.rows(),
                grid.cols(),
                window.rows(),
                window.cols()
            );
            print!("{}", format_grid(&window, DEFAULT_DELIMITER));
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("crop: {e}");
            ExitCode::from(2)
        }
    }
}
