//! Reference convolution validator.
//!
//! Reads a delimited-text grid, runs the reference stencil configuration
//! (smoothing kernel, padding 30, 100 passes), writes the result with
//! two decimal places, and prints the checksum for cross-checking
//! against the external simulation.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use swelter_io::{read_grid, write_grid, DEFAULT_DELIMITER};
use swelter_stencil::{run, RunConfig};

const DEFAULT_OUTPUT: &str = "output.csv";

fn usage() -> ExitCode {
    eprintln!("usage: validate <input> [output]");
    eprintln!("  input   delimited-text grid to validate against");
    eprintln!("  output  result file (default: {DEFAULT_OUTPUT})");
    ExitCode::from(2)
}

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let (input, output) = match args.as_slice() {
        [input] => (PathBuf::from(input), PathBuf::from(DEFAULT_OUTPUT)),
        [input, output] => (PathBuf::from(input), PathBuf::from(output)),
        _ => return usage(),
    };

    match validate(&input, &output) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("validate: {message}");
            ExitCode::from(2)
        }
    }
}

fn validate(input: &Path, output: &Path) -> Result<(), String> {
    let grid = read_grid(input, DEFAULT_DELIMITER).map_err(|e| e.to_string())?;
    println!(
        "read {} ({} x {})",
        input.display(),
        grid.rows(),
        grid.cols()
    );

    let config = RunConfig::reference();
    let result = run(grid, &config);

    write_grid(output, &result, DEFAULT_DELIMITER).map_err(|e| e.to_string())?;
    println!(
        "wrote {} after {} passes",
        output.display(),
        config.iterations()
    );
    println!("checksum: {:.6}", result.checksum());
    Ok(())
}
