//! Celldiff CLI entry point.
//!
//! Parses arguments, sets up logging, runs the highlight command, and maps
//! errors to exit codes.

use celldiff::cli::Cli;
use celldiff::{commands, exit_codes, logging};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    logging::init(cli.verbose);

    match commands::cmd_highlight(&cli) {
        Ok(_) => ExitCode::from(exit_codes::SUCCESS as u8),
        Err(err) => {
            // Print user-actionable error message to stderr
            eprintln!("Error: {}", err);

            ExitCode::from(err.exit_code() as u8)
        }
    }
}
