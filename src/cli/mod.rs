//! CLI argument parsing for celldiff.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the flags only; the run itself lives in the
//! `commands` module.

use clap::{ArgAction, Parser};
use std::path::PathBuf;

/// Celldiff: highlight pending edits stored in CSV cells.
///
/// A cell whose whole content reads `[-old-]{+new+}` is diffed and rendered
/// as a readable insert/delete edit, either as a full CSV/HTML table or as a
/// list of just the changed cells.
#[derive(Parser, Debug)]
#[command(name = "celldiff")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Input CSV file.
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output file (created or truncated).
    #[arg(short, long)]
    pub output: PathBuf,

    /// Write HTML instead of CSV.
    #[arg(long)]
    pub html: bool,

    /// List only the cells that contain a diff, with their line and column.
    #[arg(short, long)]
    pub light: bool,

    /// CSS font-family for HTML output.
    #[arg(long)]
    pub font: Option<String>,

    /// Maximum number of lines to process (0 processes all lines).
    #[arg(short = 'n', long)]
    pub lines: Option<usize>,

    /// Comma-separated column names, e.g. `ID,Item,Status,Memo`.
    #[arg(long, value_delimiter = ',')]
    pub header: Vec<String>,

    /// YAML file with run settings; flags given here take precedence.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_debug_assert() {
        // Verifies the CLI arguments configuration is valid
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_minimal() {
        let cli = Cli::try_parse_from(["celldiff", "-i", "in.csv", "-o", "out.csv"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("in.csv"));
        assert_eq!(cli.output, PathBuf::from("out.csv"));
        assert!(!cli.html);
        assert!(!cli.light);
        assert_eq!(cli.lines, None);
        assert!(cli.header.is_empty());
        assert!(cli.font.is_none());
        assert!(cli.config.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn parse_full() {
        let cli = Cli::try_parse_from([
            "celldiff",
            "--input",
            "in.csv",
            "--output",
            "out.html",
            "--html",
            "--light",
            "--font",
            "Meiryo, sans-serif",
            "-n",
            "50",
            "--header",
            "ID,Item,Status,Memo",
            "--config",
            "run.yaml",
            "-vv",
        ])
        .unwrap();

        assert!(cli.html);
        assert!(cli.light);
        assert_eq!(cli.font.as_deref(), Some("Meiryo, sans-serif"));
        assert_eq!(cli.lines, Some(50));
        assert_eq!(cli.header, vec!["ID", "Item", "Status", "Memo"]);
        assert_eq!(cli.config, Some(PathBuf::from("run.yaml")));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn input_and_output_are_required() {
        assert!(Cli::try_parse_from(["celldiff", "-o", "out.csv"]).is_err());
        assert!(Cli::try_parse_from(["celldiff", "-i", "in.csv"]).is_err());
    }

    #[test]
    fn negative_line_limit_is_rejected() {
        let result = Cli::try_parse_from(["celldiff", "-i", "a", "-o", "b", "-n", "-1"]);
        assert!(result.is_err());
    }
}
