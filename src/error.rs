//! Error types for the celldiff CLI.
//!
//! Uses thiserror for derive macros. Read and write failures carry the
//! 1-based record number that was being handled when the failure happened.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for celldiff operations.
#[derive(Error, Debug)]
pub enum CellDiffError {
    /// User provided invalid arguments, config, or paths.
    #[error("{0}")]
    UserError(String),

    /// The CSV source failed while reading the record after `line - 1`.
    #[error("CSV read error at line {line}: {source}")]
    ReadError {
        line: usize,
        #[source]
        source: csv::Error,
    },

    /// The output sink failed. `line` 0 means preamble or closing output.
    #[error("write error at line {line}: {source}")]
    WriteError {
        line: usize,
        #[source]
        source: std::io::Error,
    },
}

impl CellDiffError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            CellDiffError::UserError(_) => exit_codes::USER_ERROR,
            CellDiffError::ReadError { .. } => exit_codes::READ_FAILURE,
            CellDiffError::WriteError { .. } => exit_codes::WRITE_FAILURE,
        }
    }

    /// Wrap a sink failure that happened while emitting output for `line`.
    pub fn write(line: usize, source: impl Into<std::io::Error>) -> Self {
        CellDiffError::WriteError {
            line,
            source: source.into(),
        }
    }
}

/// Result type alias for celldiff operations.
pub type Result<T> = std::result::Result<T, CellDiffError>;
