//! Celldiff: render `[-old-]{+new+}` cell markers in CSV data as readable
//! insert/delete diffs.
//!
//! The pipeline streams records from a CSV source, finds marker cells,
//! diffs their old/new halves, and writes one of four output shapes:
//! full CSV, full HTML table, CSV diff list, or HTML diff list.

pub mod cli;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod exit_codes;
pub mod framing;
pub mod logging;
pub mod marker;
pub mod pipeline;
pub mod processor;
pub mod render;
