//! Command implementation for celldiff.
//!
//! Resolves the run configuration, opens the input and output files, and
//! hands them to the streaming pipeline.

use crate::cli::Cli;
use crate::config::RunConfig;
use crate::engine::CharDiffEngine;
use crate::error::{CellDiffError, Result};
use crate::pipeline::{self, RunSummary};
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::{debug, info};


/// Execute a full run for the parsed command line.
pub fn cmd_highlight(cli: &Cli) -> Result<RunSummary> {
    let config = resolve_config(cli)?;
    let summary = highlight_file(&cli.input, &cli.output, &config)?;

    println!("{}", completion_message(&config, &cli.output));
    Ok(summary)
}

/// Config file (if any) with command-line flags layered on top.
pub fn resolve_config(cli: &Cli) -> Result<RunConfig> {
    let mut config = match &cli.config {
        Some(path) => {
            debug!(path = %path.display(), "loading run config");
            RunConfig::load(path)?
        }
        None => RunConfig::default(),
    };

    config.apply_overrides(cli);
    config.validate()?;
    Ok(config)
}

/// Open `input`, create `output`, and run the pipeline between them.
///
/// # Returns
///
/// * `Ok(RunSummary)` - All requested records were written and flushed
/// * `Err(CellDiffError::UserError)` - A file could not be opened or created
/// * `Err(CellDiffError::ReadError | WriteError)` - The run failed partway
pub fn highlight_file(input: &Path, output: &Path, config: &RunConfig) -> Result<RunSummary> {
    let in_file = File::open(input).map_err(|e| {
        CellDiffError::UserError(format!(
            "cannot open input file '{}': {}",
            input.display(),
            e
        ))
    })?;

    let out_file = File::create(output).map_err(|e| {
        CellDiffError::UserError(format!(
            "cannot create output file '{}': {}",
            output.display(),
            e
        ))
    })?;

    info!(
        input = %input.display(),
        output = %output.display(),
        "processing as {} {}",
        config.medium,
        config.shape
    );

    let engine = CharDiffEngine::with_timeout_ms(config.diff_timeout_ms);
    pipeline::run(
        config,
        BufReader::new(in_file),
        BufWriter::new(out_file),
        &engine,
    )
}

/// Line printed to stdout after a successful run.
pub fn completion_message(config: &RunConfig, output: &Path) -> String {
    if config.line_limit > 0 {
        format!(
            "Highlighted first {} lines: {}",
            config.line_limit,
            output.display()
        )
    } else {
        format!("Highlighted all lines: {}", output.display())
    }
}
