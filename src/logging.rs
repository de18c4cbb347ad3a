//! Tracing subscriber setup for the celldiff binary.
//!
//! Configure via the RUST_LOG environment variable, e.g.
//! `RUST_LOG=celldiff::pipeline=trace`. Without it the level comes from
//! the `-v` count. Logs go to stderr so they never mix with the output file
//! or the completion line on stdout.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

/// Fallback filter for a given `-v` count.
pub fn default_level(verbosity: u8) -> &'static str {
    match verbosity {
        0 => "info",
        1 => "debug",
        _ => "trace",
    }
}

/// Initialize the global subscriber. Call once, from `main`.
pub fn init(verbosity: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbosity)));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(console_layer).init();
}
