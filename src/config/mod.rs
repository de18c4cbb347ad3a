//! Run configuration for celldiff.
//!
//! This module defines the RunConfig struct, which can be read from a YAML
//! file (unknown fields are ignored) and is then overridden by command-line
//! flags. It is immutable once a run starts.

mod model;
mod operations;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use model::RunConfig;
pub use types::{OutputMedium, OutputShape, DEFAULT_FONT_STACK};
