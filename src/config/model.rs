//! RunConfig struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Settings for one highlighting run, fixed once the run starts.
///
/// Can be read from a YAML file; unknown fields are ignored and command-line
/// flags are layered on top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Full table or diff-only list.
    pub shape: OutputShape,

    /// CSV or HTML output.
    pub medium: OutputMedium,

    /// Maximum number of records to process; 0 processes everything.
    pub line_limit: usize,

    /// Column names used to label columns in headers and diff locations.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<String>>,

    /// CSS font-family for HTML output. Angle brackets are stripped on use.
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Deadline for a single cell diff in milliseconds; 0 disables it.
    #[serde(default = "default_diff_timeout_ms")]
    pub diff_timeout_ms: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            shape: OutputShape::default(),
            medium: OutputMedium::default(),
            line_limit: 0,
            headers: None,
            font_family: default_font_family(),
            diff_timeout_ms: default_diff_timeout_ms(),
        }
    }
}
