//! Configuration types and defaults for celldiff.
//!
//! This module defines enums, constants, and default value functions
//! used by the RunConfig struct.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Font stack used for HTML output when none is configured.
pub const DEFAULT_FONT_STACK: &str = r#""Helvetica Neue", Arial, "Hiragino Kaku Gothic ProN", "Hiragino Sans", Meiryo, sans-serif"#;

/// Whether output keeps every row or lists only the diff cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputShape {
    /// Every input row, diffs rendered in place (default).
    #[default]
    Full,
    /// One entry per diff cell, addressed by line and column.
    List,
}

/// Output document format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutputMedium {
    /// CSV with `[-del-]{+ins+}` marker notation (default).
    #[default]
    Csv,
    /// HTML with `<del>`/`<ins>` markup.
    Html,
}

impl fmt::Display for OutputShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Full => "full",
            Self::List => "list",
        })
    }
}

impl fmt::Display for OutputMedium {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Csv => "csv",
            Self::Html => "html",
        })
    }
}

// Default value functions for serde
pub(crate) fn default_font_family() -> String {
    DEFAULT_FONT_STACK.to_string()
}
pub(crate) fn default_diff_timeout_ms() -> u64 {
    1000
}
