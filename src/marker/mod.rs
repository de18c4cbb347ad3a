//! Edit marker grammar.
//!
//! A cell encodes a pending edit when its whole trimmed content has the
//! shape `[-OLD-]{+NEW+}`. Anything else is ordinary cell text, never an
//! error: the grammar only guards against false positives.

use regex::Regex;
use std::sync::LazyLock;


/// Full-cell anchored pattern with lazy captures for OLD and NEW.
/// Only ASCII whitespace may pad the marker.
static MARKER_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?-u:\s)*\[-(.*?)-\]\{\+(.*?)\+\}(?-u:\s)*$").expect("Invalid edit marker regex")
});

/// The old/new pair carried by a marker cell, borrowed from the cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditMarker<'a> {
    pub old: &'a str,
    pub new: &'a str,
}

/// Compiled matcher for marker cells.
///
/// Build once per run and share by reference; matching holds no state.
#[derive(Debug, Clone)]
pub struct MarkerGrammar {
    pattern: Regex,
}

impl Default for MarkerGrammar {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkerGrammar {
    pub fn new() -> Self {
        Self {
            pattern: MARKER_REGEX.clone(),
        }
    }

    /// Parse a cell into its old/new pair, or `None` for ordinary text.
    pub fn parse<'a>(&self, cell: &'a str) -> Option<EditMarker<'a>> {
        let caps = self.pattern.captures(cell)?;
        let old = caps.get(1)?.as_str();
        let new = caps.get(2)?.as_str();
        Some(EditMarker { old, new })
    }
}
