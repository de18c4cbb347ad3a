//! Diff engine seam and the character-level engine used by the CLI.
//!
//! The pipeline only depends on [`DiffEngine`]; [`CharDiffEngine`] is the
//! concrete implementation built on `similar`, followed by a semantic
//! cleanup pass that trades tiny equalities for larger, readable edits.

mod cleanup;
mod script;


pub use script::{EditScript, Segment, SegmentKind};

use similar::{Algorithm, ChangeTag, TextDiff};
use std::time::Duration;

/// Default wall-clock budget for a single cell diff.
pub const DEFAULT_DIFF_TIMEOUT: Duration = Duration::from_secs(1);

/// Computes an edit script turning `old` into `new`.
///
/// Implementations must keep the concatenation invariant: equal + delete
/// segments spell `old`, equal + insert segments spell `new`, in order.
pub trait DiffEngine {
    fn diff(&self, old: &str, new: &str) -> EditScript;
}

/// Character-granularity Myers diff with semantic cleanup.
#[derive(Debug, Clone)]
pub struct CharDiffEngine {
    timeout: Option<Duration>,
}

impl Default for CharDiffEngine {
    fn default() -> Self {
        Self::new(Some(DEFAULT_DIFF_TIMEOUT))
    }
}

impl CharDiffEngine {
    /// Create an engine. `None` lets every diff run to completion; with a
    /// deadline, `similar` falls back to a coarser but still valid script.
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }

    /// Build from a millisecond budget where 0 disables the deadline.
    pub fn with_timeout_ms(timeout_ms: u64) -> Self {
        let timeout = (timeout_ms > 0).then(|| Duration::from_millis(timeout_ms));
        Self::new(timeout)
    }

    fn raw_segments(&self, old: &str, new: &str) -> Vec<Segment> {
        let mut config = TextDiff::configure();
        config.algorithm(Algorithm::Myers);
        if let Some(timeout) = self.timeout {
            config.timeout(timeout);
        }
        let diff = config.diff_chars(old, new);

        diff.iter_all_changes()
            .map(|change| {
                let kind = match change.tag() {
                    ChangeTag::Equal => SegmentKind::Equal,
                    ChangeTag::Delete => SegmentKind::Delete,
                    ChangeTag::Insert => SegmentKind::Insert,
                };
                Segment::new(kind, change.value())
            })
            .collect()
    }
}

impl DiffEngine for CharDiffEngine {
    fn diff(&self, old: &str, new: &str) -> EditScript {
        if old == new {
            return EditScript::from_segments(cleanup::merge(vec![Segment::equal(old)]));
        }
        let segments = self.raw_segments(old, new);
        EditScript::from_segments(cleanup::semantic(segments))
    }
}
