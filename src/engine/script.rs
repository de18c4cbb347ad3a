//! Edit script types shared by the engine and the renderers.

/// What a segment does to the old text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    Equal,
    Delete,
    Insert,
}

/// One contiguous span of an edit script.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub kind: SegmentKind,
    pub text: String,
}

impl Segment {
    pub fn new(kind: SegmentKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    pub fn equal(text: impl Into<String>) -> Self {
        Self::new(SegmentKind::Equal, text)
    }

    pub fn delete(text: impl Into<String>) -> Self {
        Self::new(SegmentKind::Delete, text)
    }

    pub fn insert(text: impl Into<String>) -> Self {
        Self::new(SegmentKind::Insert, text)
    }
}

/// Ordered segments describing how to turn an old string into a new one.
///
/// Segment order is authoritative; renderers never reorder or merge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditScript {
    segments: Vec<Segment>,
}

impl EditScript {
    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Reconstruct the old text from equal and delete segments.
    pub fn old_text(&self) -> String {
        self.collect_text(SegmentKind::Delete)
    }

    /// Reconstruct the new text from equal and insert segments.
    pub fn new_text(&self) -> String {
        self.collect_text(SegmentKind::Insert)
    }

    fn collect_text(&self, side: SegmentKind) -> String {
        self.segments
            .iter()
            .filter(|s| s.kind == SegmentKind::Equal || s.kind == side)
            .map(|s| s.text.as_str())
            .collect()
    }
}

impl<'a> IntoIterator for &'a EditScript {
    type Item = &'a Segment;
    type IntoIter = std::slice::Iter<'a, Segment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
