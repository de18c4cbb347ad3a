//! Post-processing that turns a raw character diff into readable edits.

use super::script::{Segment, SegmentKind};

/// Merge runs, then repeatedly absorb equalities that are no longer than
/// the edits on either side of them.
pub(super) fn semantic(segments: Vec<Segment>) -> Vec<Segment> {
    let mut segments = merge(segments);
    let mut budget = segments.len();

    while budget > 0 {
        let Some(index) = find_absorbable_equality(&segments) else {
            break;
        };
        let text = std::mem::take(&mut segments[index].text);
        segments[index] = Segment::delete(text.clone());
        segments.insert(index + 1, Segment::insert(text));
        segments = merge(segments);
        budget -= 1;
    }

    segments
}

fn find_absorbable_equality(segments: &[Segment]) -> Option<usize> {
    // First and last equalities border only one edit run.
    (1..segments.len().saturating_sub(1)).find(|&i| {
        if segments[i].kind != SegmentKind::Equal {
            return false;
        }
        let before = edit_lengths(segments[..i].iter().rev());
        let after = edit_lengths(segments[i + 1..].iter());
        let len = segments[i].text.chars().count();
        before != (0, 0)
            && after != (0, 0)
            && len <= before.0.max(before.1)
            && len <= after.0.max(after.1)
    })
}

/// (deleted, inserted) char counts of the edit run starting at the iterator.
fn edit_lengths<'a>(run: impl Iterator<Item = &'a Segment>) -> (usize, usize) {
    run.take_while(|s| s.kind != SegmentKind::Equal)
        .fold((0, 0), |(del, ins), s| match s.kind {
            SegmentKind::Delete => (del + s.text.chars().count(), ins),
            SegmentKind::Insert => (del, ins + s.text.chars().count()),
            SegmentKind::Equal => (del, ins),
        })
}

/// Normalize a script: one delete then one insert per change run, common
/// prefixes/suffixes of a run factored out into equalities, adjacent
/// equalities joined, empty segments dropped.
pub(super) fn merge(segments: Vec<Segment>) -> Vec<Segment> {
    let mut out: Vec<Segment> = Vec::with_capacity(segments.len());
    let mut deleted = String::new();
    let mut inserted = String::new();

    for segment in segments {
        match segment.kind {
            SegmentKind::Delete => deleted.push_str(&segment.text),
            SegmentKind::Insert => inserted.push_str(&segment.text),
            SegmentKind::Equal => {
                flush_run(&mut out, &mut deleted, &mut inserted);
                push_equal(&mut out, segment.text);
            }
        }
    }
    flush_run(&mut out, &mut deleted, &mut inserted);

    out
}

fn flush_run(out: &mut Vec<Segment>, deleted: &mut String, inserted: &mut String) {
    let mut suffix = String::new();

    if !deleted.is_empty() && !inserted.is_empty() {
        let prefix_len = common_prefix_len(deleted, inserted);
        if prefix_len > 0 {
            push_equal(out, deleted[..prefix_len].to_string());
            deleted.drain(..prefix_len);
            inserted.drain(..prefix_len);
        }

        let suffix_len = common_suffix_len(deleted, inserted);
        if suffix_len > 0 {
            suffix = deleted[deleted.len() - suffix_len..].to_string();
            deleted.truncate(deleted.len() - suffix_len);
            inserted.truncate(inserted.len() - suffix_len);
        }
    }

    if !deleted.is_empty() {
        out.push(Segment::delete(std::mem::take(deleted)));
    }
    if !inserted.is_empty() {
        out.push(Segment::insert(std::mem::take(inserted)));
    }
    push_equal(out, suffix);
}

fn push_equal(out: &mut Vec<Segment>, text: String) {
    if text.is_empty() {
        return;
    }
    match out.last_mut() {
        Some(last) if last.kind == SegmentKind::Equal => last.text.push_str(&text),
        _ => out.push(Segment::equal(text)),
    }
}

/// Byte length of the shared prefix, always on a char boundary.
fn common_prefix_len(a: &str, b: &str) -> usize {
    a.chars()
        .zip(b.chars())
        .take_while(|(x, y)| x == y)
        .map(|(x, _)| x.len_utf8())
        .sum()
}

/// Byte length of the shared suffix, always on a char boundary.
fn common_suffix_len(a: &str, b: &str) -> usize {
    a.chars()
        .rev()
        .zip(b.chars().rev())
        .take_while(|(x, y)| x == y)
        .map(|(x, _)| x.len_utf8())
        .sum()
}
