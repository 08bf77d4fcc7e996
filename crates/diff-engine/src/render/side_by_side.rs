//! Align a diff into side-by-side rows.

use crate::model::{DiffOp, DiffResult, InlineSegment, RowView};
use similar::{ChangeTag, TextDiff};

/// One row per aligned line pair, in alignment order.
///
/// Replace ops pair their lines up as changed rows; when one side of a
/// replace is longer, its leftover lines become removed or added rows.
pub fn render_side_by_side(result: &DiffResult) -> Vec<RowView> {
    let mut rows = Vec::with_capacity(result.left().len().max(result.right().len()));

    for op in result.ops() {
        let old_start = op.old_range().start + 1;
        let new_start = op.new_range().start + 1;
        let old_lines = op.old_lines();
        let new_lines = op.new_lines();

        match op {
            DiffOp::Equal { .. } => {
                for (i, (old, new)) in old_lines.iter().zip(new_lines).enumerate() {
                    rows.push(RowView::unchanged(
                        (old_start + i, old.as_str()),
                        (new_start + i, new.as_str()),
                    ));
                }
            }
            DiffOp::Delete { .. } => {
                for (i, old) in old_lines.iter().enumerate() {
                    rows.push(RowView::removed(old_start + i, old));
                }
            }
            DiffOp::Insert { .. } => {
                for (i, new) in new_lines.iter().enumerate() {
                    rows.push(RowView::added(new_start + i, new));
                }
            }
            DiffOp::Replace { .. } => {
                let paired = old_lines.len().min(new_lines.len());
                for i in 0..paired {
                    rows.push(RowView::changed(
                        (old_start + i, old_lines[i].as_str()),
                        (new_start + i, new_lines[i].as_str()),
                    ));
                }
                for (i, old) in old_lines.iter().enumerate().skip(paired) {
                    rows.push(RowView::removed(old_start + i, old));
                }
                for (i, new) in new_lines.iter().enumerate().skip(paired) {
                    rows.push(RowView::added(new_start + i, new));
                }
            }
        }
    }

    rows
}

/// Character level comparison of a changed line pair.
///
/// Returns the segments of the old line and of the new line; segments marked
/// `changed` are absent from the other side.
pub fn inline_changes(old: &str, new: &str) -> (Vec<InlineSegment>, Vec<InlineSegment>) {
    let diff = TextDiff::from_chars(old, new);
    let mut old_segments = Vec::new();
    let mut new_segments = Vec::new();

    for change in diff.iter_all_changes() {
        let value = change.value();
        match change.tag() {
            ChangeTag::Equal => {
                push_segment(&mut old_segments, value, false);
                push_segment(&mut new_segments, value, false);
            }
            ChangeTag::Delete => push_segment(&mut old_segments, value, true),
            ChangeTag::Insert => push_segment(&mut new_segments, value, true),
        }
    }

    (old_segments, new_segments)
}

fn push_segment(segments: &mut Vec<InlineSegment>, text: &str, changed: bool) {
    match segments.last_mut() {
        Some(last) if last.changed == changed => last.text.push_str(text),
        _ => segments.push(InlineSegment::new(text, changed)),
    }
}
