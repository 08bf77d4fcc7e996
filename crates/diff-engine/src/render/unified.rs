//! Render a diff in unified format.

use crate::model::{DiffLine, DiffOp, DiffResult, Hunk};
use std::fmt::Write;

/// Group the diff into hunks with up to `context` unchanged lines around
/// each change. Change groups separated by at most `2 * context` unchanged
/// lines share a hunk.
pub fn build_hunks(result: &DiffResult, context: usize) -> Vec<Hunk> {
    let lines = flatten(result);
    let changes: Vec<usize> = lines
        .iter()
        .enumerate()
        .filter(|(_, l)| l.old_line.is_none() || l.new_line.is_none())
        .map(|(i, _)| i)
        .collect();

    let Some(&first) = changes.first() else {
        return Vec::new();
    };

    let mut groups: Vec<(usize, usize)> = Vec::new();
    let (mut group_start, mut group_end) = (first, first);
    for &idx in &changes[1..] {
        if idx - group_end - 1 > context.saturating_mul(2) {
            groups.push((group_start, group_end));
            group_start = idx;
        }
        group_end = idx;
    }
    groups.push((group_start, group_end));

    groups
        .into_iter()
        .map(|(first_change, last_change)| {
            let start = first_change.saturating_sub(context);
            let end = last_change
                .saturating_add(context)
                .saturating_add(1)
                .min(lines.len());
            make_hunk(&lines, start, end)
        })
        .collect()
}

/// Render hunks only. Returns an empty string when the inputs do not differ.
pub fn render_unified(result: &DiffResult, context: usize) -> String {
    let mut out = String::new();
    for hunk in build_hunks(result, context) {
        write_hunk(&mut out, &hunk);
    }
    out
}

/// Render with a `---`/`+++` file header naming both sides. Returns an empty
/// string when the inputs do not differ.
pub fn render_unified_with_labels(
    result: &DiffResult,
    context: usize,
    from_label: &str,
    to_label: &str,
) -> String {
    let hunks = render_unified(result, context);
    if hunks.is_empty() {
        return hunks;
    }
    format!("--- {}\n+++ {}\n{}", from_label, to_label, hunks)
}

/// Every line of both inputs in alignment order, numbered from 1.
fn flatten(result: &DiffResult) -> Vec<DiffLine> {
    let mut lines = Vec::with_capacity(result.left().len().max(result.right().len()));
    for op in result.ops() {
        let old_start = op.old_range().start + 1;
        let new_start = op.new_range().start + 1;
        match op {
            DiffOp::Equal { old_lines, .. } => {
                for (i, content) in old_lines.iter().enumerate() {
                    lines.push(DiffLine::context(content, old_start + i, new_start + i));
                }
            }
            _ => {
                for (i, content) in op.old_lines().iter().enumerate() {
                    lines.push(DiffLine::deletion(content, old_start + i));
                }
                for (i, content) in op.new_lines().iter().enumerate() {
                    lines.push(DiffLine::addition(content, new_start + i));
                }
            }
        }
    }
    lines
}

fn make_hunk(lines: &[DiffLine], start: usize, end: usize) -> Hunk {
    let before = &lines[..start];
    let body = &lines[start..end];

    let old_before = before.iter().filter(|l| l.kind.on_left()).count();
    let new_before = before.iter().filter(|l| l.kind.on_right()).count();
    let old_count = body.iter().filter(|l| l.kind.on_left()).count();
    let new_count = body.iter().filter(|l| l.kind.on_right()).count();

    // An empty side points at the line before the hunk
    let old_start = if old_count == 0 { old_before } else { old_before + 1 };
    let new_start = if new_count == 0 { new_before } else { new_before + 1 };

    let mut hunk = Hunk::new(old_start, old_count, new_start, new_count);
    hunk.lines = body.to_vec();
    hunk
}

fn write_hunk(out: &mut String, hunk: &Hunk) {
    // Writing to a String cannot fail
    let _ = writeln!(out, "{}", hunk.header());
    for line in &hunk.lines {
        let _ = writeln!(out, "{}{}", line.kind.prefix(), line.content);
    }
}
