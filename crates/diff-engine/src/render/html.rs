//! Standalone HTML page with a color coded side-by-side table.

use super::side_by_side::inline_changes;
use crate::model::{InlineSegment, RowKind, RowView};
use crate::traits::HtmlTheme;
use std::fmt::Write;

/// Options for [`render_html`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HtmlOptions {
    /// Unchanged rows kept around each change. `None` shows every row.
    pub context: Option<usize>,
    /// Wrap line text after this many characters. `None` disables wrapping.
    pub wrap_column: Option<usize>,
    /// Column title for the left text.
    pub from_label: String,
    /// Column title for the right text.
    pub to_label: String,
}

impl Default for HtmlOptions {
    fn default() -> Self {
        Self {
            context: Some(3),
            wrap_column: Some(80),
            from_label: "Text 1".to_string(),
            to_label: "Text 2".to_string(),
        }
    }
}

enum Entry<'a> {
    Row(&'a RowView),
    /// A run of hidden unchanged rows.
    Skip(usize),
}

/// Render side-by-side rows as a complete HTML document.
///
/// Added, removed and changed rows are colored through `theme`; inside
/// changed rows only the differing characters are highlighted.
pub fn render_html<T: HtmlTheme>(rows: &[RowView], options: &HtmlOptions, theme: &T) -> String {
    let mut out = String::new();
    write_head(&mut out, options, theme);

    let has_changes = rows.iter().any(|r| r.kind != RowKind::Unchanged);
    if options.context.is_some() && !has_changes {
        out.push_str("<tr><td class=\"diff_skip\" colspan=\"4\">No differences found</td></tr>\n");
    } else {
        for entry in visible_entries(rows, options.context) {
            match entry {
                Entry::Row(row) => write_row(&mut out, row, options.wrap_column),
                Entry::Skip(hidden) => {
                    let _ = writeln!(
                        out,
                        "<tr><td class=\"diff_skip\" colspan=\"4\">... {} hidden lines ...</td></tr>",
                        hidden
                    );
                }
            }
        }
    }

    out.push_str("</tbody>\n</table>\n</body>\n</html>\n");
    out
}

fn write_head<T: HtmlTheme>(out: &mut String, options: &HtmlOptions, theme: &T) {
    let from = html_escape::encode_text(&options.from_label);
    let to = html_escape::encode_text(&options.to_label);

    let _ = writeln!(out, "<!DOCTYPE html>");
    let _ = writeln!(out, "<html>\n<head>\n<meta charset=\"utf-8\">");
    let _ = writeln!(out, "<title>{} vs {}</title>", from, to);
    let _ = writeln!(out, "<style>");
    let _ = writeln!(
        out,
        "table.diff {{ font-family: Courier, monospace; border-collapse: collapse; color: {}; }}",
        theme.text_foreground()
    );
    let _ = writeln!(
        out,
        "table.diff td {{ padding: 0 4px; white-space: pre-wrap; vertical-align: top; }}"
    );
    let _ = writeln!(
        out,
        ".diff_header {{ background-color: {}; color: {}; text-align: right; }}",
        theme.header_background(),
        theme.line_number_foreground()
    );
    let _ = writeln!(
        out,
        ".diff_add {{ background-color: {}; }}",
        theme.addition_background()
    );
    let _ = writeln!(
        out,
        ".diff_sub {{ background-color: {}; }}",
        theme.deletion_background()
    );
    let _ = writeln!(
        out,
        ".diff_chg {{ background-color: {}; }}",
        theme.change_background()
    );
    let _ = writeln!(
        out,
        ".diff_skip {{ color: {}; text-align: center; }}",
        theme.skip_foreground()
    );
    let _ = writeln!(out, "</style>\n</head>\n<body>");
    let _ = writeln!(out, "<table class=\"diff\">");
    let _ = writeln!(
        out,
        "<thead><tr><th class=\"diff_header\" colspan=\"2\">{}</th><th class=\"diff_header\" colspan=\"2\">{}</th></tr></thead>",
        from, to
    );
    let _ = writeln!(out, "<tbody>");
}

fn visible_entries(rows: &[RowView], context: Option<usize>) -> Vec<Entry<'_>> {
    let Some(context) = context else {
        return rows.iter().map(Entry::Row).collect();
    };

    let mut keep = vec![false; rows.len()];
    for (i, row) in rows.iter().enumerate() {
        if row.kind != RowKind::Unchanged {
            let end = i.saturating_add(context).saturating_add(1).min(rows.len());
            for flag in &mut keep[i.saturating_sub(context)..end] {
                *flag = true;
            }
        }
    }

    let mut entries = Vec::new();
    let mut hidden = 0;
    for (row, kept) in rows.iter().zip(keep) {
        if kept {
            if hidden > 0 {
                entries.push(Entry::Skip(hidden));
                hidden = 0;
            }
            entries.push(Entry::Row(row));
        } else {
            hidden += 1;
        }
    }
    if hidden > 0 {
        entries.push(Entry::Skip(hidden));
    }
    entries
}

fn write_row(out: &mut String, row: &RowView, wrap_column: Option<usize>) {
    let (left, right) = match row.kind {
        RowKind::Changed => inline_changes(
            row.left_text.as_deref().unwrap_or_default(),
            row.right_text.as_deref().unwrap_or_default(),
        ),
        _ => (
            plain_segments(row.left_text.as_deref()),
            plain_segments(row.right_text.as_deref()),
        ),
    };
    let (left_class, right_class) = match row.kind {
        RowKind::Added => ("", "diff_add"),
        RowKind::Removed => ("diff_sub", ""),
        RowKind::Unchanged | RowKind::Changed => ("", ""),
    };

    let left_lines = wrap_segments(&left, wrap_column);
    let right_lines = wrap_segments(&right, wrap_column);
    let height = left_lines.len().max(right_lines.len());

    for i in 0..height {
        out.push_str("<tr>");
        write_side(
            out,
            row.left_line_number,
            left_lines.get(i),
            left_class,
            i,
        );
        write_side(
            out,
            row.right_line_number,
            right_lines.get(i),
            right_class,
            i,
        );
        out.push_str("</tr>\n");
    }
}

fn write_side(
    out: &mut String,
    line_number: Option<usize>,
    segments: Option<&Vec<InlineSegment>>,
    class: &str,
    visual_line: usize,
) {
    let (Some(number), Some(segments)) = (line_number, segments) else {
        out.push_str("<td class=\"diff_header\"></td><td></td>");
        return;
    };

    // Continuation rows of a wrapped line are marked with '>'
    if visual_line == 0 {
        let _ = write!(out, "<td class=\"diff_header\">{}</td>", number);
    } else {
        out.push_str("<td class=\"diff_header\">&gt;</td>");
    }

    if class.is_empty() {
        out.push_str("<td>");
    } else {
        let _ = write!(out, "<td class=\"{}\">", class);
    }
    for segment in segments {
        let text = html_escape::encode_text(&segment.text);
        if segment.changed {
            let _ = write!(out, "<span class=\"diff_chg\">{}</span>", text);
        } else {
            out.push_str(&text);
        }
    }
    out.push_str("</td>");
}

fn plain_segments(text: Option<&str>) -> Vec<InlineSegment> {
    match text {
        Some(text) if !text.is_empty() => vec![InlineSegment::new(text, false)],
        _ => Vec::new(),
    }
}

/// Split segments into visual lines of at most `width` characters.
fn wrap_segments(segments: &[InlineSegment], width: Option<usize>) -> Vec<Vec<InlineSegment>> {
    let width = match width {
        Some(width) if width > 0 => width,
        _ => return vec![segments.to_vec()],
    };

    let mut lines: Vec<Vec<InlineSegment>> = vec![Vec::new()];
    let mut used = 0;
    for segment in segments {
        let mut rest = segment.text.as_str();
        while !rest.is_empty() {
            if used == width {
                lines.push(Vec::new());
                used = 0;
            }
            let split_at = rest
                .char_indices()
                .nth(width - used)
                .map(|(idx, _)| idx)
                .unwrap_or(rest.len());
            let (chunk, tail) = rest.split_at(split_at);
            used += chunk.chars().count();
            if let Some(line) = lines.last_mut() {
                line.push(InlineSegment::new(chunk, segment.changed));
            }
            rest = tail;
        }
    }
    lines
}
