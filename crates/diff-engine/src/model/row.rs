//! Aligned rows for side-by-side display.

use serde::Serialize;

/// How a side-by-side row differs between the two inputs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RowKind {
    Unchanged,
    Added,
    Removed,
    Changed,
}

impl RowKind {
    /// Marker used by plain text side-by-side output (as in `diff -y`).
    pub fn marker(&self) -> char {
        match self {
            RowKind::Unchanged => ' ',
            RowKind::Added => '>',
            RowKind::Removed => '<',
            RowKind::Changed => '|',
        }
    }
}

/// One aligned row of a side-by-side comparison.
///
/// Line numbers are 1-based. A side is absent when the row has no line there.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RowView {
    pub left_line_number: Option<usize>,
    pub left_text: Option<String>,
    pub right_line_number: Option<usize>,
    pub right_text: Option<String>,
    pub kind: RowKind,
}

impl RowView {
    pub fn unchanged(left: (usize, &str), right: (usize, &str)) -> Self {
        Self::pair(left, right, RowKind::Unchanged)
    }

    pub fn changed(left: (usize, &str), right: (usize, &str)) -> Self {
        Self::pair(left, right, RowKind::Changed)
    }

    pub fn added(line_number: usize, text: &str) -> Self {
        Self {
            left_line_number: None,
            left_text: None,
            right_line_number: Some(line_number),
            right_text: Some(text.to_owned()),
            kind: RowKind::Added,
        }
    }

    pub fn removed(line_number: usize, text: &str) -> Self {
        Self {
            left_line_number: Some(line_number),
            left_text: Some(text.to_owned()),
            right_line_number: None,
            right_text: None,
            kind: RowKind::Removed,
        }
    }

    fn pair(left: (usize, &str), right: (usize, &str), kind: RowKind) -> Self {
        Self {
            left_line_number: Some(left.0),
            left_text: Some(left.1.to_owned()),
            right_line_number: Some(right.0),
            right_text: Some(right.1.to_owned()),
            kind,
        }
    }

    pub fn has_left(&self) -> bool {
        self.left_line_number.is_some()
    }

    pub fn has_right(&self) -> bool {
        self.right_line_number.is_some()
    }
}

/// A run of characters inside a changed line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InlineSegment {
    pub text: String,
    /// True when these characters differ from the other side.
    pub changed: bool,
}

impl InlineSegment {
    pub fn new(text: impl Into<String>, changed: bool) -> Self {
        Self {
            text: text.into(),
            changed,
        }
    }
}
