//! Hunks of a unified diff.

use serde::Serialize;

/// A contiguous block of changes plus surrounding context.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hunk {
    /// Left side starting line (1-based, or the preceding line when `old_count` is 0).
    pub old_start: usize,
    /// Number of left lines in the hunk.
    pub old_count: usize,
    /// Right side starting line.
    pub new_start: usize,
    /// Number of right lines in the hunk.
    pub new_count: usize,
    /// Lines in this hunk.
    pub lines: Vec<DiffLine>,
}

impl Hunk {
    /// Create a new hunk with the given header info.
    pub fn new(old_start: usize, old_count: usize, new_start: usize, new_count: usize) -> Self {
        Self {
            old_start,
            old_count,
            new_start,
            new_count,
            lines: Vec::new(),
        }
    }

    /// Header line (e.g., "@@ -10,5 +10,7 @@").
    pub fn header(&self) -> String {
        format!(
            "@@ -{},{} +{},{} @@",
            self.old_start, self.old_count, self.new_start, self.new_count
        )
    }
}

/// A single line in a hunk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffLine {
    /// Line type.
    pub kind: LineKind,
    /// Line content (without leading +/-/ ).
    pub content: String,
    /// Line number on the left (for Context and Deletion).
    pub old_line: Option<usize>,
    /// Line number on the right (for Context and Addition).
    pub new_line: Option<usize>,
}

impl DiffLine {
    /// Create a new context line.
    pub fn context(content: impl Into<String>, old_line: usize, new_line: usize) -> Self {
        Self {
            kind: LineKind::Context,
            content: content.into(),
            old_line: Some(old_line),
            new_line: Some(new_line),
        }
    }

    /// Create a new addition line.
    pub fn addition(content: impl Into<String>, new_line: usize) -> Self {
        Self {
            kind: LineKind::Addition,
            content: content.into(),
            old_line: None,
            new_line: Some(new_line),
        }
    }

    /// Create a new deletion line.
    pub fn deletion(content: impl Into<String>, old_line: usize) -> Self {
        Self {
            kind: LineKind::Deletion,
            content: content.into(),
            old_line: Some(old_line),
            new_line: None,
        }
    }
}

/// Line type in a hunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LineKind {
    /// Unchanged line.
    Context,
    /// Added line (+).
    Addition,
    /// Removed line (-).
    Deletion,
}

impl LineKind {
    /// Get the prefix character for this line type.
    pub fn prefix(&self) -> char {
        match self {
            LineKind::Context => ' ',
            LineKind::Addition => '+',
            LineKind::Deletion => '-',
        }
    }

    /// Whether the line counts toward the left side of a hunk.
    pub fn on_left(&self) -> bool {
        *self != LineKind::Addition
    }

    /// Whether the line counts toward the right side of a hunk.
    pub fn on_right(&self) -> bool {
        *self != LineKind::Deletion
    }
}
