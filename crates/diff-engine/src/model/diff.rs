//! Diff data structures describing the alignment of two line sequences.

use super::LineSequence;
use serde::Serialize;
use std::ops::Range;

/// Classification of a single diff op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OpTag {
    Equal,
    Insert,
    Delete,
    Replace,
}

/// One step of the edit script.
///
/// Ranges are 0-based indices into the left (old) and right (new) sequences.
/// Insert ops have an empty old range at the position where the lines go in,
/// Delete ops an empty new range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "op", rename_all = "lowercase")]
pub enum DiffOp {
    /// Lines present on both sides. The two line lists differ only when the
    /// comparison ignored leading whitespace.
    Equal {
        old: Range<usize>,
        new: Range<usize>,
        old_lines: Vec<String>,
        new_lines: Vec<String>,
    },
    /// Lines only present on the right.
    Insert {
        old_index: usize,
        new: Range<usize>,
        lines: Vec<String>,
    },
    /// Lines only present on the left.
    Delete {
        old: Range<usize>,
        new_index: usize,
        lines: Vec<String>,
    },
    /// A run of left lines replaced by a run of right lines.
    Replace {
        old: Range<usize>,
        new: Range<usize>,
        old_lines: Vec<String>,
        new_lines: Vec<String>,
    },
}

impl DiffOp {
    pub fn tag(&self) -> OpTag {
        match self {
            DiffOp::Equal { .. } => OpTag::Equal,
            DiffOp::Insert { .. } => OpTag::Insert,
            DiffOp::Delete { .. } => OpTag::Delete,
            DiffOp::Replace { .. } => OpTag::Replace,
        }
    }

    /// Covered range in the left sequence.
    pub fn old_range(&self) -> Range<usize> {
        match self {
            DiffOp::Equal { old, .. } | DiffOp::Delete { old, .. } | DiffOp::Replace { old, .. } => {
                old.clone()
            }
            DiffOp::Insert { old_index, .. } => *old_index..*old_index,
        }
    }

    /// Covered range in the right sequence.
    pub fn new_range(&self) -> Range<usize> {
        match self {
            DiffOp::Equal { new, .. } | DiffOp::Insert { new, .. } | DiffOp::Replace { new, .. } => {
                new.clone()
            }
            DiffOp::Delete { new_index, .. } => *new_index..*new_index,
        }
    }

    /// Left-side content covered by this op.
    pub fn old_lines(&self) -> &[String] {
        match self {
            DiffOp::Equal { old_lines, .. } | DiffOp::Replace { old_lines, .. } => old_lines,
            DiffOp::Delete { lines, .. } => lines,
            DiffOp::Insert { .. } => &[],
        }
    }

    /// Right-side content covered by this op.
    pub fn new_lines(&self) -> &[String] {
        match self {
            DiffOp::Equal { new_lines, .. } | DiffOp::Replace { new_lines, .. } => new_lines,
            DiffOp::Insert { lines, .. } => lines,
            DiffOp::Delete { .. } => &[],
        }
    }

    pub fn is_change(&self) -> bool {
        self.tag() != OpTag::Equal
    }
}

/// Line counts over a whole diff.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct DiffSummary {
    /// Lines only present on the right (inserted, or the new side of a replace).
    pub added: usize,
    /// Lines only present on the left (deleted, or the old side of a replace).
    pub removed: usize,
    /// Lines matched on both sides.
    pub unchanged: usize,
}

impl DiffSummary {
    /// Tally counts from ops.
    pub fn from_ops(ops: &[DiffOp]) -> Self {
        ops.iter().fold(Self::default(), |mut acc, op| {
            match op.tag() {
                OpTag::Equal => acc.unchanged += op.old_range().len(),
                _ => {
                    acc.removed += op.old_range().len();
                    acc.added += op.new_range().len();
                }
            }
            acc
        })
    }

    /// Number of lines in the left text.
    pub fn left_lines(&self) -> usize {
        self.removed + self.unchanged
    }

    /// Number of lines in the right text.
    pub fn right_lines(&self) -> usize {
        self.added + self.unchanged
    }

    /// Total number of `+` and `-` lines.
    pub fn differences(&self) -> usize {
        self.added + self.removed
    }
}

/// The outcome of comparing two texts.
///
/// Ops are ordered, non-overlapping and together cover every line of both
/// inputs. Created fresh per comparison and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffResult {
    left: LineSequence,
    right: LineSequence,
    ops: Vec<DiffOp>,
    summary: DiffSummary,
}

impl DiffResult {
    pub(crate) fn new(left: LineSequence, right: LineSequence, ops: Vec<DiffOp>) -> Self {
        let summary = DiffSummary::from_ops(&ops);
        Self {
            left,
            right,
            ops,
            summary,
        }
    }

    pub fn ops(&self) -> &[DiffOp] {
        &self.ops
    }

    pub fn summary(&self) -> DiffSummary {
        self.summary
    }

    /// The left (old) input lines.
    pub fn left(&self) -> &LineSequence {
        &self.left
    }

    /// The right (new) input lines.
    pub fn right(&self) -> &LineSequence {
        &self.right
    }

    /// True when the two inputs align without any insert, delete or replace.
    pub fn is_identical(&self) -> bool {
        !self.ops.iter().any(DiffOp::is_change)
    }
}
