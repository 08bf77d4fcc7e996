//! Data models for diff representation.

mod diff;
mod hunk;
mod lines;
mod row;

pub use diff::{DiffOp, DiffResult, DiffSummary, OpTag};
pub use hunk::{DiffLine, Hunk, LineKind};
pub use lines::LineSequence;
pub use row::{InlineSegment, RowKind, RowView};
