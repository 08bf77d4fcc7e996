//! Line diff computation on top of the `similar` Myers implementation.

use crate::error::{DiffError, Side};
use crate::model::{DiffOp, DiffResult, LineSequence};
use similar::Algorithm;
use std::time::{Duration, Instant};

/// Default per-side line limit used by [`DiffOptions::default`].
pub const DEFAULT_MAX_LINES: usize = 50_000;

/// Default time budget for finding a minimal alignment.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(5);

/// Options controlling how two texts are compared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOptions {
    /// Ignore spaces and tabs at the start of each line when comparing.
    pub ignore_leading_whitespace: bool,
    /// Reject inputs with more lines than this on either side.
    pub max_lines: Option<usize>,
    /// Give up on a minimal alignment after this long. The alignment stays
    /// valid but may not be minimal.
    pub timeout: Option<Duration>,
}

impl Default for DiffOptions {
    fn default() -> Self {
        Self {
            ignore_leading_whitespace: false,
            max_lines: Some(DEFAULT_MAX_LINES),
            timeout: Some(DEFAULT_TIMEOUT),
        }
    }
}

impl DiffOptions {
    pub fn ignore_leading_whitespace(mut self, ignore: bool) -> Self {
        self.ignore_leading_whitespace = ignore;
        self
    }

    pub fn max_lines(mut self, max_lines: Option<usize>) -> Self {
        self.max_lines = max_lines;
        self
    }

    pub fn timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout = timeout;
        self
    }
}

/// Stateless diff engine. Safe to share across threads; every call works on
/// its own local data.
#[derive(Debug, Clone, Default)]
pub struct DiffEngine {
    options: DiffOptions,
}

impl DiffEngine {
    pub fn new(options: DiffOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DiffOptions {
        &self.options
    }

    /// Compare two texts line by line.
    ///
    /// Fails only when an input exceeds [`DiffOptions::max_lines`].
    pub fn compute_diff(&self, left: &str, right: &str) -> Result<DiffResult, DiffError> {
        let left = LineSequence::from_text(left);
        let right = LineSequence::from_text(right);

        if let Some(limit) = self.options.max_lines {
            for (side, seq) in [(Side::Left, &left), (Side::Right, &right)] {
                if seq.len() > limit {
                    log::warn!(
                        "Rejecting {} input: {} lines exceeds limit of {}",
                        side,
                        seq.len(),
                        limit
                    );
                    return Err(DiffError::InputTooLarge {
                        side,
                        lines: seq.len(),
                        limit,
                    });
                }
            }
        }

        let deadline = self.options.timeout.map(|t| Instant::now() + t);
        Ok(diff_sequences(
            left,
            right,
            self.options.ignore_leading_whitespace,
            deadline,
        ))
    }
}

/// Compare two texts line by line with default comparison rules and no size
/// guard. Total: every pair of strings yields a result.
pub fn compute_diff(left: &str, right: &str) -> DiffResult {
    diff_sequences(
        LineSequence::from_text(left),
        LineSequence::from_text(right),
        false,
        None,
    )
}

fn diff_sequences(
    left: LineSequence,
    right: LineSequence,
    ignore_leading_whitespace: bool,
    deadline: Option<Instant>,
) -> DiffResult {
    let started = Instant::now();

    let ops = {
        let old_keys = left.comparison_keys(ignore_leading_whitespace);
        let new_keys = right.comparison_keys(ignore_leading_whitespace);
        similar::capture_diff_slices_deadline(Algorithm::Myers, &old_keys, &new_keys, deadline)
            .into_iter()
            .map(|op| convert_op(op, &left, &right))
            .collect::<Vec<_>>()
    };

    let result = DiffResult::new(left, right, ops);
    let summary = result.summary();
    log::debug!(
        "Computed {} ops (+{} -{} ={}) in {:?}",
        result.ops().len(),
        summary.added,
        summary.removed,
        summary.unchanged,
        started.elapsed()
    );
    result
}

fn convert_op(op: similar::DiffOp, left: &LineSequence, right: &LineSequence) -> DiffOp {
    match op {
        similar::DiffOp::Equal {
            old_index,
            new_index,
            len,
        } => {
            let old = old_index..old_index + len;
            let new = new_index..new_index + len;
            DiffOp::Equal {
                old_lines: left.slice(old.clone()).to_vec(),
                new_lines: right.slice(new.clone()).to_vec(),
                old,
                new,
            }
        }
        similar::DiffOp::Delete {
            old_index,
            old_len,
            new_index,
        } => {
            let old = old_index..old_index + old_len;
            DiffOp::Delete {
                lines: left.slice(old.clone()).to_vec(),
                old,
                new_index,
            }
        }
        similar::DiffOp::Insert {
            old_index,
            new_index,
            new_len,
        } => {
            let new = new_index..new_index + new_len;
            DiffOp::Insert {
                lines: right.slice(new.clone()).to_vec(),
                old_index,
                new,
            }
        }
        similar::DiffOp::Replace {
            old_index,
            old_len,
            new_index,
            new_len,
        } => {
            let old = old_index..old_index + old_len;
            let new = new_index..new_index + new_len;
            DiffOp::Replace {
                old_lines: left.slice(old.clone()).to_vec(),
                new_lines: right.slice(new.clone()).to_vec(),
                old,
                new,
            }
        }
    }
}
