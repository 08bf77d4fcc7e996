//! Errors raised by the diff engine.

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Which of the two inputs an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => f.write_str("left"),
            Side::Right => f.write_str("right"),
        }
    }
}

/// Errors that can occur while computing a diff.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DiffError {
    /// One input has more lines than the configured guard allows.
    #[error("Input too large: {side} text has {lines} lines, limit is {limit}")]
    InputTooLarge {
        side: Side,
        lines: usize,
        limit: usize,
    },
}
