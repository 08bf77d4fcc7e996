//! Line sequences split from raw input text.

use serde::Serialize;
use std::ops::{Index, Range};

/// An immutable, ordered sequence of lines taken from one input text.
///
/// Splitting follows [`str::lines`]: lines end at `\n`, a `\r` right before the
/// `\n` is dropped, and a trailing newline does not start an extra empty line.
/// The empty string is therefore a sequence of zero lines.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct LineSequence {
    lines: Vec<String>,
}

impl LineSequence {
    /// Split a text into lines.
    pub fn from_text(text: &str) -> Self {
        Self {
            lines: text.lines().map(str::to_owned).collect(),
        }
    }

    /// Number of lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// All lines as a slice.
    pub fn as_slice(&self) -> &[String] {
        &self.lines
    }

    /// Lines within an index range.
    pub fn slice(&self, range: Range<usize>) -> &[String] {
        &self.lines[range]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.lines.iter()
    }

    /// Comparison keys for each line, optionally ignoring leading spaces and tabs.
    pub(crate) fn comparison_keys(&self, ignore_leading_whitespace: bool) -> Vec<&str> {
        self.lines
            .iter()
            .map(|line| {
                if ignore_leading_whitespace {
                    line.trim_start_matches(|c: char| c == ' ' || c == '\t')
                } else {
                    line.as_str()
                }
            })
            .collect()
    }
}

impl Index<usize> for LineSequence {
    type Output = String;

    fn index(&self, index: usize) -> &Self::Output {
        &self.lines[index]
    }
}

impl<'a> IntoIterator for &'a LineSequence {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}
