//! # diff-engine
//!
//! Line based comparison of two texts, rendered as a unified diff or as
//! aligned side-by-side rows.
//!
//! ## Design Principles
//!
//! The engine is **stateless**: every comparison takes both texts explicitly
//! and returns a fresh, immutable [`DiffResult`]. Whatever session state a UI
//! needs (the current inputs, options) lives in the shell that calls in. This
//! keeps the engine safe to call from many threads at once.
//!
//! Presentation stays outside the core. [`render_side_by_side`] yields plain
//! [`RowView`] values; [`render_html`] is one consumer of them, colored through
//! an injected [`HtmlTheme`].
//!
//! ## Usage
//!
//! ```
//! use diff_engine::{compute_diff, render_side_by_side, render_unified, RowKind};
//!
//! let result = compute_diff("a\nb\nc", "a\nx\nc");
//! assert_eq!(result.summary().added, 1);
//!
//! let unified = render_unified(&result, 1);
//! assert!(unified.contains("-b\n+x\n"));
//!
//! let rows = render_side_by_side(&result);
//! assert_eq!(rows[1].kind, RowKind::Changed);
//! ```

pub mod engine;
pub mod error;
pub mod model;
pub mod render;
pub mod traits;

// Re-export commonly used types
pub use engine::{compute_diff, DiffEngine, DiffOptions, DEFAULT_MAX_LINES, DEFAULT_TIMEOUT};
pub use error::{DiffError, Side};
pub use model::{
    DiffLine, DiffOp, DiffResult, DiffSummary, Hunk, InlineSegment, LineKind, LineSequence,
    OpTag, RowKind, RowView,
};
pub use render::{
    build_hunks, inline_changes, render_html, render_side_by_side, render_unified,
    render_unified_with_labels, HtmlOptions,
};
pub use traits::{DefaultTheme, HtmlTheme};
