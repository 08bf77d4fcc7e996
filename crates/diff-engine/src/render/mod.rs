//! Renderings of a computed diff.

mod html;
mod side_by_side;
mod unified;

pub use html::{render_html, HtmlOptions};
pub use side_by_side::{inline_changes, render_side_by_side};
pub use unified::{build_hunks, render_unified, render_unified_with_labels};
