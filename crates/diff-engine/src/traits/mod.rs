//! Extension traits for customizing rendering.

mod theme_provider;

pub use theme_provider::{DefaultTheme, HtmlTheme};
