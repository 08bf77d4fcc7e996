//! Trait for providing colors to the HTML renderer.

/// Provides CSS colors for the side-by-side HTML view.
///
/// Implement this trait to match the HTML output to the page that embeds it.
/// Every method returns a CSS color value.
///
/// # Example
///
/// ```
/// use diff_engine::HtmlTheme;
///
/// struct DarkTheme;
///
/// impl HtmlTheme for DarkTheme {
///     fn addition_background(&self) -> &str {
///         "#1e3c1e"
///     }
///
///     fn deletion_background(&self) -> &str {
///         "#3c1e1e"
///     }
///
///     fn text_foreground(&self) -> &str {
///         "#e0e0e0"
///     }
/// }
/// ```
pub trait HtmlTheme: Send + Sync {
    /// Background color for added lines.
    fn addition_background(&self) -> &str;

    /// Background color for removed lines.
    fn deletion_background(&self) -> &str;

    /// Background color for the differing characters of changed lines.
    fn change_background(&self) -> &str {
        "#ffff77"
    }

    /// Foreground color for line text.
    fn text_foreground(&self) -> &str {
        "#000000"
    }

    /// Background color for the line number columns and table header.
    fn header_background(&self) -> &str {
        "#e0e0e0"
    }

    /// Foreground color for line numbers.
    fn line_number_foreground(&self) -> &str {
        "#606060"
    }

    /// Foreground color for collapsed-lines markers.
    fn skip_foreground(&self) -> &str {
        "#808080"
    }
}

/// Default theme using the classic light diff palette.
#[derive(Debug, Clone, Default)]
pub struct DefaultTheme;

impl HtmlTheme for DefaultTheme {
    fn addition_background(&self) -> &str {
        "#aaffaa" // light green
    }

    fn deletion_background(&self) -> &str {
        "#ffaaaa" // light red
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_theme() {
        let theme = DefaultTheme;
        assert_eq!(theme.addition_background(), "#aaffaa");
        assert_eq!(theme.deletion_background(), "#ffaaaa");
        assert_eq!(theme.change_background(), "#ffff77");
    }
}
