//! Application configuration
//!
//! Configuration loaded from .diff-checker.toml file.

use serde::{Deserialize, Serialize};

/// Application configuration loaded from .diff-checker.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Unchanged lines shown around each change
    #[serde(default = "default_context_lines")]
    pub context_lines: usize,

    /// Ignore spaces and tabs at the start of lines when comparing
    #[serde(default)]
    pub ignore_leading_whitespace: bool,

    /// Refuse inputs longer than this many lines (0 disables the guard)
    #[serde(default = "default_max_input_lines")]
    pub max_input_lines: usize,

    /// Wrap long lines in the HTML view (0 disables wrapping)
    #[serde(default = "default_wrap_column")]
    pub wrap_column: usize,

    /// Stop searching for a minimal diff after this many milliseconds (0 disables)
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,

    /// Label of the left text
    #[serde(default = "default_from_label")]
    pub from_label: String,

    /// Label of the right text
    #[serde(default = "default_to_label")]
    pub to_label: String,
}

fn default_context_lines() -> usize {
    3
}

fn default_max_input_lines() -> usize {
    50_000
}

fn default_wrap_column() -> usize {
    80
}

fn default_timeout_ms() -> u64 {
    5_000
}

fn default_from_label() -> String {
    "Text 1".to_string()
}

fn default_to_label() -> String {
    "Text 2".to_string()
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            context_lines: default_context_lines(),
            ignore_leading_whitespace: false,
            max_input_lines: default_max_input_lines(),
            wrap_column: default_wrap_column(),
            timeout_ms: default_timeout_ms(),
            from_label: default_from_label(),
            to_label: default_to_label(),
        }
    }
}

impl AppConfig {
    /// Load config from the first config file found, or use defaults
    pub fn load() -> Self {
        match crate::load_config_file() {
            Some(content) => Self::from_toml(&content),
            None => {
                log::debug!("Using default app config");
                Self::default()
            }
        }
    }

    /// Parse config content, falling back to defaults when it is invalid
    pub fn from_toml(content: &str) -> Self {
        match toml::from_str(content) {
            Ok(config) => {
                log::info!("Loaded app config from file");
                config
            }
            Err(e) => {
                log::warn!("Failed to parse config file: {}", e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.context_lines, 3);
        assert!(!config.ignore_leading_whitespace);
        assert_eq!(config.max_input_lines, 50_000);
        assert_eq!(config.wrap_column, 80);
        assert_eq!(config.timeout_ms, 5_000);
        assert_eq!(config.from_label, "Text 1");
        assert_eq!(config.to_label, "Text 2");
    }

    #[test]
    fn test_config_deserialize() {
        let toml = r#"
            context_lines = 5
            ignore_leading_whitespace = true
            timeout_ms = 250
            from_label = "before"
        "#;
        let config: AppConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.context_lines, 5);
        assert!(config.ignore_leading_whitespace);
        assert_eq!(config.timeout_ms, 250);
        assert_eq!(config.from_label, "before");
        // Other fields should use defaults
        assert_eq!(config.to_label, "Text 2");
        assert_eq!(config.wrap_column, 80);
    }

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let config = AppConfig::from_toml("context_lines = \"many\"");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(AppConfig::from_toml(""), AppConfig::default());
    }
}
