//! Command line arguments and their merge with the config file.

use clap::{Parser, ValueEnum};
use diff_checker_config::AppConfig;
use diff_engine::{DiffOptions, HtmlOptions};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(
    name = "diff-checker",
    version,
    about = "Compare two texts and see the differences between them"
)]
pub struct Cli {
    /// Left (old) text file, or `-` for stdin
    pub left: PathBuf,

    /// Right (new) text file, or `-` for stdin
    pub right: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Unified)]
    pub format: OutputFormat,

    /// Unchanged lines shown around each change
    #[arg(short = 'U', long)]
    pub context: Option<usize>,

    /// Ignore spaces and tabs at the start of lines when comparing
    #[arg(long, overrides_with = "no_ignore_leading_whitespace")]
    pub ignore_leading_whitespace: bool,

    /// Compare leading whitespace even if the config file ignores it
    #[arg(long, overrides_with = "ignore_leading_whitespace")]
    pub no_ignore_leading_whitespace: bool,

    /// Wrap long lines in the HTML view after N characters (0 disables)
    #[arg(long, value_name = "N")]
    pub wrap: Option<usize>,

    /// Refuse inputs longer than N lines (0 disables the guard)
    #[arg(long, value_name = "N")]
    pub max_lines: Option<usize>,

    /// Stop searching for a minimal diff after N milliseconds (0 disables)
    #[arg(long, value_name = "N")]
    pub timeout_ms: Option<u64>,

    /// Write the output to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Label of the left text
    #[arg(long)]
    pub from_label: Option<String>,

    /// Label of the right text
    #[arg(long)]
    pub to_label: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Unified diff with @@ hunks
    Unified,
    /// Two aligned columns
    SideBySide,
    /// Standalone HTML page with a color coded table
    Html,
    /// Machine readable summary, ops and rows
    Json,
    /// Line counts only
    Stats,
}

/// Effective settings after applying command line overrides to the config.
#[derive(Debug, Clone)]
pub struct Settings {
    pub format: OutputFormat,
    pub context: usize,
    pub diff_options: DiffOptions,
    pub html: HtmlOptions,
    pub output: Option<PathBuf>,
}

impl Settings {
    pub fn resolve(cli: &Cli, config: &AppConfig) -> Self {
        let context = cli.context.unwrap_or(config.context_lines);
        let max_lines = cli.max_lines.unwrap_or(config.max_input_lines);
        let wrap = cli.wrap.unwrap_or(config.wrap_column);
        let timeout_ms = cli.timeout_ms.unwrap_or(config.timeout_ms);
        let ignore_leading_whitespace = if cli.ignore_leading_whitespace {
            true
        } else if cli.no_ignore_leading_whitespace {
            false
        } else {
            config.ignore_leading_whitespace
        };

        let diff_options = DiffOptions::default()
            .ignore_leading_whitespace(ignore_leading_whitespace)
            .max_lines(non_zero(max_lines))
            .timeout((timeout_ms > 0).then(|| Duration::from_millis(timeout_ms)));

        let html = HtmlOptions {
            context: Some(context),
            wrap_column: non_zero(wrap),
            from_label: cli.from_label.clone().unwrap_or_else(|| config.from_label.clone()),
            to_label: cli.to_label.clone().unwrap_or_else(|| config.to_label.clone()),
        };

        Self {
            format: cli.format,
            context,
            diff_options,
            html,
            output: cli.output.clone(),
        }
    }

    pub fn from_label(&self) -> &str {
        &self.html.from_label
    }

    pub fn to_label(&self) -> &str {
        &self.html.to_label
    }
}

fn non_zero(value: usize) -> Option<usize> {
    (value > 0).then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("diff-checker").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults_come_from_config() {
        let cli = parse(&["a.txt", "b.txt"]);
        let settings = Settings::resolve(&cli, &AppConfig::default());

        assert_eq!(settings.format, OutputFormat::Unified);
        assert_eq!(settings.context, 3);
        assert!(!settings.diff_options.ignore_leading_whitespace);
        assert_eq!(settings.diff_options.max_lines, Some(50_000));
        assert_eq!(settings.diff_options.timeout, Some(Duration::from_secs(5)));
        assert_eq!(settings.html.wrap_column, Some(80));
        assert_eq!(settings.from_label(), "Text 1");
        assert_eq!(settings.to_label(), "Text 2");
    }

    #[test]
    fn test_flags_override_config() {
        let config = AppConfig {
            context_lines: 5,
            timeout_ms: 100,
            ..AppConfig::default()
        };
        let cli = parse(&[
            "-",
            "b.txt",
            "--format",
            "side-by-side",
            "-U",
            "1",
            "--ignore-leading-whitespace",
            "--wrap",
            "0",
            "--max-lines",
            "0",
            "--from-label",
            "old",
        ]);
        let settings = Settings::resolve(&cli, &config);

        assert_eq!(settings.format, OutputFormat::SideBySide);
        assert_eq!(settings.context, 1);
        assert_eq!(settings.html.context, Some(1));
        assert!(settings.diff_options.ignore_leading_whitespace);
        assert_eq!(settings.diff_options.max_lines, None);
        assert_eq!(settings.diff_options.timeout, Some(Duration::from_millis(100)));
        assert_eq!(settings.html.wrap_column, None);
        assert_eq!(settings.from_label(), "old");
        assert_eq!(settings.to_label(), "Text 2");
    }

    #[test]
    fn test_timeout_flag() {
        let config = AppConfig::default();
        let settings = Settings::resolve(&parse(&["a", "b", "--timeout-ms", "0"]), &config);
        assert_eq!(settings.diff_options.timeout, None);

        let settings = Settings::resolve(&parse(&["a", "b", "--timeout-ms", "250"]), &config);
        assert_eq!(settings.diff_options.timeout, Some(Duration::from_millis(250)));
    }

    #[test]
    fn test_config_whitespace_option_can_be_switched_off() {
        let config = AppConfig {
            ignore_leading_whitespace: true,
            ..AppConfig::default()
        };

        let settings = Settings::resolve(&parse(&["a", "b"]), &config);
        assert!(settings.diff_options.ignore_leading_whitespace);

        let cli = parse(&["a", "b", "--no-ignore-leading-whitespace"]);
        let settings = Settings::resolve(&cli, &config);
        assert!(!settings.diff_options.ignore_leading_whitespace);

        // The last of the two flags wins
        let cli = parse(&[
            "a",
            "b",
            "--no-ignore-leading-whitespace",
            "--ignore-leading-whitespace",
        ]);
        let settings = Settings::resolve(&cli, &AppConfig::default());
        assert!(settings.diff_options.ignore_leading_whitespace);
    }

    #[test]
    fn test_unknown_format_is_rejected() {
        let result = Cli::try_parse_from(["diff-checker", "a", "b", "--format", "xml"]);
        assert!(result.is_err());
    }
}
