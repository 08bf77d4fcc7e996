//! Configuration directory paths
//!
//! Uses XDG directories via `dirs` crate.
//!
//! Platform-specific locations:
//! - Linux: `~/.config/diff-checker/`
//! - macOS: `~/Library/Application Support/diff-checker/`
//! - Windows: `%APPDATA%\diff-checker\`

use anyhow::{Context, Result};
use std::path::PathBuf;

const APP_NAME: &str = "diff-checker";

/// Get the application config directory
///
/// Unlike a cache directory this is only read from, so it is not created.
pub fn config_dir() -> Result<PathBuf> {
    let base = dirs::config_dir().context("Could not determine config directory")?;
    Ok(base.join(APP_NAME))
}

/// Get path to app config file
pub fn app_config_path() -> Result<PathBuf> {
    Ok(config_dir()?.join("config.toml"))
}
