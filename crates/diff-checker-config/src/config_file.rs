use std::{env, path::PathBuf};

const CONFIG_FILE: &str = ".diff-checker.toml";

/// Load config file content
///
/// Searches in order:
/// 1. `.diff-checker.toml` in the current working directory
/// 2. `.diff-checker.toml` in the home directory
/// 3. `config.toml` in the platform config directory
///
/// Returns the file content if found, None otherwise.
pub fn load_config_file() -> Option<String> {
    candidate_paths().into_iter().find_map(|path| {
        let content = std::fs::read_to_string(&path).ok()?;
        log::debug!("Loaded config from {}", path.display());
        Some(content)
    })
}

fn candidate_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from(CONFIG_FILE)];
    if let Some(home_config) = get_home_config_path() {
        paths.push(home_config);
    }
    if let Ok(app_config) = crate::paths::app_config_path() {
        paths.push(app_config);
    }
    paths
}

/// Get the path to the config file in the home directory
///
/// Returns ~/.diff-checker.toml if HOME environment variable is set.
fn get_home_config_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(CONFIG_FILE))
}
