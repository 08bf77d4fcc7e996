//! Reading the two texts to compare.

use anyhow::{bail, Context, Result};
use std::io::Read;
use std::path::Path;

const STDIN_MARKER: &str = "-";

fn is_stdin(path: &Path) -> bool {
    path.as_os_str() == STDIN_MARKER
}

/// Read both inputs. At most one of them may be `-` (stdin).
pub fn read_inputs(left: &Path, right: &Path) -> Result<(String, String)> {
    if is_stdin(left) && is_stdin(right) {
        bail!("Only one input can be read from stdin");
    }
    Ok((read_input(left)?, read_input(right)?))
}

fn read_input(path: &Path) -> Result<String> {
    if is_stdin(path) {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read text from stdin")?;
        return Ok(text);
    }

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    log::debug!("Read {} bytes from {}", text.len(), path.display());
    Ok(text)
}
