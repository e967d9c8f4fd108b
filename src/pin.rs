use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Writes `version` as the whole content of the pin file, replacing whatever
/// was there. No trailing newline.
pub fn write_version_pin(path: &Path, version: &str) -> Result<()> {
    fs::write(path, version).with_context(|| format!("failed to write {}", path.display()))
}
