use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

/// Error unless a regular file exists at `path`.
pub(crate) fn require_file_exists(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("File does not exist: {}", path.display());
    }
    if !path.is_file() {
        anyhow::bail!("Path exists but is not a file: {}", path.display());
    }
    Ok(())
}

/// Read the whole file at `path` into memory.
pub(crate) fn read_file(path: &Path) -> Result<Vec<u8>> {
    require_file_exists(path)?;
    fs::read(path).with_context(|| format!("Failed to read {}", path.display()))
}
