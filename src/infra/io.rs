use std::path::Path;

use anyhow::{Context, Result};

/// Read a UTF-8 file and split it into lines. A trailing `\r` is trimmed so
/// CRLF inputs behave like LF inputs downstream.
pub fn read_lines<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read file {}", path.display()))?;

    Ok(content
        .lines()
        .map(|l| l.trim_end_matches('\r').to_string())
        .collect())
}

/// Write `content` to `path`, creating intermediate directories as needed.
/// An existing file at the target is overwritten unconditionally.
pub fn write_output(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(path, content)
        .with_context(|| format!("Failed to write to {}", path.display()))
}
