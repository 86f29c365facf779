//! Output composition and placement for transformed regions.
//!
//! Every emitted file starts with a fixed attribution header naming the
//! originating source file, and lands at
//! `<out_root>/<source_slug>/<region_name>.<source_extension>`.

use std::path::{Path, PathBuf};

use anyhow::Result;
use itertools::Itertools;
use tracing::debug;

use crate::core::collect::Region;
use crate::infra::io::write_output;

/// Fixed attribution header followed by one blank separator line.
fn header(source: &Path) -> Vec<String> {
    vec![
        "// This snippet file was generated by processing the source file:".to_string(),
        format!("// {}", source.display()),
        "//".to_string(),
        "// To update the snippets in this file, edit the source file and".to_string(),
        "// then run 'sgen extract'.".to_string(),
        String::new(),
    ]
}

/// Slug of a source path: extension stripped, path separators and dots
/// folded to underscores. `auth/next.index.js` -> `auth_next_index`.
pub fn file_slug(source: &Path) -> String {
    source
        .with_extension("")
        .to_string_lossy()
        .chars()
        .map(|c| match c {
            '/' | '\\' | '.' => '_',
            other => other,
        })
        .collect()
}

/// Deterministic output location for one region. The unsuffixed region name
/// becomes the file stem; the source extension is retained.
pub fn output_path(out_root: &Path, source: &Path, region_name: &str) -> PathBuf {
    let ext = source
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("txt");

    out_root
        .join(file_slug(source))
        .join(format!("{region_name}.{ext}"))
}

/// Compose header + body for one region.
pub fn render(region: &Region, body: &[String]) -> String {
    let mut lines = header(&region.source);
    lines.extend(body.iter().cloned());

    let mut content = lines.iter().join("\n");
    content.push('\n');
    content
}

/// Write one transformed region under `out_root`, creating intermediate
/// directories and overwriting unconditionally. Returns the written path.
pub fn emit_region(out_root: &Path, region: &Region, body: &[String]) -> Result<PathBuf> {
    let path = output_path(out_root, &region.source, &region.name);
    write_output(&path, &render(region, body))?;

    debug!(
        region = %region.name,
        path = %path.display(),
        "emitted snippet"
    );
    Ok(path)
}
