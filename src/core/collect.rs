//! Single-pass region collection for one source file.
//!
//! The collector threads an explicit open-set through the scan instead of
//! keeping ambient state, so it stays pure and independently testable.
//! Regions may overlap: a content line inside two concurrently open regions
//! belongs to both.

use std::path::{Path, PathBuf};

use indexmap::{IndexMap, IndexSet};

use crate::core::marker::{self, MarkerTag};

/// Default suffix appended to emitted tag names.
pub const DEFAULT_SUFFIX: &str = "_modular";

/// Per-file extraction settings, derived once from the file's own lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileConfig {
    /// Extraction is on for this file
    pub enabled: bool,

    /// Suffix applied to embedded tag names on emission
    pub suffix: String,
}

/// A named span of lines, inclusive of its own Start and End tag lines.
#[derive(Debug, Clone)]
pub struct Region {
    pub name: String,
    pub lines: Vec<String>,
    pub source: PathBuf,
}

/// Fatal collection failures. Either one aborts the whole run.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CollectError {
    #[error("duplicate snippet name: {0}")]
    DuplicateSnippetName(String),

    #[error("unmatched end tag: {0}")]
    UnmatchedEndTag(String),
}

/// Derive the per-file config by scanning all lines once.
/// First suffix marker wins when several exist.
pub fn derive_config(lines: &[String]) -> FileConfig {
    let enabled = lines.iter().any(|l| marker::is_enable_marker(l));

    let suffix = lines
        .iter()
        .find_map(|l| marker::suffix_override(l))
        .unwrap_or_else(|| DEFAULT_SUFFIX.to_string());

    FileConfig { enabled, suffix }
}

/// Collect all regions from `lines` in one pass, preserving file order.
///
/// A region still open at end of file is kept as-is; a missing End line is
/// deliberately not an error.
pub fn collect_regions(
    lines: &[String],
    source: &Path,
) -> Result<IndexMap<String, Region>, CollectError> {
    let mut regions: IndexMap<String, Region> = IndexMap::new();
    let mut open: IndexSet<String> = IndexSet::new();

    for line in lines {
        match marker::classify(line) {
            MarkerTag::Start(name) => {
                if regions.contains_key(&name) {
                    return Err(CollectError::DuplicateSnippetName(name));
                }

                regions.insert(
                    name.clone(),
                    Region {
                        name: name.clone(),
                        lines: vec![line.clone()],
                        source: source.to_path_buf(),
                    },
                );
                open.insert(name);
            }

            MarkerTag::End(name) => {
                if !open.shift_remove(&name) {
                    return Err(CollectError::UnmatchedEndTag(name));
                }

                // Open names always have a map entry
                if let Some(region) = regions.get_mut(&name) {
                    region.lines.push(line.clone());
                }
            }

            MarkerTag::Plain => {
                // Content lines append to every open region independently
                for name in &open {
                    if let Some(region) = regions.get_mut(name) {
                        region.lines.push(line.clone());
                    }
                }
            }
        }
    }

    Ok(regions)
}
