//! Line classification for snippet boundary and control markers.
//!
//! All recognition is exact-pattern based: a line either contains a
//! well-formed marker or it is plain content. Near-misses (wrong charset,
//! missing bracket) deliberately classify as plain rather than erroring.

use std::sync::LazyLock;

use regex::Regex;

/// `[START <name>]` with tolerated whitespace around the name.
static START_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[START\s+([A-Za-z_]+)\s*\]").unwrap());

/// `[END <name>]` with tolerated whitespace around the name.
static END_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[END\s+([A-Za-z_]+)\s*\]").unwrap());

/// `[SNIPPETS enabled]` turns extraction on for the containing file.
static ENABLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[SNIPPETS\s+enabled\s*\]").unwrap());

/// `[SNIPPETS suffix <word>]` overrides the default tag suffix.
static SUFFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[SNIPPETS\s+suffix\s+([A-Za-z0-9_]+)\s*\]").unwrap());

/// Classification of a single source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MarkerTag {
    /// Line opens the named region
    Start(String),

    /// Line closes the named region
    End(String),

    /// Ordinary content line
    Plain,
}

/// Classify one line. Start takes precedence if a line somehow carries both
/// marker shapes.
pub fn classify(line: &str) -> MarkerTag {
    if let Some(caps) = START_RE.captures(line) {
        return MarkerTag::Start(caps[1].to_string());
    }

    if let Some(caps) = END_RE.captures(line) {
        return MarkerTag::End(caps[1].to_string());
    }

    MarkerTag::Plain
}

/// Does this line carry the extraction enablement marker?
pub fn is_enable_marker(line: &str) -> bool {
    ENABLE_RE.is_match(line)
}

/// Suffix override declared on this line, if any.
pub fn suffix_override(line: &str) -> Option<String> {
    SUFFIX_RE
        .captures(line)
        .map(|caps| caps[1].to_string())
}

/// Rewrite the embedded name of a Start/End tag line, appending `suffix`.
/// Lines that are not tag lines pass through unchanged.
pub fn append_tag_suffix(line: &str, suffix: &str) -> String {
    if let Some(caps) = START_RE.captures(line) {
        return START_RE
            .replace(line, format!("[START {}{}]", &caps[1], suffix))
            .into_owned();
    }

    if let Some(caps) = END_RE.captures(line) {
        return END_RE
            .replace(line, format!("[END {}{}]", &caps[1], suffix))
            .into_owned();
    }

    line.to_string()
}
