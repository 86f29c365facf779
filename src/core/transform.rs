//! Ordered, pure rewrites applied to a captured region before emission.
//!
//! The four steps run strictly in sequence; later steps assume earlier
//! normalization. None of them can fail: unmatched patterns, all-blank
//! regions and missing comment preambles all fall through as no-ops.

use std::sync::LazyLock;

use regex::Regex;

use crate::core::marker;

/// Single-line destructured CommonJS require. Multi-line declarations are
/// unsupported and pass through untouched. A trailing semicolon sits outside
/// the match and is carried over verbatim, never invented.
static REQUIRE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"const \{([^}]+)\} = require\(([^)]+)\)").unwrap());

/// Apply the full pipeline in order: require rewrite, tag suffixing,
/// indentation normalization, leading blank-line removal.
pub fn apply(lines: &[String], suffix: &str) -> Vec<String> {
    let rewritten: Vec<String> = lines
        .iter()
        .map(|l| rewrite_require(l))
        .map(|l| marker::append_tag_suffix(&l, suffix))
        .collect();

    let mut body = normalize_indent(&rewritten);
    remove_leading_blank(&mut body);
    body
}

/// `const {a, b} = require('x')` -> `import {a, b} from 'x'`
pub fn rewrite_require(line: &str) -> String {
    REQUIRE_RE
        .replace(line, "import {$1} from $2")
        .into_owned()
}

/// Strip the minimum leading-whitespace count (over non-blank lines) from
/// every non-blank line; blank lines become empty strings. Idempotent once
/// the minimum is zero.
pub fn normalize_indent(lines: &[String]) -> Vec<String> {
    let min_indent = lines
        .iter()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.chars().take_while(|c| c.is_whitespace()).count())
        .min()
        .unwrap_or(0);

    lines
        .iter()
        .map(|l| {
            if l.trim().is_empty() {
                String::new()
            } else {
                l.chars().skip(min_indent).collect()
            }
        })
        .collect()
}

/// Drop the gap a comment preamble commonly leaves behind: if the first
/// non-comment line is blank, remove it. Applied once, not repeatedly.
pub fn remove_leading_blank(lines: &mut Vec<String>) {
    let first_non_comment = lines
        .iter()
        .position(|l| !l.trim_start().starts_with("//"));

    if let Some(idx) = first_non_comment {
        if lines[idx].trim().is_empty() {
            lines.remove(idx);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_require_rewrite_adds_no_semicolon() {
        // A source line without a trailing semicolon must not gain one
        assert_eq!(
            rewrite_require("const {a, b} = require('x')"),
            "import {a, b} from 'x'"
        );
    }

    #[test]
    fn test_require_rewrite_keeps_existing_semicolon() {
        assert_eq!(
            rewrite_require("const {onRequest} = require(\"firebase-functions\");"),
            "import {onRequest} from \"firebase-functions\";"
        );
    }

    #[test]
    fn test_require_rewrite_preserves_indentation() {
        assert_eq!(
            rewrite_require("  const {x} = require('y')"),
            "  import {x} from 'y'"
        );
    }

    #[test]
    fn test_two_requires_on_one_line_rewrite_only_the_first() {
        // Non-greedy groups keep the second expression intact
        assert_eq!(
            rewrite_require("const {a} = require('x'); const {b} = require('y');"),
            "import {a} from 'x'; const {b} = require('y');"
        );
    }

    #[test]
    fn test_import_form_is_unchanged() {
        let line = "import {a, b} from 'x';";
        assert_eq!(rewrite_require(line), line);
    }

    #[test]
    fn test_non_destructured_require_is_unchanged() {
        let line = "const x = require('y');";
        assert_eq!(rewrite_require(line), line);
    }

    #[test]
    fn test_normalize_indent_strips_common_prefix() {
        let out = normalize_indent(&lines(&["    a", "      b", "    c"]));
        assert_eq!(out, lines(&["a", "  b", "c"]));
    }

    #[test]
    fn test_normalize_indent_blanks_become_empty() {
        let out = normalize_indent(&lines(&["  a", "   \t ", "  b"]));
        assert_eq!(out, lines(&["a", "", "b"]));
    }

    #[test]
    fn test_normalize_indent_idempotent_at_zero() {
        let input = lines(&["a", "  b", "c"]);
        assert_eq!(normalize_indent(&input), input);
    }

    #[test]
    fn test_normalize_indent_all_blank_noop() {
        let out = normalize_indent(&lines(&["   ", ""]));
        assert_eq!(out, lines(&["", ""]));
    }

    #[test]
    fn test_leading_blank_removed_after_comment_preamble() {
        let mut body = lines(&["// [START x_doc]", "", "code", "// [END x_doc]"]);
        remove_leading_blank(&mut body);
        assert_eq!(body, lines(&["// [START x_doc]", "code", "// [END x_doc]"]));
    }

    #[test]
    fn test_leading_blank_removed_at_most_once() {
        let mut body = lines(&["// c", "", "", "code"]);
        remove_leading_blank(&mut body);
        assert_eq!(body, lines(&["// c", "", "code"]));
    }

    #[test]
    fn test_no_removal_when_first_non_comment_is_code() {
        let mut body = lines(&["// c", "code", ""]);
        let before = body.clone();
        remove_leading_blank(&mut body);
        assert_eq!(body, before);
    }

    #[test]
    fn test_full_pipeline_order() {
        let input = lines(&[
            "  // [START demo]",
            "",
            "  const {x} = require('y')",
            "  // [END demo]",
        ]);

        let out = apply(&input, "_doc");
        assert_eq!(
            out,
            lines(&[
                "// [START demo_doc]",
                "import {x} from 'y'",
                "// [END demo_doc]",
            ])
        );
    }

    #[test]
    fn test_pipeline_keeps_relative_indentation() {
        let input = lines(&["  // [START f]", "  if (x) {", "    y();", "  }", "  // [END f]"]);

        let out = apply(&input, "_modular");
        assert_eq!(
            out,
            lines(&["// [START f_modular]", "if (x) {", "  y();", "}", "// [END f_modular]"])
        );
    }
}
