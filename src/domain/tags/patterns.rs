//! Line patterns for recognizing tags

use super::names::{is_numbered, TAG_NAMES};
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// Pieces of a line matched by a [`TagPattern`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TagMatch<'a> {
    /// Tag name as written, including a numeric index if any
    pub name: &'a str,
    /// Whitespace and colon between the name and the value
    pub separator: &'a str,
    /// Everything after the separator (never empty)
    pub value: &'a str,
}

/// Case-insensitive matcher for lines of a single canonical tag
#[derive(Debug)]
pub struct TagPattern {
    canonical: &'static str,
    regex: Regex,
}

impl TagPattern {
    /// Build the pattern for a canonical tag name
    fn new(canonical: &'static str) -> Self {
        let index = if is_numbered(canonical) { r"\d?" } else { "" };
        let pattern = format!(
            r"(?i)^(?P<n>{}{})(?P<s>\s*:\s*)(?P<v>.+)",
            regex::escape(canonical),
            index
        );

        Self {
            canonical,
            regex: Regex::new(&pattern).unwrap(),
        }
    }

    /// Canonical name this pattern was built for
    pub fn canonical(&self) -> &'static str {
        self.canonical
    }

    /// Match a line against this pattern
    pub fn captures<'a>(&self, line: &'a str) -> Option<TagMatch<'a>> {
        self.regex.captures(line).map(|caps| to_match(&caps))
    }
}

fn to_match<'a>(caps: &Captures<'a>) -> TagMatch<'a> {
    TagMatch {
        name: group(caps, "n"),
        separator: group(caps, "s"),
        value: group(caps, "v"),
    }
}

fn group<'a>(caps: &Captures<'a>, name: &str) -> &'a str {
    caps.name(name).map_or("", |m| m.as_str())
}

/// All tag patterns, compiled once, in registry order
pub fn tag_patterns() -> &'static [TagPattern] {
    static PATTERNS: OnceLock<Vec<TagPattern>> = OnceLock::new();
    PATTERNS.get_or_init(|| TAG_NAMES.iter().copied().map(TagPattern::new).collect())
}

/// Find the first pattern, in registry order, that matches `line`
pub fn match_line(line: &str) -> Option<(&'static TagPattern, TagMatch<'_>)> {
    tag_patterns()
        .iter()
        .find_map(|pattern| pattern.captures(line).map(|m| (pattern, m)))
}
