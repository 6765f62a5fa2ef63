//! A single spec file tag

use super::names::is_valid_name;
use super::patterns::TagMatch;
use crate::error::{Result, SpecTagsError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// One tag line of a spec file section together with the lines preceding it.
///
/// The name keeps its original casing and the separator is stored verbatim, so
/// [`Tag::line`] reproduces the source line exactly until the value is changed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TagRecord")]
pub struct Tag {
    name: String,
    value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    expanded_value: Option<String>,
    separator: String,
    preceding_lines: Vec<String>,
}

/// Unchecked form of [`Tag`] used when deserializing
#[derive(Deserialize)]
struct TagRecord {
    name: String,
    value: String,
    #[serde(default)]
    expanded_value: Option<String>,
    separator: String,
    #[serde(default)]
    preceding_lines: Vec<String>,
}

impl TryFrom<TagRecord> for Tag {
    type Error = SpecTagsError;

    fn try_from(record: TagRecord) -> Result<Self> {
        Tag::new(
            record.name,
            record.value,
            record.expanded_value,
            record.separator,
            record.preceding_lines,
        )
    }
}

impl Tag {
    /// Create a new tag.
    ///
    /// Fails with [`SpecTagsError::InvalidTagName`] unless `name`, capitalized
    /// and stripped of trailing digits, is a reserved tag name.
    ///
    /// # Examples
    ///
    /// ```
    /// use spectags::Tag;
    ///
    /// let tag = Tag::new("Source10", "b.tar.gz", None, ": ", Vec::new()).unwrap();
    /// assert!(!tag.is_valid());
    ///
    /// assert!(Tag::new("Bogus", "x", None, ": ", Vec::new()).is_err());
    /// ```
    pub fn new(
        name: impl Into<String>,
        value: impl Into<String>,
        expanded_value: Option<String>,
        separator: impl Into<String>,
        preceding_lines: Vec<String>,
    ) -> Result<Self> {
        let name = name.into();
        if !is_valid_name(&name) {
            return Err(SpecTagsError::InvalidTagName(name));
        }

        Ok(Self {
            name,
            value: value.into(),
            expanded_value,
            separator: separator.into(),
            preceding_lines,
        })
    }

    /// Build a tag from a matched line; the name is known to be valid
    pub(super) fn recognized(
        found: TagMatch<'_>,
        expanded_value: Option<String>,
        preceding_lines: Vec<String>,
    ) -> Self {
        Self {
            name: found.name.to_string(),
            value: found.value.to_string(),
            expanded_value,
            separator: found.separator.to_string(),
            preceding_lines,
        }
    }

    /// Name of the tag as written in the spec file
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Literal value of the tag as stored in the spec file
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
    }

    /// Value of the tag after expanding macros and evaluating all conditions.
    ///
    /// `None` means the tag did not survive the expansion, e.g. because it sits
    /// in a false `%if` branch.
    pub fn expanded_value(&self) -> Option<&str> {
        self.expanded_value.as_deref()
    }

    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Lines between the previous tag (or the section start) and this tag
    pub fn preceding_lines(&self) -> &[String] {
        &self.preceding_lines
    }

    /// A tag is valid if it survives the expansion of the spec file
    pub fn is_valid(&self) -> bool {
        self.expanded_value.is_some()
    }

    /// Comment lines directly above the tag, without the leading `#`.
    ///
    /// Only the contiguous block of comments ending right before the tag counts;
    /// a blank line or any other content ends it.
    pub fn comments(&self) -> Vec<&str> {
        let mut comments: Vec<&str> = self
            .preceding_lines
            .iter()
            .rev()
            .map_while(|line| line.strip_prefix('#'))
            .map(|text| text.strip_prefix(' ').unwrap_or(text))
            .collect();
        comments.reverse();
        comments
    }

    /// The tag line as it appears in the section
    pub fn line(&self) -> String {
        format!("{}{}{}", self.name, self.separator, self.value)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.name, self.separator, self.value)
    }
}
