//! Ordered collection of the tags in one section

use super::{Tag, TagParser};
use crate::domain::Section;
use crate::error::{Result, SpecTagsError};
use log::debug;
use serde::{Deserialize, Serialize};
use std::ops::Index;

/// All tags of a section, in order, plus the lines after the last tag.
///
/// Tags are looked up by name case-insensitively. Numbered tags keep their
/// index as part of the name, so `Source0` and `Source1` are distinct.
///
/// # Examples
///
/// ```
/// use spectags::Tags;
///
/// let raw: Vec<String> = ["%global v 1", "Name: test", "Version: %{v}.0", ""]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
/// let expanded: Vec<String> = ["", "Name: test", "Version: 1.0", ""]
///     .iter()
///     .map(|s| s.to_string())
///     .collect();
///
/// let mut tags = Tags::parse(&raw, Some(expanded.as_slice()));
/// assert_eq!(tags.get("version").unwrap().expanded_value(), Some("1.0"));
/// assert_eq!(tags.reassemble(), raw);
///
/// tags.set_value("VERSION", "2.0").unwrap();
/// assert_eq!(tags.reassemble()[2], "Version: 2.0");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tags {
    #[serde(default)]
    tags: Vec<Tag>,
    #[serde(default)]
    remainder: Vec<String>,
}

impl Tags {
    pub fn new(tags: Vec<Tag>, remainder: Vec<String>) -> Self {
        Self { tags, remainder }
    }

    /// Parse raw section lines, resolving expanded values against `expanded_lines`.
    ///
    /// See [`TagParser::parse`].
    pub fn parse(raw_lines: &[String], expanded_lines: Option<&[String]>) -> Self {
        TagParser::parse(raw_lines, expanded_lines)
    }

    /// Parse a raw section and, optionally, the same section after expansion
    pub fn parse_section(raw: &Section, expanded: Option<&Section>) -> Self {
        TagParser::parse(raw.lines(), expanded.map(Section::lines))
    }

    /// Index of the first tag with the given name (case-insensitive)
    pub fn find(&self, name: &str) -> Result<usize> {
        let wanted = name.to_lowercase();
        self.tags
            .iter()
            .position(|tag| tag.name().to_lowercase() == wanted)
            .ok_or_else(|| SpecTagsError::TagNotFound(name.to_string()))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.find(name).is_ok()
    }

    /// Get the first tag with the given name
    pub fn get(&self, name: &str) -> Result<&Tag> {
        let index = self.find(name)?;
        Ok(&self.tags[index])
    }

    pub fn get_mut(&mut self, name: &str) -> Result<&mut Tag> {
        let index = self.find(name)?;
        Ok(&mut self.tags[index])
    }

    /// Change the literal value of an existing tag.
    ///
    /// Never creates a tag; fails with [`SpecTagsError::TagNotFound`] instead.
    pub fn set_value(&mut self, name: &str, value: impl Into<String>) -> Result<()> {
        let tag = self.get_mut(name)?;
        tag.set_value(value);
        debug!("Set value of tag {}", tag.name());
        Ok(())
    }

    /// Remove the first tag with the given name and return it.
    ///
    /// The lines preceding the tag, including its comments, go with it.
    pub fn remove(&mut self, name: &str) -> Result<Tag> {
        let index = self.find(name)?;
        let tag = self.tags.remove(index);
        debug!(
            "Removed tag {} with {} preceding line(s)",
            tag.name(),
            tag.preceding_lines().len()
        );
        Ok(tag)
    }

    /// Append a tag after the last one (before the remainder)
    pub fn push(&mut self, tag: Tag) {
        self.tags.push(tag);
    }

    /// Insert a tag at `index`
    ///
    /// # Panics
    ///
    /// Panics if `index > len`.
    pub fn insert(&mut self, index: usize, tag: Tag) {
        self.tags.insert(index, tag);
    }

    pub fn len(&self) -> usize {
        self.tags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Tag> {
        self.tags.iter()
    }

    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, Tag> {
        self.tags.iter_mut()
    }

    /// Lines following the last tag
    pub fn remainder(&self) -> &[String] {
        &self.remainder
    }

    /// Reconstruct the section lines from the tags.
    ///
    /// Without modifications this returns exactly the lines that were parsed.
    pub fn reassemble(&self) -> Vec<String> {
        let mut result = Vec::new();
        for tag in &self.tags {
            result.extend(tag.preceding_lines().iter().cloned());
            result.push(tag.line());
        }
        result.extend(self.remainder.iter().cloned());
        result
    }
}

impl Index<usize> for Tags {
    type Output = Tag;

    fn index(&self, index: usize) -> &Tag {
        &self.tags[index]
    }
}

impl<'a> IntoIterator for &'a Tags {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.iter()
    }
}

impl IntoIterator for Tags {
    type Item = Tag;
    type IntoIter = std::vec::IntoIter<Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.tags.into_iter()
    }
}
