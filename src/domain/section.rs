//! Spec file sections

use serde::{Deserialize, Serialize};

/// A named section of a spec file (`package`, `package devel`, ...) as lines.
///
/// Splitting a spec file into sections and expanding macros happen elsewhere;
/// this is only the shape in which section content is handed to the parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    name: String,
    #[serde(default)]
    lines: Vec<String>,
}

impl Section {
    pub fn new(name: impl Into<String>, lines: Vec<String>) -> Self {
        Section {
            name: name.into(),
            lines,
        }
    }

    /// Build a section from text, one line per `\n`.
    ///
    /// A final newline does not start another line and `\r` is kept as part of
    /// the line, so [`Section::to_text`] gives back the same text.
    pub fn from_text(name: impl Into<String>, text: &str) -> Self {
        let body = text.strip_suffix('\n').unwrap_or(text);
        let lines = if text.is_empty() {
            Vec::new()
        } else {
            body.split('\n').map(str::to_string).collect()
        };

        Section::new(name, lines)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Join the lines back into text, terminating each with a newline
    pub fn to_text(&self) -> String {
        let mut text = String::new();
        for line in &self.lines {
            text.push_str(line);
            text.push('\n');
        }
        text
    }
}
