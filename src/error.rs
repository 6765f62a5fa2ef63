//! Error types for spectags

use thiserror::Error;

/// Main error type for tag parsing and manipulation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpecTagsError {
    #[error("Invalid tag name: '{0}'")]
    InvalidTagName(String),

    #[error("Tag not found: {0}")]
    TagNotFound(String),
}

impl SpecTagsError {
    /// Whether this error only signals that a looked-up tag is absent
    pub fn is_not_found(&self) -> bool {
        matches!(self, SpecTagsError::TagNotFound(_))
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            SpecTagsError::InvalidTagName(name) => {
                format!(
                    "Invalid tag name: '{}'\n\n\
                    Suggestions:\n\
                    • Use a reserved RPM tag name (e.g., Name, Version, Release, Source, Patch)\n\
                    • Tag names are case-insensitive (e.g., 'buildrequires' is accepted)\n\
                    • A numeric suffix is allowed (e.g., Source0, Patch12)",
                    name
                )
            }
            SpecTagsError::TagNotFound(name) => {
                format!(
                    "Tag not found: {}\n\n\
                    Suggestions:\n\
                    • Check the tag spelling (lookups are case-insensitive)\n\
                    • Numbered tags are distinct (Source0 is not Source1)\n\
                    • The tag may only exist in another section of the spec file",
                    name
                )
            }
        }
    }
}

/// Result type using SpecTagsError
pub type Result<T> = std::result::Result<T, SpecTagsError>;
