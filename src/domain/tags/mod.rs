//! Tag system

pub mod collection;
pub mod names;
pub mod parser;
pub mod patterns;
pub mod tag;

// Re-export main types
pub use collection::Tags;
pub use names::{is_valid_name, NUMBERED_TAG_NAMES, TAG_NAMES};
pub use parser::TagParser;
pub use patterns::{tag_patterns, TagMatch, TagPattern};
pub use tag::Tag;
