//! Domain layer - Spec file sections and their tags

pub mod section;
pub mod tags;

pub use section::Section;
pub use tags::{Tag, TagParser, Tags};
