//! spectags - Lossless parsing of RPM spec file tags
//!
//! Splits the lines of one spec file section into tags (`Name: value` lines of
//! reserved RPM tag names) and the surrounding context, pairs each tag with its
//! value after macro expansion, and reassembles the section byte for byte.
//!
//! Macro expansion itself is not done here: callers pass the already expanded
//! lines of the same section alongside the raw ones.

pub mod domain;
pub mod error;

pub use domain::{Section, Tag, TagParser, Tags};
pub use error::{Result, SpecTagsError};
