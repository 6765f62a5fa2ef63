//! Tag parsing from spec file sections

use super::patterns::match_line;
use super::{Tag, Tags};
use log::{debug, trace};

pub struct TagParser;

impl TagParser {
    /// Split raw section lines into tags and the context lines around them.
    ///
    /// Each line is matched against the tag patterns in registry order and the
    /// first match wins. Lines that are not tags are collected and attached to
    /// the next tag as its preceding lines; whatever is left after the last
    /// tag becomes the remainder.
    ///
    /// The expanded value of a tag is taken from the first line of
    /// `expanded_lines` matching the same pattern, wherever it is. The lookup
    /// does not consume lines, so repeated numbered tags written with the same
    /// name (two `Source:` lines, say) all resolve to the first expanded one.
    /// Without `expanded_lines` every tag is invalid.
    pub fn parse(raw_lines: &[String], expanded_lines: Option<&[String]>) -> Tags {
        let expanded_lines = expanded_lines.unwrap_or_default();
        let mut data = Vec::new();
        let mut buffer: Vec<String> = Vec::new();

        for line in raw_lines {
            let Some((pattern, found)) = match_line(line) else {
                trace!("Context line: {:?}", line);
                buffer.push(line.clone());
                continue;
            };

            let expanded_value = expanded_lines
                .iter()
                .find_map(|expanded| pattern.captures(expanded))
                .map(|m| m.value.to_string());

            debug!(
                "Found tag {} (expanded: {})",
                found.name,
                expanded_value.is_some()
            );

            data.push(Tag::recognized(
                found,
                expanded_value,
                std::mem::take(&mut buffer),
            ));
        }

        debug!(
            "Parsed {} tag(s), {} trailing line(s)",
            data.len(),
            buffer.len()
        );

        Tags::new(data, buffer)
    }
}
