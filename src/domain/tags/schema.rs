//! CSV header derivation
//!
//! Tags carry arbitrary, schema-less parameter sets. The export needs one
//! fixed column set, so the union of parameter keys is accumulated per tag
//! name and flattened into a stable header.

use crate::domain::tags::merge::Tag;

/// Fixed leading columns of every export, in this exact order.
pub const FIXED_COLUMNS: [&str; 8] = [
    "tag_name",
    "tagged_string",
    "continued_tagged_string",
    "text_region_id",
    "text_line_text",
    "text_line_id",
    "text_line_coords_points",
    "text_line_baseline_points",
];

/// Union of parameter keys per tag name, both in first-occurrence order.
#[derive(Debug, Default)]
pub struct TagSchema {
    entries: Vec<(String, Vec<String>)>,
}

impl TagSchema {
    /// Build the schema by observing every tag in sequence order.
    pub fn from_tags<'a, I>(tags: I) -> Self
    where
        I: IntoIterator<Item = &'a Tag>,
    {
        let mut schema = TagSchema::default();
        for tag in tags {
            schema.observe(tag);
        }
        schema
    }

    fn observe(&mut self, tag: &Tag) {
        let position = match self
            .entries
            .iter()
            .position(|(name, _)| name == tag.name())
        {
            Some(position) => position,
            None => {
                self.entries.push((tag.name().to_string(), Vec::new()));
                self.entries.len() - 1
            }
        };

        let keys = &mut self.entries[position].1;
        for (key, _) in tag.parameters() {
            if !keys.contains(key) {
                keys.push(key.clone());
            }
        }
    }

    /// Parameter keys recorded for one tag name.
    pub fn parameter_keys(&self, name: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(entry_name, _)| entry_name == name)
            .map(|(_, keys)| keys.as_slice())
    }

    /// The derived CSV header: the fixed columns followed by the union of
    /// all parameter keys, concatenated in the order tag names were first
    /// seen and, within a name, the order keys were first seen. A key shared
    /// by several names appears once, at its first position.
    pub fn header(&self) -> Vec<String> {
        let mut header: Vec<String> = FIXED_COLUMNS.iter().map(|c| c.to_string()).collect();

        for (_, keys) in &self.entries {
            for key in keys {
                if !header[FIXED_COLUMNS.len()..].contains(key) {
                    header.push(key.clone());
                }
            }
        }

        header
    }
}
