//! Custom-attribute decoding and tag-fragment parsing
//!
//! A Transkribus `custom` attribute is a sequence of `name {key:value;...}`
//! fragments terminated by the literal delimiter `;}`. The first fragment is
//! line metadata (`readingOrder {index:N;}`); every following fragment is a
//! textual tag.

use crate::error::{PagetagError, Result};

/// Fragment terminator inside a `custom` attribute.
pub const FRAGMENT_DELIMITER: &str = ";}";

/// Split a raw `custom` attribute into reconstituted `name {params}` units.
///
/// Splitting on `;}` yields the line-metadata head, one piece per tag, and an
/// empty trailing piece from the final delimiter. The head and the trailing
/// piece are dropped; each interior piece gets its closing brace back.
///
/// A string with no delimiter at all, or one that does not end in `;}`,
/// violates the wire format and is rejected rather than silently misaligned.
pub fn decode_custom(custom: &str) -> Result<Vec<String>> {
    let pieces: Vec<&str> = custom.split(FRAGMENT_DELIMITER).collect();

    if pieces.len() < 2 {
        return Err(PagetagError::MalformedCustom(format!(
            "no '{}' delimiter in '{}'",
            FRAGMENT_DELIMITER, custom
        )));
    }

    let trailing = pieces[pieces.len() - 1];
    if !trailing.trim().is_empty() {
        return Err(PagetagError::MalformedCustom(format!(
            "does not end with '{}': trailing content '{}'",
            FRAGMENT_DELIMITER,
            trailing.trim()
        )));
    }

    Ok(pieces[1..pieces.len() - 1]
        .iter()
        .map(|piece| format!("{}}}", piece.trim()))
        .collect())
}

/// One parsed `name {key:value;...}` unit from a `custom` attribute.
///
/// The parameter mapping preserves source order; first-occurrence order of
/// keys drives CSV header derivation later. Values stay strings; `offset`
/// and `length` are parsed to integers at their use sites.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagFragment {
    name: String,
    parameters: Vec<(String, String)>,
}

impl TagFragment {
    /// Parse one fragment of the form `name {k1:v1;k2:v2}`.
    pub fn parse(raw: &str) -> Result<Self> {
        let raw = raw.trim();

        let (name, rest) = raw.split_once(' ').ok_or_else(|| {
            PagetagError::MalformedFragment {
                fragment: raw.to_string(),
                reason: "no space between tag name and parameter block".to_string(),
            }
        })?;

        if name.is_empty() {
            return Err(PagetagError::MalformedFragment {
                fragment: raw.to_string(),
                reason: "empty tag name".to_string(),
            });
        }

        let body = rest
            .trim()
            .strip_prefix('{')
            .and_then(|inner| inner.strip_suffix('}'))
            .ok_or_else(|| PagetagError::MalformedFragment {
                fragment: raw.to_string(),
                reason: "parameter block is not brace-delimited".to_string(),
            })?;

        let mut parameters = Vec::new();
        for item in body.split(';') {
            let (key, value) =
                item.split_once(':')
                    .ok_or_else(|| PagetagError::MalformedFragment {
                        fragment: raw.to_string(),
                        reason: format!("parameter item '{}' has no ':' separator", item.trim()),
                    })?;
            parameters.push((key.trim().to_string(), value.trim().to_string()));
        }

        Ok(TagFragment {
            name: name.to_string(),
            parameters,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Parameters in source order.
    pub fn parameters(&self) -> &[(String, String)] {
        &self.parameters
    }

    /// Look up a parameter value by key.
    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.parameters
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn has_parameter(&self, key: &str) -> bool {
        self.parameter(key).is_some()
    }

    /// The substring of `text` this fragment annotates.
    ///
    /// Slicing is character-based and clamps at the end of the text: an
    /// `offset`/`length` pair reaching past the end yields whatever is
    /// available, never an error.
    pub fn tagged_string(&self, text: &str) -> Result<String> {
        let offset = self.int_parameter("offset")?;
        let length = self.int_parameter("length")?;

        Ok(text.chars().skip(offset).take(length).collect())
    }

    fn int_parameter(&self, key: &str) -> Result<usize> {
        let value = self
            .parameter(key)
            .ok_or_else(|| PagetagError::MalformedFragment {
                fragment: self.name.clone(),
                reason: format!("missing '{}' parameter", key),
            })?;

        value
            .parse()
            .map_err(|_| PagetagError::MalformedFragment {
                fragment: self.name.clone(),
                reason: format!("parameter '{}' is not a non-negative integer: '{}'", key, value),
            })
    }
}
