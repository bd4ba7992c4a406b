//! PAGE-XML document views
//!
//! Thin borrowed views over a parsed XML tree. The PAGE namespace URI is
//! explicit configuration passed into the loader, so corpora exported under
//! a different schema revision can still be read.

use crate::domain::tags::{decode_custom, TagFragment, FRAGMENT_DELIMITER};
use crate::error::{PagetagError, Result};
use regex::Regex;
use roxmltree::Node;
use std::sync::OnceLock;

/// Regex for the numeric reading-order token in the custom-attribute head
fn reading_order_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"\d+").unwrap())
}

fn require_attribute<'a>(node: Node<'a, '_>, element: &str, attribute: &str) -> Result<&'a str> {
    node.attribute(attribute)
        .ok_or_else(|| PagetagError::MissingAttribute {
            element: element.to_string(),
            attribute: attribute.to_string(),
        })
}

/// Capability shared by the element kinds that carry an `id` attribute.
///
/// `TextRegion` and `TextLine` each add their own traversal over their
/// specific child-element kind on top of this.
pub trait PageElement {
    /// Element name used in error messages.
    fn element_name(&self) -> &'static str;

    /// The `id` attribute, unique within a document.
    fn id(&self) -> Result<&str>;
}

/// One parsed PAGE-XML source file.
pub struct PageDocument<'input> {
    tree: roxmltree::Document<'input>,
    namespace: &'input str,
}

impl<'input> PageDocument<'input> {
    /// Parse a PAGE-XML document from its serialized form.
    pub fn parse(xml: &'input str, namespace: &'input str) -> Result<Self> {
        Ok(PageDocument {
            tree: roxmltree::Document::parse(xml)?,
            namespace,
        })
    }

    /// All `TextRegion` elements in document order.
    pub fn text_regions(&self) -> Vec<TextRegion<'_, 'input>> {
        self.tree
            .root()
            .descendants()
            .filter(|node| node.has_tag_name((self.namespace, "TextRegion")))
            .map(|node| TextRegion {
                node,
                namespace: self.namespace,
            })
            .collect()
    }
}

/// A `TextRegion` element grouping text lines.
pub struct TextRegion<'a, 'input> {
    node: Node<'a, 'input>,
    namespace: &'a str,
}

impl<'a, 'input> TextRegion<'a, 'input> {
    /// All `TextLine` elements of this region in document order.
    pub fn text_lines(&self) -> Vec<TextLine<'a, 'input>> {
        self.node
            .descendants()
            .filter(|node| node.has_tag_name((self.namespace, "TextLine")))
            .map(|node| TextLine {
                node,
                namespace: self.namespace,
            })
            .collect()
    }
}

impl PageElement for TextRegion<'_, '_> {
    fn element_name(&self) -> &'static str {
        "TextRegion"
    }

    fn id(&self) -> Result<&str> {
        require_attribute(self.node, self.element_name(), "id")
    }
}

/// A `TextLine` element: transcription text, geometry, and the encoded
/// `custom` attribute carrying the textual tags.
pub struct TextLine<'a, 'input> {
    node: Node<'a, 'input>,
    namespace: &'a str,
}

impl<'a, 'input> TextLine<'a, 'input> {
    /// The raw `custom` attribute.
    pub fn custom(&self) -> Result<&'a str> {
        require_attribute(self.node, self.element_name(), "custom")
    }

    /// The `points` attribute of the `Coords` subelement.
    pub fn coords_points(&self) -> Option<&'a str> {
        self.first_descendant("Coords")
            .and_then(|node| node.attribute("points"))
    }

    /// The `points` attribute of the `Baseline` subelement.
    pub fn baseline_points(&self) -> Option<&'a str> {
        self.first_descendant("Baseline")
            .and_then(|node| node.attribute("points"))
    }

    /// The transcription text from the `Unicode` subelement of `TextEquiv`.
    pub fn text(&self) -> Option<&'a str> {
        self.first_descendant("Unicode").and_then(|node| node.text())
    }

    /// Reading order, recovered from the numeric token of the
    /// custom-attribute head fragment.
    pub fn reading_order(&self) -> Result<u32> {
        let custom = self.custom()?;
        let head = custom.split(FRAGMENT_DELIMITER).next().unwrap_or(custom);

        let digits = reading_order_regex().find(head).ok_or_else(|| {
            PagetagError::MalformedCustom(format!("no reading-order digits in '{}'", head))
        })?;

        digits.as_str().parse().map_err(|_| {
            PagetagError::MalformedCustom(format!("reading order out of range in '{}'", head))
        })
    }

    /// Decode the `custom` attribute into parsed tag fragments, in source
    /// order.
    pub fn tags(&self) -> Result<Vec<TagFragment>> {
        decode_custom(self.custom()?)?
            .iter()
            .map(|raw| TagFragment::parse(raw))
            .collect()
    }

    fn first_descendant(&self, name: &str) -> Option<Node<'a, 'input>> {
        self.node
            .descendants()
            .find(|node| node.has_tag_name((self.namespace, name)))
    }
}

impl PageElement for TextLine<'_, '_> {
    fn element_name(&self) -> &'static str {
        "TextLine"
    }

    fn id(&self) -> Result<&str> {
        require_attribute(self.node, self.element_name(), "id")
    }
}
