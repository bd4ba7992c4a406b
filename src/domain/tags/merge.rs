//! Logical tags and the continuation merge
//!
//! Walks a document's regions, lines, and tag fragments in source order and
//! produces the sequence of logical tags, pairing adjacent `continued`
//! fragments of the same name into one tag.

use crate::domain::page::{PageDocument, PageElement};
use crate::domain::tags::fragment::TagFragment;
use crate::error::Result;

const CONTINUED_PARAMETER: &str = "continued";

/// Line-level provenance attached to a tag when it is finalized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineContext {
    pub region_id: String,
    pub line_id: String,
    pub text: Option<String>,
    pub coords_points: Option<String>,
    pub baseline_points: Option<String>,
}

/// A finalized textual tag: an immutable fragment core plus the substring it
/// annotates and the provenance of its source line.
///
/// `continued_tagged_string` is the one field written after construction,
/// exactly once, when the next fragment turns out to be the second half of a
/// continuation pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    fragment: TagFragment,
    tagged_string: String,
    continued_tagged_string: Option<String>,
    context: LineContext,
}

impl Tag {
    /// Finalize a fragment against the line it was found on.
    pub fn locate(fragment: TagFragment, context: &LineContext) -> Result<Self> {
        let text = context.text.as_deref().unwrap_or_default();
        let tagged_string = fragment.tagged_string(text)?;

        Ok(Tag {
            fragment,
            tagged_string,
            continued_tagged_string: None,
            context: context.clone(),
        })
    }

    pub fn name(&self) -> &str {
        self.fragment.name()
    }

    /// Parameters of the underlying fragment, in source order.
    pub fn parameters(&self) -> &[(String, String)] {
        self.fragment.parameters()
    }

    pub fn parameter(&self, key: &str) -> Option<&str> {
        self.fragment.parameter(key)
    }

    pub fn tagged_string(&self) -> &str {
        &self.tagged_string
    }

    pub fn continued_tagged_string(&self) -> Option<&str> {
        self.continued_tagged_string.as_deref()
    }

    pub fn text_region_id(&self) -> &str {
        &self.context.region_id
    }

    pub fn text_line_id(&self) -> &str {
        &self.context.line_id
    }

    pub fn text_line_text(&self) -> Option<&str> {
        self.context.text.as_deref()
    }

    pub fn text_line_coords_points(&self) -> Option<&str> {
        self.context.coords_points.as_deref()
    }

    pub fn text_line_baseline_points(&self) -> Option<&str> {
        self.context.baseline_points.as_deref()
    }

    /// Whether `fragment` is the second half of a continuation pair started
    /// by this tag. Continued tags come in pairs: once a continuation has
    /// been absorbed, a further `continued` fragment of the same name starts
    /// a fresh pair instead.
    fn accepts_continuation(&self, fragment: &TagFragment) -> bool {
        self.continued_tagged_string.is_none()
            && self.fragment.has_parameter(CONTINUED_PARAMETER)
            && fragment.has_parameter(CONTINUED_PARAMETER)
            && fragment.name() == self.name()
    }

    fn absorb_continuation(&mut self, second_half: String) {
        self.continued_tagged_string = Some(format!("{} {}", self.tagged_string, second_half));
    }
}

/// Extract all logical tags from a document, merging continuation pairs.
///
/// Pairing is single-lookback and greedy: only the immediately preceding
/// appended tag is considered, and only when both halves carry the
/// `continued` parameter under the same name.
pub fn collect_tags(document: &PageDocument) -> Result<Vec<Tag>> {
    let mut tags: Vec<Tag> = Vec::new();

    for region in document.text_regions() {
        let region_id = region.id()?.to_string();

        for line in region.text_lines() {
            let context = LineContext {
                region_id: region_id.clone(),
                line_id: line.id()?.to_string(),
                text: line.text().map(str::to_string),
                coords_points: line.coords_points().map(str::to_string),
                baseline_points: line.baseline_points().map(str::to_string),
            };
            let line_text = context.text.as_deref().unwrap_or_default();

            for fragment in line.tags()? {
                if let Some(previous) = tags.last_mut() {
                    if previous.accepts_continuation(&fragment) {
                        previous.absorb_continuation(fragment.tagged_string(line_text)?);
                        continue;
                    }
                }

                tags.push(Tag::locate(fragment, &context)?);
            }
        }
    }

    Ok(tags)
}
