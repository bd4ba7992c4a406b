//! Output formatting utilities

use crate::application::ExportSummary;
use crate::domain::Tag;

/// Format extracted tags for display, one block per tag
pub fn format_tag_listing(tags: &[Tag]) -> String {
    if tags.is_empty() {
        return "No tags found".to_string();
    }

    let mut output = String::new();
    for tag in tags {
        let display_string = tag
            .continued_tagged_string()
            .unwrap_or_else(|| tag.tagged_string());

        output.push_str(&format!("{}  \"{}\"\n", tag.name(), display_string));
        output.push_str(&format!(
            "  region: {}  line: {}\n",
            tag.text_region_id(),
            tag.text_line_id()
        ));
        for (key, value) in tag.parameters() {
            output.push_str(&format!("  {}: {}\n", key, value));
        }
    }

    output
}

/// Format an export result for display
pub fn format_export_summary(summary: &ExportSummary) -> String {
    format!(
        "Exported {} tags from {} documents to {}",
        summary.tags,
        summary.documents,
        summary.output.display()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::tags::{LineContext, Tag, TagFragment};
    use std::path::PathBuf;

    fn located_tag(fragment: &str, text: &str) -> Tag {
        let fragment = TagFragment::parse(fragment).unwrap();
        let context = LineContext {
            region_id: "r1".to_string(),
            line_id: "l1".to_string(),
            text: Some(text.to_string()),
            coords_points: None,
            baseline_points: None,
        };
        Tag::locate(fragment, &context).unwrap()
    }

    #[test]
    fn test_format_empty_listing() {
        let output = format_tag_listing(&[]);
        assert_eq!(output, "No tags found");
    }

    #[test]
    fn test_format_tag_listing() {
        let tags = vec![located_tag(
            "person {offset:0; length:4; role:witness}",
            "Anna war hier",
        )];

        let output = format_tag_listing(&tags);
        assert!(output.contains("person  \"Anna\""));
        assert!(output.contains("region: r1  line: l1"));
        assert!(output.contains("role: witness"));
    }

    #[test]
    fn test_format_export_summary() {
        let summary = ExportSummary {
            documents: 3,
            tags: 17,
            output: PathBuf::from("out/export.csv"),
        };

        let output = format_export_summary(&summary);
        assert!(output.contains("17 tags"));
        assert!(output.contains("3 documents"));
        assert!(output.contains("out/export.csv"));
    }
}
