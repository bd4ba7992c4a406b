//! Tag to CSV row serialization

use crate::domain::tags::merge::Tag;
use crate::domain::tags::schema::FIXED_COLUMNS;

/// Serialize one tag against a header derived by `TagSchema::header`.
///
/// The first eight fields are the fixed columns; every trailing field is the
/// tag's own value for that parameter key, or empty when the tag does not
/// carry it. The row length always equals the header length.
pub fn to_row(tag: &Tag, header: &[String]) -> Vec<String> {
    let mut row = vec![
        tag.name().to_string(),
        tag.tagged_string().to_string(),
        tag.continued_tagged_string().unwrap_or_default().to_string(),
        tag.text_region_id().to_string(),
        tag.text_line_text().unwrap_or_default().to_string(),
        tag.text_line_id().to_string(),
        tag.text_line_coords_points().unwrap_or_default().to_string(),
        tag.text_line_baseline_points()
            .unwrap_or_default()
            .to_string(),
    ];

    for key in header.iter().skip(FIXED_COLUMNS.len()) {
        row.push(tag.parameter(key).unwrap_or_default().to_string());
    }

    row
}
