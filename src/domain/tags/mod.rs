//! Textual tag pipeline: fragment parsing, continuation merging, header
//! aggregation, row serialization

pub mod fragment;
pub mod merge;
pub mod row;
pub mod schema;

// Re-export main types
pub use fragment::{decode_custom, TagFragment, FRAGMENT_DELIMITER};
pub use merge::{collect_tags, LineContext, Tag};
pub use row::to_row;
pub use schema::{TagSchema, FIXED_COLUMNS};
