//! Application layer - Use cases and orchestration

pub mod export_dir;
pub mod extract_file;

pub use export_dir::{ExportDirService, ExportOptions, ExportSummary};
pub use extract_file::{ExtractFileService, ExtractOptions};
