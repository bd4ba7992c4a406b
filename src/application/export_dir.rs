//! Directory aggregation and CSV export use case
//!
//! Orchestrates the full workflow: list the corpus, extract and merge per
//! document, concatenate in listing order, derive the unified header, write
//! the CSV.

use crate::application::extract_file::extract_tags;
use crate::domain::tags::{to_row, Tag, TagSchema};
use crate::error::Result;
use crate::infrastructure::{csv, CorpusRepository, ExtractorConfig};
use std::path::PathBuf;

/// Options for directory export
#[derive(Debug, Clone)]
pub struct ExportOptions {
    /// Directory containing PAGE-XML files
    pub dir: PathBuf,

    /// Output CSV file path
    pub output: PathBuf,

    /// Restrict output to these tag names (None = all)
    pub tag_names: Option<Vec<String>>,

    /// Recurse into subdirectories
    pub recursive: bool,
}

/// What an export run produced, for reporting
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub documents: usize,
    pub tags: usize,
    pub output: PathBuf,
}

/// Service exporting a whole corpus directory into one CSV
pub struct ExportDirService {
    config: ExtractorConfig,
}

impl ExportDirService {
    pub fn new(config: ExtractorConfig) -> Self {
        ExportDirService { config }
    }

    /// Execute the export.
    ///
    /// Any document that fails to parse aborts the whole run: silently
    /// skipping a file would corrupt the logical tag sequence the header
    /// and the continuation pairing are derived from.
    pub fn execute(&self, options: ExportOptions) -> Result<ExportSummary> {
        let repository = CorpusRepository::open(options.dir)?;
        let documents = repository.list_documents(&self.config.extension, options.recursive)?;

        let mut tags: Vec<Tag> = Vec::new();
        for path in &documents {
            let xml = repository.read_document(path)?;
            let document_tags =
                extract_tags(&xml, &self.config.namespace).map_err(|e| e.in_document(path))?;
            tags.extend(document_tags);
        }

        if let Some(names) = &options.tag_names {
            tags.retain(|tag| names.iter().any(|name| name == tag.name()));
        }

        let header = TagSchema::from_tags(&tags).header();
        let rows: Vec<Vec<String>> = tags.iter().map(|tag| to_row(tag, &header)).collect();
        csv::write_csv(&options.output, &header, &rows)?;

        Ok(ExportSummary {
            documents: documents.len(),
            tags: tags.len(),
            output: options.output,
        })
    }
}
