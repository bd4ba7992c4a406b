//! Single-file extraction use case

use crate::domain::tags::{collect_tags, Tag};
use crate::domain::PageDocument;
use crate::error::{PagetagError, Result};
use crate::infrastructure::ExtractorConfig;
use std::fs;
use std::path::PathBuf;

/// Options for single-file extraction
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// PAGE-XML file to read
    pub file: PathBuf,

    /// Restrict output to these tag names (None = all)
    pub tag_names: Option<Vec<String>>,
}

/// Service extracting the logical tags of one document
pub struct ExtractFileService {
    config: ExtractorConfig,
}

impl ExtractFileService {
    pub fn new(config: ExtractorConfig) -> Self {
        ExtractFileService { config }
    }

    /// Execute the extraction.
    ///
    /// Returns the document's logical tags in traversal order, after
    /// continuation merging. The optional name filter is applied after the
    /// merge so that filtering can never split a continuation pair.
    pub fn execute(&self, options: &ExtractOptions) -> Result<Vec<Tag>> {
        if !options.file.exists() {
            return Err(PagetagError::InputNotFound(options.file.clone()));
        }

        let xml = fs::read_to_string(&options.file)?;
        let mut tags = extract_tags(&xml, &self.config.namespace)
            .map_err(|e| e.in_document(&options.file))?;

        if let Some(names) = &options.tag_names {
            tags.retain(|tag| names.iter().any(|name| name == tag.name()));
        }

        Ok(tags)
    }
}

/// Parse one serialized document and run the continuation merge.
pub fn extract_tags(xml: &str, namespace: &str) -> Result<Vec<Tag>> {
    let document = PageDocument::parse(xml, namespace)?;
    collect_tags(&document)
}
