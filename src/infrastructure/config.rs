//! Extractor configuration
//!
//! The PAGE namespace and source-file extension are configuration handed to
//! the loader rather than hard-wired constants, so exports from other PAGE
//! schema revisions stay readable.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Namespace of the 2013-07-15 PAGE content schema used by Transkribus.
pub const PAGE_2013_NAMESPACE: &str =
    "http://schema.primaresearch.org/PAGE/gts/pagecontent/2013-07-15";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtractorConfig {
    /// Namespace URI the PAGE elements are qualified with.
    pub namespace: String,

    /// File-name suffix of source documents in directory mode.
    pub extension: String,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        ExtractorConfig {
            namespace: PAGE_2013_NAMESPACE.to_string(),
            extension: ".xml".to_string(),
        }
    }
}

impl ExtractorConfig {
    /// Load config from a TOML file; missing keys fall back to defaults.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_config() {
        let config = ExtractorConfig::default();
        assert_eq!(config.namespace, PAGE_2013_NAMESPACE);
        assert_eq!(config.extension, ".xml");
    }

    #[test]
    fn test_load_full_config() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "namespace = \"http://example.org/page\"\nextension = \".page.xml\""
        )
        .unwrap();

        let config = ExtractorConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.namespace, "http://example.org/page");
        assert_eq!(config.extension, ".page.xml");
    }

    #[test]
    fn test_partial_config_falls_back_to_defaults() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "extension = \".pxml\"").unwrap();

        let config = ExtractorConfig::load_from_path(file.path()).unwrap();
        assert_eq!(config.namespace, PAGE_2013_NAMESPACE);
        assert_eq!(config.extension, ".pxml");
    }

    #[test]
    fn test_invalid_toml_is_error() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "extension = [not toml").unwrap();

        assert!(ExtractorConfig::load_from_path(file.path()).is_err());
    }
}
