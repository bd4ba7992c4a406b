//! File system access to a PAGE-XML corpus

use crate::error::{PagetagError, Result};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Lists and reads the source documents of one corpus directory.
#[derive(Debug, Clone)]
pub struct CorpusRepository {
    root: PathBuf,
}

impl CorpusRepository {
    /// Open a corpus directory. The directory must exist.
    pub fn open(root: PathBuf) -> Result<Self> {
        if !root.exists() {
            return Err(PagetagError::InputNotFound(root));
        }
        if !root.is_dir() {
            return Err(PagetagError::NotADirectory(root));
        }

        Ok(CorpusRepository { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// List source documents with the given file-name suffix, sorted by
    /// path so that runs over the same corpus are deterministic.
    pub fn list_documents(&self, extension: &str, recursive: bool) -> Result<Vec<PathBuf>> {
        let mut documents = if recursive {
            self.collect_recursive(extension)
        } else {
            self.collect_flat(extension)?
        };

        documents.sort();
        Ok(documents)
    }

    /// Read one source document to a string.
    pub fn read_document(&self, path: &Path) -> Result<String> {
        fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                PagetagError::InputNotFound(path.to_path_buf())
            } else {
                PagetagError::Io(e)
            }
        })
    }

    fn collect_flat(&self, extension: &str) -> Result<Vec<PathBuf>> {
        let mut documents = Vec::new();

        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() && Self::matches_extension(&path, extension) {
                documents.push(path);
            }
        }

        Ok(documents)
    }

    fn collect_recursive(&self, extension: &str) -> Vec<PathBuf> {
        let walker = WalkDir::new(&self.root).into_iter().filter_entry(|entry| {
            if entry.depth() == 0 {
                return true;
            }
            if !entry.file_type().is_dir() {
                return true;
            }
            entry
                .file_name()
                .to_str()
                .is_none_or(|name| !name.starts_with('.'))
        });

        let mut documents = Vec::new();
        for entry in walker {
            let Ok(entry) = entry else {
                continue;
            };
            if entry.file_type().is_file() && Self::matches_extension(entry.path(), extension) {
                documents.push(entry.path().to_path_buf());
            }
        }

        documents
    }

    fn matches_extension(path: &Path, extension: &str) -> bool {
        path.file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(extension))
    }
}
