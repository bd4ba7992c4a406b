//! Error types for pagetag

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for the pagetag application
#[derive(Debug, Error)]
pub enum PagetagError {
    #[error("Input not found: {0}")]
    InputNotFound(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Malformed custom attribute: {0}")]
    MalformedCustom(String),

    #[error("Malformed tag fragment '{fragment}': {reason}")]
    MalformedFragment { fragment: String, reason: String },

    #[error("Missing '{attribute}' attribute on <{element}>")]
    MissingAttribute { element: String, attribute: String },

    /// A lower-level error annotated with the source file it occurred in.
    #[error("{}: {source}", .path.display())]
    Document {
        path: PathBuf,
        #[source]
        source: Box<PagetagError>,
    },

    #[error("XML parsing failed: {0}")]
    Xml(#[from] roxmltree::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),
}

impl PagetagError {
    /// Annotate an error with the document it came from
    pub fn in_document(self, path: &std::path::Path) -> Self {
        PagetagError::Document {
            path: path.to_path_buf(),
            source: Box::new(self),
        }
    }

    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            PagetagError::InputNotFound(_) | PagetagError::NotADirectory(_) => 2,
            PagetagError::MalformedCustom(_)
            | PagetagError::MalformedFragment { .. }
            | PagetagError::Xml(_) => 3,
            PagetagError::MissingAttribute { .. } => 4,
            PagetagError::Document { source, .. } => source.exit_code(),
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            PagetagError::InputNotFound(path) => {
                format!(
                    "Input not found: {}\n\n\
                    Suggestions:\n\
                    • Check the path for typos\n\
                    • Directory mode expects a folder of PAGE-XML files (*.xml)\n\
                    • Single-file mode expects one PAGE-XML file",
                    path.display()
                )
            }
            PagetagError::MalformedCustom(reason) => {
                format!(
                    "Malformed custom attribute: {}\n\n\
                    A Transkribus custom attribute looks like:\n\
                    readingOrder {{index:0;}} person {{offset:0; length:4;}}\n\
                    Every fragment must be terminated by ';}}'.",
                    reason
                )
            }
            PagetagError::Document { path, source } => {
                format!("{}: {}", path.display(), source.display_with_suggestions())
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using PagetagError
pub type Result<T> = std::result::Result<T, PagetagError>;
