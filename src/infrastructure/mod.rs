//! Infrastructure layer - External I/O and persistence

pub mod config;
pub mod csv;
pub mod repository;

pub use config::ExtractorConfig;
pub use repository::CorpusRepository;
