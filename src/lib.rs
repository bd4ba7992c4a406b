//! pagetag - Transkribus textual tag extraction
//!
//! A command-line tool that extracts the textual tags embedded in the
//! `custom` attribute of PAGE-XML text lines (the Transkribus annotation
//! convention) and flattens them into a single CSV export.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::PagetagError;
