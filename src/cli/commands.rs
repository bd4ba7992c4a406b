//! CLI command definitions

use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "pagetag")]
#[command(about = "Extract Transkribus textual tags from PAGE-XML", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Extract tags from one PAGE-XML file and print them
    Extract {
        /// PAGE-XML file to read
        file: PathBuf,

        /// Only include these tag names (comma-separated, default: all)
        #[arg(short, long, value_delimiter = ',')]
        tags: Option<Vec<String>>,

        /// Configuration file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the PAGE namespace URI
        #[arg(long)]
        namespace: Option<String>,
    },

    /// Extract tags from every PAGE-XML file in a directory into one CSV
    Export {
        /// Directory containing PAGE-XML files
        dir: PathBuf,

        /// Output CSV file path
        #[arg(short, long)]
        output: PathBuf,

        /// Only include these tag names (comma-separated, default: all)
        #[arg(short, long, value_delimiter = ',')]
        tags: Option<Vec<String>>,

        /// Recurse into subdirectories
        #[arg(short, long)]
        recursive: bool,

        /// Configuration file (TOML)
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the PAGE namespace URI
        #[arg(long)]
        namespace: Option<String>,
    },
}
