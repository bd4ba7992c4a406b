use clap::Parser;
use pagetag::application::{
    ExportDirService, ExportOptions, ExtractFileService, ExtractOptions,
};
use pagetag::cli::{format_export_summary, format_tag_listing, Cli, Commands};
use pagetag::error::PagetagError;
use pagetag::infrastructure::ExtractorConfig;
use std::path::PathBuf;

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), PagetagError> {
    match cli.command {
        Commands::Extract {
            file,
            tags,
            config,
            namespace,
        } => {
            let config = resolve_config(config, namespace)?;
            let service = ExtractFileService::new(config);

            let extracted = service.execute(&ExtractOptions {
                file,
                tag_names: tags,
            })?;
            println!("{}", format_tag_listing(&extracted).trim_end());
            Ok(())
        }
        Commands::Export {
            dir,
            output,
            tags,
            recursive,
            config,
            namespace,
        } => {
            let config = resolve_config(config, namespace)?;
            let service = ExportDirService::new(config);

            let summary = service.execute(ExportOptions {
                dir,
                output,
                tag_names: tags,
                recursive,
            })?;
            println!("{}", format_export_summary(&summary));
            Ok(())
        }
    }
}

/// Load the config file if one is given, then apply CLI overrides
fn resolve_config(
    path: Option<PathBuf>,
    namespace: Option<String>,
) -> Result<ExtractorConfig, PagetagError> {
    let mut config = match path {
        Some(path) => ExtractorConfig::load_from_path(&path)?,
        None => ExtractorConfig::default(),
    };

    if let Some(namespace) = namespace {
        config.namespace = namespace;
    }

    Ok(config)
}
