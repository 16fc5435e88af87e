//! Cinematch CLI - content-based movie recommendations.

use std::io::stdout;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cinematch::catalog::Catalog;
use cinematch::cli::{Cli, Command, OutputFormat};
use cinematch::config::Config;
use cinematch::output::{CatalogSummary, Format};
use cinematch::recommend::Session;

fn main() -> ExitCode {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> cinematch::Result<()> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::load_default(".")?,
    };

    let format = match cli.format {
        Some(OutputFormat::Json) => Format::Json,
        Some(OutputFormat::Markdown) => Format::Markdown,
        Some(OutputFormat::Text) => Format::Text,
        None => match config.output.format {
            cinematch::config::OutputFormat::Json => Format::Json,
            cinematch::config::OutputFormat::Markdown => Format::Markdown,
            cinematch::config::OutputFormat::Text => Format::Text,
        },
    };

    let catalog = Catalog::from_path(&cli.data)?;

    match cli.command {
        Command::Recommend(args) => {
            if let Some(top_n) = args.top_n {
                config.recommend.top_n = top_n;
            }
            if let Some(threshold) = args.threshold {
                config.resolve.threshold = threshold;
            }
            let session = Session::build(catalog, &config);
            let list = session.recommendations(&args.query)?;
            format.recommendations(&list, &mut stdout())?;
        }
        Command::Resolve(args) => {
            if let Some(threshold) = args.threshold {
                config.resolve.threshold = threshold;
            }
            let resolved = cinematch::engine::resolve(
                &args.query,
                catalog.titles(),
                config.resolve.threshold,
            )?;
            format.resolution(&resolved, &mut stdout())?;
        }
        Command::Check(_args) => {
            let summary = CatalogSummary {
                items: catalog.len(),
                release_year: catalog.columns().release_year,
                overview: catalog.columns().overview,
            };
            format.summary(&summary, &mut stdout())?;
        }
    }

    Ok(())
}
