//! CLI implementation using clap.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Cinematch - content-based movie recommendations from a metadata catalog.
#[derive(Parser)]
#[command(name = "cinematch")]
#[command(author, version, long_about = None)]
pub struct Cli {
    /// Path to the catalog CSV (plain or .gz)
    #[arg(short, long, env = "CINEMATCH_DATA")]
    pub data: PathBuf,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Configuration file path
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Recommend titles similar to a query
    #[command(alias = "rec")]
    Recommend(RecommendArgs),

    /// Show which catalog title a query resolves to
    #[command(alias = "match")]
    Resolve(ResolveArgs),

    /// Validate the catalog schema and report its shape
    Check(CheckArgs),
}

#[derive(Args)]
pub struct RecommendArgs {
    /// Movie title to recommend against (typos tolerated)
    pub query: String,

    /// Maximum number of recommendations
    #[arg(short = 'n', long)]
    pub top_n: Option<usize>,

    /// Minimum fuzzy-match similarity (0.0-1.0)
    #[arg(long)]
    pub threshold: Option<f64>,
}

#[derive(Args)]
pub struct ResolveArgs {
    /// Movie title to resolve
    pub query: String,

    /// Minimum fuzzy-match similarity (0.0-1.0)
    #[arg(long)]
    pub threshold: Option<f64>,
}

#[derive(Args)]
pub struct CheckArgs {}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Markdown,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
