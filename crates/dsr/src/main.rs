//! DSR - Entry Point
//!
//! Binary entry point for the document structure reconciler. Compares two
//! plain-text document versions and prints per-section results plus a
//! parent-level summary table.

use clap::Parser;
use dsr::RunOptions;

/// Command line interface for DSR
#[derive(Parser, Debug)]
#[command(name = "dsr")]
#[command(about = "DSR - Document Structure Reconciliation")]
#[command(version)]
pub struct Cli {
    /// Old document version (plain text)
    pub old: std::path::PathBuf,

    /// New document version (plain text)
    pub new: std::path::PathBuf,

    /// Scoring strategy: lexical or semantic
    #[arg(short, long)]
    pub scorer: Option<String>,

    /// Similarity threshold above which sections are considered matched
    #[arg(short, long)]
    pub threshold: Option<f32>,

    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Write the full report as JSON to this path
    #[arg(long)]
    pub json: Option<std::path::PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    dsr::run(RunOptions {
        old_path: cli.old,
        new_path: cli.new,
        scorer: cli.scorer,
        threshold: cli.threshold,
        config_path: cli.config,
        json_out: cli.json,
    })
    .await?;
    Ok(())
}
