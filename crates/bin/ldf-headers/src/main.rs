//! Entry point for the license header tool.
//!
//! Walks each given directory and prepends the Apache-2.0 header comment
//! to covered source files that lack one. Per-file failures never stop a
//! walk; a missing root is reported and the remaining roots still run.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use ldf_hygiene::apply::{self, WalkSummary};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "ldf-headers",
    version,
    about = "Adds Apache-2.0 license headers to source files."
)]
struct CliArgs {
    /// Directories to process recursively.
    #[arg(required = true, value_name = "DIR")]
    directories: Vec<PathBuf>,

    /// Report intended changes without modifying any file.
    #[arg(long)]
    dry_run: bool,
}

fn main() -> ExitCode {
    init_tracing();
    let args = CliArgs::parse();

    let mut totals = WalkSummary::default();
    for root in &args.directories {
        if root.exists() {
            info!("processing directory: {}", root.display());
            totals += apply::process_root(root, args.dry_run);
        } else {
            warn!("directory not found: {}", root.display());
        }
    }

    info!(
        "done: {} added, {} would add, {} skipped, {} errors",
        totals.added, totals.would_add, totals.skipped, totals.errors
    );
    ExitCode::SUCCESS
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .with_target(false)
        .init();
}
