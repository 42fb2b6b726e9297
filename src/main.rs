use std::path::PathBuf;

use clap::Parser;
use tracing::error;

#[derive(Parser)]
#[command(name = "forkfleet")]
#[command(version)]
#[command(
    about = "Fork a template repository into many named repositories and customize each one",
    long_about = None
)]
struct Cli {
    /// TOML file overriding the built-in template, organization, targets and file list
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Directory in which working copies are cloned (defaults to the current directory)
    #[arg(short, long)]
    work_dir: Option<PathBuf>,
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    forkfleet::init_logging(cli.verbose);

    // Per-target failures are logged as they happen and never change the exit code.
    if let Err(e) = forkfleet::provision(cli.config.as_deref(), cli.work_dir) {
        error!("Aborting: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
