//! fishgen CLI
//!
//! Generates fish shell completion scripts from command tree definitions.

use clap::Parser;
use fishgen_cli::{Cli, Commands};
use fishgen_core::FishgenError;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(e.exit_code());
    }
}

fn run() -> Result<(), FishgenError> {
    let cli = Cli::parse();

    // Logs go to stderr so scripts written to stdout stay clean
    let log_level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let filter = EnvFilter::builder()
        .with_default_directive(log_level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    match &cli.command {
        Commands::Fish(cmd) => cmd.execute(&cli.file)?,
        Commands::Tree(cmd) => cmd.execute(&cli.file)?,
        Commands::Init(cmd) => cmd.execute()?,
        Commands::Completion(cmd) => cmd.execute()?,
    }

    Ok(())
}
