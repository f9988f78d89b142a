//! Newswire CLI - build labeled training datasets from news exports.

use anyhow::Context;
use clap::Parser;
use newswire_cli::{commands, Cli, Command};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Log to stderr so stdout stays clean for command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Build(args) => commands::execute_build(args)
            .await
            .context("build failed")?,
        Command::Index(args) => commands::execute_index(args).context("index failed")?,
    }
    Ok(())
}
