//! CLI command definitions and argument parsing.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Newswire - build labeled training datasets from news exports.
#[derive(Debug, Parser)]
#[command(name = "newswire")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Parse exports, attach labels, and write a JSONL dataset
    Build(BuildArgs),

    /// Build the price label index and report its coverage
    Index(IndexArgs),
}

/// Arguments for the build command.
#[derive(Debug, Parser)]
pub struct BuildArgs {
    /// Directory of export text files (.txt, not recursed into)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Daily price series JSON file, ordered newest first
    #[arg(short, long)]
    pub prices: PathBuf,

    /// Output JSONL file
    #[arg(short, long)]
    pub output: PathBuf,

    /// Label window in calendar days (overrides config)
    #[arg(short, long)]
    pub window_days: Option<u32>,

    /// Pipeline configuration TOML file
    #[arg(short, long, env = "NEWSWIRE_CONFIG")]
    pub config: Option<PathBuf>,
}

/// Arguments for the index command.
#[derive(Debug, Parser)]
pub struct IndexArgs {
    /// Daily price series JSON file, ordered newest first
    #[arg(short, long)]
    pub prices: PathBuf,

    /// Label window in calendar days
    #[arg(short, long, default_value = "30")]
    pub window_days: u32,
}
