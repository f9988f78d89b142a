//! Newswire CLI library
//!
//! Command definitions and execution for the `newswire` binary: turn a
//! folder of news-export text files plus a daily price series into a JSONL
//! dataset of labeled records.

pub mod cli;
pub mod commands;
pub mod error;
pub mod output;

pub use cli::{BuildArgs, Cli, Command, IndexArgs};
pub use error::{CliError, Result};
