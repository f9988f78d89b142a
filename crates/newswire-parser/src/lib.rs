//! Newswire Parser
//!
//! Converts raw news-export text into structured field records.
//!
//! # Overview
//!
//! A news export is one text blob per source document, containing many
//! records back to back. Each record starts with a headline-marker line
//! (`HD` in the Factiva export format) and consists of short field codes
//! (`BY`, `WC`, `PD`, `LP`, ...) followed by field bodies that may continue
//! over several lines.
//!
//! # Architecture
//!
//! ```text
//! Text blob → RecordSplitter → chunks → FieldExtractor → FieldRecord
//! ```
//!
//! # Example Usage
//!
//! ```
//! use newswire_parser::{FieldExtractor, ParserConfig, RecordSplitter};
//!
//! let config = ParserConfig::default();
//! let splitter = RecordSplitter::new(&config);
//! let extractor = FieldExtractor::new(&config);
//!
//! let blob = "preamble\nHD\nBig Headline\nPD 01 January 2022\nLP Lead text.";
//! let chunks = splitter.split(blob);
//! assert_eq!(chunks.len(), 1);
//!
//! let record = extractor.extract(&chunks[0]).unwrap();
//! assert_eq!(record.headline(), Some("Big Headline"));
//! assert_eq!(record.publication_date(), Some("01 January 2022"));
//! ```

#![warn(missing_docs)]

mod config;
mod error;
mod extractor;
mod splitter;

#[cfg(test)]
mod tests;

pub use config::ParserConfig;
pub use error::ParserError;
pub use extractor::FieldExtractor;
pub use splitter::RecordSplitter;
