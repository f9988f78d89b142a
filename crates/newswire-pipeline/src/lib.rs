//! Newswire Pipeline
//!
//! Batch orchestration: feeds each document's text through the splitter,
//! each chunk through the field extractor, and each record through the
//! labeler, collecting labeled records and per-record diagnostics.
//!
//! # Architecture
//!
//! ```text
//! paths → DocumentSource → RecordSplitter → FieldExtractor → RecordLabeler → BatchResult
//! ```
//!
//! Per-record failures (unparseable dates, empty chunks) are collected, not
//! propagated; no record or document can abort processing of the rest of the
//! batch. Document-text extraction goes through the [`DocumentSource`] seam
//! and runs on the blocking thread pool.
//!
//! # Example Usage
//!
//! ```no_run
//! use newswire_labeler::PriceLabelIndex;
//! use newswire_pipeline::{Pipeline, PipelineConfig, PlainTextSource};
//! use std::path::PathBuf;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let index = PriceLabelIndex::build(&[], 30);
//! let pipeline = Pipeline::new(PlainTextSource, index, PipelineConfig::default());
//!
//! let paths = vec![PathBuf::from("exports/tesla_q1.txt")];
//! let result = pipeline.process_batch(&paths).await;
//!
//! println!("Labeled: {} records", result.records.len());
//! println!("Skipped: {} records", result.failures.len());
//! # Ok(())
//! # }
//! ```
//!
//! [`DocumentSource`]: newswire_domain::traits::DocumentSource

#![warn(missing_docs)]

mod config;
mod encoding;
mod error;
mod pipeline;
mod result;
mod sources;

pub use config::PipelineConfig;
pub use encoding::{encode_record, EncodedExample, MockEncoder};
pub use error::PipelineError;
pub use pipeline::Pipeline;
pub use result::{BatchMetadata, BatchResult, DocumentOutcome, RecordFailure};
pub use sources::{MockSource, PlainTextSource};
