//! Error types for the pipeline

use thiserror::Error;

/// Errors that can occur while driving a batch
///
/// These cover the document-source boundary only; per-record parse and
/// label failures are collected into the batch result instead.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// Document source failed to produce text for a document
    #[error("document source error: {0}")]
    Source(String),

    /// Blocking extraction task failed to join
    #[error("task join error: {0}")]
    TaskJoin(String),
}
