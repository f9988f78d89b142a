//! Error types for the parser

use thiserror::Error;

/// Errors that can occur while parsing a record chunk
#[derive(Error, Debug)]
pub enum ParserError {
    /// Chunk contained no text to extract fields from
    #[error("empty record chunk")]
    EmptyChunk,
}
