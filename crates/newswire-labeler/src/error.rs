//! Error types for the labeler

use thiserror::Error;

/// Errors that can occur while labeling a record
///
/// Both variants are recoverable: the batch driver logs a diagnostic and
/// skips the record.
#[derive(Error, Debug)]
pub enum LabelError {
    /// Record has no publication-date field
    #[error("record has no publication-date field")]
    MissingDateField,

    /// Publication-date field did not match the configured format
    #[error("unparseable publication date '{value}': {source}")]
    UnparseableDate {
        /// The raw field value
        value: String,
        /// The underlying parse failure
        source: chrono::ParseError,
    },
}
