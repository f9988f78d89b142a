//! Trait definitions for external collaborators
//!
//! These traits define the boundaries between the core and infrastructure.
//! Implementations live in other crates (or in the host application).

use std::path::Path;

/// Trait for extracting one raw text blob per source document
///
/// The export format itself (PDF, HTML, plain text) is outside the core;
/// whatever produces the blob implements this. Implemented for plain text
/// files by `newswire-pipeline`.
pub trait DocumentSource {
    /// Error type for extraction operations
    type Error;

    /// Produce the full text of the document at `path`
    fn document_text(&self, path: &Path) -> Result<String, Self::Error>;
}

/// Trait for model tokenization of record text
///
/// The core's responsibility ends at structured records; encoding them into
/// token ids for a specific model is delegated through this narrow seam.
pub trait TextEncoder {
    /// Error type for encoding operations
    type Error;

    /// Encode text into token ids, truncated to `max_len`
    ///
    /// `add_special_tokens` controls whether model-specific prefix/suffix
    /// tokens are included (prompts yes, continuation targets no).
    fn encode(
        &self,
        text: &str,
        max_len: usize,
        add_special_tokens: bool,
    ) -> Result<Vec<u32>, Self::Error>;

    /// The model's end-of-sequence token id
    fn eos_id(&self) -> u32;
}
