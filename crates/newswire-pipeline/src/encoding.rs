//! Prepare labeled records for model training
//!
//! The core's responsibility ends at structured records; this module is the
//! thin bridge to a model tokenizer behind the [`TextEncoder`] seam. An
//! example is the encoded lead paragraph (the prompt) followed by the
//! encoded target label and the end-of-sequence token.

use newswire_domain::traits::TextEncoder;
use newswire_domain::LabeledRecord;
use tracing::warn;

/// One training example ready for dataset assembly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedExample {
    /// Prompt, target, and eos token ids, truncated to the configured
    /// maximum
    pub input_ids: Vec<u32>,

    /// Length of the prompt portion
    pub seq_len: usize,
}

/// Encode a labeled record into a training example
///
/// Returns `Ok(None)` and logs a diagnostic when the record has no lead
/// paragraph, or when `skip_overlength` is set and the full example exceeds
/// `max_seq_length`; otherwise the example is truncated to `max_seq_length`.
pub fn encode_record<E: TextEncoder>(
    record: &LabeledRecord,
    encoder: &E,
    max_seq_length: usize,
    skip_overlength: bool,
) -> Result<Option<EncodedExample>, E::Error> {
    let Some(prompt) = record.fields.lead_paragraph() else {
        warn!("skipping record without a lead paragraph");
        return Ok(None);
    };

    let prompt_ids = encoder.encode(prompt, max_seq_length, true)?;
    let target_ids = encoder.encode(&record.target.to_string(), max_seq_length, false)?;

    let seq_len = prompt_ids.len();
    let mut input_ids = prompt_ids;
    input_ids.extend(target_ids);
    input_ids.push(encoder.eos_id());

    if skip_overlength && input_ids.len() > max_seq_length {
        warn!(
            len = input_ids.len(),
            max_seq_length, "skipping overlength example"
        );
        return Ok(None);
    }
    input_ids.truncate(max_seq_length);

    Ok(Some(EncodedExample { input_ids, seq_len }))
}

/// Mock encoder for deterministic testing
///
/// Encodes each whitespace-delimited token as its position-independent
/// length, making expected ids trivial to compute by hand.
#[derive(Debug, Clone)]
pub struct MockEncoder {
    eos: u32,
}

impl MockEncoder {
    /// Create a mock encoder with the given eos token id
    pub fn new(eos: u32) -> Self {
        Self { eos }
    }
}

impl Default for MockEncoder {
    fn default() -> Self {
        Self::new(0)
    }
}

impl TextEncoder for MockEncoder {
    type Error = std::convert::Infallible;

    fn encode(
        &self,
        text: &str,
        max_len: usize,
        _add_special_tokens: bool,
    ) -> Result<Vec<u32>, Self::Error> {
        Ok(text
            .split_whitespace()
            .map(|t| t.len() as u32)
            .take(max_len)
            .collect())
    }

    fn eos_id(&self) -> u32 {
        self.eos
    }
}
