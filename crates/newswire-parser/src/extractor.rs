//! Extract structured fields from one record chunk

use crate::config::ParserConfig;
use crate::error::ParserError;
use newswire_domain::FieldRecord;
use std::collections::BTreeSet;
use tracing::debug;

/// The field currently being accumulated during a line scan
///
/// The extractor is a single-state machine over this pair: each line either
/// commits it and starts a new one (recognized key) or extends its value
/// (continuation line).
struct PendingField {
    key: String,
    value: String,
}

impl PendingField {
    fn start(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Append a continuation line, joined by a single space
    fn append_line(&mut self, line: &str) {
        if !self.value.is_empty() {
            self.value.push(' ');
        }
        self.value.push_str(line);
    }

    /// Commit into the record, trimming accumulation whitespace
    fn commit(self, record: &mut FieldRecord) {
        record.insert(self.key, self.value.trim().to_string());
    }
}

/// Parses one record chunk into a [`FieldRecord`]
pub struct FieldExtractor {
    headline_key: String,
    recognized_keys: BTreeSet<String>,
    flush_trailing: bool,
}

impl FieldExtractor {
    /// Create an extractor from parser configuration
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            headline_key: config.headline_marker.clone(),
            recognized_keys: config.recognized_keys.clone(),
            flush_trailing: config.flush_trailing_field,
        }
    }

    /// Extract the chunk's fields
    ///
    /// Scans line by line. A line whose first whitespace-delimited token is
    /// a recognized key commits the pending field and starts a new one with
    /// the rest of that line; any other line is appended whole to the
    /// pending value. Text before the first recognized key accumulates
    /// under the synthetic headline key.
    ///
    /// # Errors
    ///
    /// Returns [`ParserError::EmptyChunk`] when the chunk is blank.
    pub fn extract(&self, chunk: &str) -> Result<FieldRecord, ParserError> {
        if chunk.trim().is_empty() {
            return Err(ParserError::EmptyChunk);
        }

        let mut record = FieldRecord::new();
        let mut pending = PendingField::start(self.headline_key.clone(), "");

        for line in chunk.lines() {
            match self.recognized_key_of(line) {
                Some(key) => {
                    // Value starts after the key token and one separating space
                    let rest = line[key.len()..].strip_prefix(' ').unwrap_or("");
                    let done = std::mem::replace(&mut pending, PendingField::start(key, rest));
                    done.commit(&mut record);
                }
                None => pending.append_line(line),
            }
        }

        if self.flush_trailing {
            pending.commit(&mut record);
        }

        debug!(fields = record.len(), "extracted record chunk");
        Ok(record)
    }

    /// The line's first token, iff it is a recognized field code
    fn recognized_key_of<'a>(&self, line: &'a str) -> Option<&'a str> {
        let first = line.split(char::is_whitespace).next().unwrap_or("");
        self.recognized_keys.contains(first).then_some(first)
    }
}
