//! Batch result and diagnostic types

use newswire_domain::LabeledRecord;

/// Everything produced by one batch run
#[derive(Debug, Clone, Default)]
pub struct BatchResult {
    /// Labeled records, in document order
    pub records: Vec<LabeledRecord>,

    /// Records and documents skipped, with reasons
    pub failures: Vec<RecordFailure>,

    /// Counters for the run
    pub metadata: BatchMetadata,
}

/// Records and chunks produced from a single document
#[derive(Debug, Clone, Default)]
pub struct DocumentOutcome {
    /// Labeled records from this document
    pub records: Vec<LabeledRecord>,

    /// Skipped records from this document
    pub failures: Vec<RecordFailure>,

    /// Number of record chunks the document split into
    pub chunks_seen: usize,
}

/// A record or document that was skipped, kept for operator visibility
#[derive(Debug, Clone)]
pub struct RecordFailure {
    /// Document the failure came from
    pub document: String,

    /// Why the record was skipped
    pub reason: String,

    /// Opening fragment of the offending chunk (empty for whole-document
    /// failures)
    pub snippet: String,
}

/// Counters describing a batch run
#[derive(Debug, Clone, Default)]
pub struct BatchMetadata {
    /// Documents the batch attempted
    pub documents_processed: usize,

    /// Record chunks seen across all documents
    pub chunks_seen: usize,

    /// Records successfully labeled
    pub records_labeled: usize,

    /// Records skipped (extraction or labeling failure)
    pub records_skipped: usize,

    /// Wall-clock processing time in milliseconds
    pub processing_time_ms: u64,
}

impl BatchMetadata {
    /// One-line operator summary of the run
    pub fn summary(&self) -> String {
        format!(
            "{} documents, {} chunks, {} labeled, {} skipped in {}ms",
            self.documents_processed,
            self.chunks_seen,
            self.records_labeled,
            self.records_skipped,
            self.processing_time_ms
        )
    }
}
