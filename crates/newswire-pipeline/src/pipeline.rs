//! Core batch orchestration

use crate::config::PipelineConfig;
use crate::error::PipelineError;
use crate::result::{BatchResult, DocumentOutcome, RecordFailure};
use newswire_domain::traits::DocumentSource;
use newswire_labeler::{PriceLabelIndex, RecordLabeler};
use newswire_parser::{FieldExtractor, RecordSplitter};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::{Duration, SystemTime};
use tracing::{debug, info, warn};

/// Drives documents through split → extract → label
///
/// Generic over the document source; the label index is built once before
/// construction and read-only afterwards. Documents are independent: a
/// failure in one contributes a diagnostic, never aborts the batch.
pub struct Pipeline<D>
where
    D: DocumentSource,
{
    source: Arc<D>,
    splitter: RecordSplitter,
    extractor: FieldExtractor,
    labeler: RecordLabeler,
    config: PipelineConfig,
}

impl<D> Pipeline<D>
where
    D: DocumentSource + Send + Sync + 'static,
    D::Error: std::fmt::Display,
{
    /// Create a pipeline over a document source and a prebuilt index
    pub fn new(source: D, index: PriceLabelIndex, config: PipelineConfig) -> Self {
        Self {
            source: Arc::new(source),
            splitter: RecordSplitter::new(&config.parser),
            extractor: FieldExtractor::new(&config.parser),
            labeler: RecordLabeler::new(index, &config.labeler),
            config,
        }
    }

    /// Encode labeled records into training examples
    ///
    /// Thin bridge to a model tokenizer behind the [`TextEncoder`] seam,
    /// using the configured sequence-length policy. Records without a lead
    /// paragraph (and overlength examples, when configured) are skipped
    /// with a diagnostic.
    ///
    /// [`TextEncoder`]: newswire_domain::traits::TextEncoder
    pub fn encode_records<E>(
        &self,
        records: &[newswire_domain::LabeledRecord],
        encoder: &E,
    ) -> Result<Vec<crate::encoding::EncodedExample>, E::Error>
    where
        E: newswire_domain::traits::TextEncoder,
    {
        let mut examples = Vec::new();
        for record in records {
            if let Some(example) = crate::encoding::encode_record(
                record,
                encoder,
                self.config.max_seq_length,
                self.config.skip_overlength,
            )? {
                examples.push(example);
            }
        }
        Ok(examples)
    }

    /// Process one document into labeled records
    ///
    /// # Errors
    ///
    /// Fails only when the source cannot produce the document's text;
    /// record-level problems land in the outcome's failure list.
    pub async fn process_document(&self, path: &Path) -> Result<DocumentOutcome, PipelineError> {
        let text = self.document_text(path).await?;
        Ok(self.process_text(&path.display().to_string(), &text))
    }

    /// Process an already-extracted text blob
    pub fn process_text(&self, document_id: &str, text: &str) -> DocumentOutcome {
        let chunks = self.splitter.split(text);
        debug!(document = document_id, chunks = chunks.len(), "split document");

        let mut outcome = DocumentOutcome {
            chunks_seen: chunks.len(),
            ..DocumentOutcome::default()
        };

        for chunk in &chunks {
            let record = match self.extractor.extract(chunk) {
                Ok(record) => record,
                Err(e) => {
                    warn!(document = document_id, "skipping chunk: {}", e);
                    outcome.failures.push(failure(document_id, &e, chunk));
                    continue;
                }
            };

            match self.labeler.label(record) {
                Ok(labeled) => outcome.records.push(labeled),
                Err(e) => {
                    warn!(document = document_id, "skipping record: {}", e);
                    outcome.failures.push(failure(document_id, &e, chunk));
                }
            }
        }

        outcome
    }

    /// Process a batch of documents
    ///
    /// Documents that cannot be read are recorded as failures; the batch
    /// always runs to completion.
    pub async fn process_batch(&self, paths: &[PathBuf]) -> BatchResult {
        let start_time = SystemTime::now();
        let mut result = BatchResult::default();

        info!(documents = paths.len(), "starting batch");

        for path in paths {
            match self.process_document(path).await {
                Ok(outcome) => {
                    result.metadata.chunks_seen += outcome.chunks_seen;
                    result.metadata.records_labeled += outcome.records.len();
                    result.metadata.records_skipped += outcome.failures.len();
                    result.records.extend(outcome.records);
                    result.failures.extend(outcome.failures);
                }
                Err(e) => {
                    warn!(document = %path.display(), "skipping document: {}", e);
                    result.failures.push(RecordFailure {
                        document: path.display().to_string(),
                        reason: e.to_string(),
                        snippet: String::new(),
                    });
                }
            }
            result.metadata.documents_processed += 1;
        }

        result.metadata.processing_time_ms = start_time
            .elapsed()
            .unwrap_or(Duration::from_secs(0))
            .as_millis() as u64;

        info!("batch complete: {}", result.metadata.summary());
        result
    }

    /// Run the document source on the blocking thread pool
    async fn document_text(&self, path: &Path) -> Result<String, PipelineError> {
        let source = Arc::clone(&self.source);
        let path = path.to_path_buf();

        tokio::task::spawn_blocking(move || {
            source
                .document_text(&path)
                .map_err(|e| PipelineError::Source(e.to_string()))
        })
        .await
        .map_err(|e| PipelineError::TaskJoin(e.to_string()))?
    }
}

/// Build a failure diagnostic with the chunk's opening fragment
fn failure(document_id: &str, reason: &impl std::fmt::Display, chunk: &str) -> RecordFailure {
    let snippet: String = chunk.lines().next().unwrap_or("").chars().take(80).collect();
    RecordFailure {
        document: document_id.to_string(),
        reason: reason.to_string(),
        snippet,
    }
}
