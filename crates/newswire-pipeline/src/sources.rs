//! Document source implementations

use newswire_domain::traits::DocumentSource;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

/// Document source over plain UTF-8 text files
///
/// Stands in for whatever produces one text blob per export document; a PDF
/// or HTML extractor would implement [`DocumentSource`] the same way.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextSource;

impl DocumentSource for PlainTextSource {
    type Error = std::io::Error;

    fn document_text(&self, path: &Path) -> Result<String, Self::Error> {
        std::fs::read_to_string(path)
    }
}

/// Mock document source for deterministic testing
///
/// Returns pre-configured text per path without touching the filesystem.
///
/// # Examples
///
/// ```
/// use newswire_pipeline::MockSource;
/// use newswire_domain::traits::DocumentSource;
/// use std::path::Path;
///
/// let mut source = MockSource::default();
/// source.add_document("a.txt", "HD\nHeadline\nPD 01 January 2022");
/// assert!(source.document_text(Path::new("a.txt")).is_ok());
/// assert_eq!(source.call_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockSource {
    documents: HashMap<PathBuf, String>,
    call_count: Arc<Mutex<usize>>,
}

impl MockSource {
    /// Add a canned document for a path
    pub fn add_document(&mut self, path: impl Into<PathBuf>, text: impl Into<String>) {
        self.documents.insert(path.into(), text.into());
    }

    /// Number of times `document_text` was called
    pub fn call_count(&self) -> usize {
        *self.call_count.lock().unwrap()
    }
}

impl DocumentSource for MockSource {
    type Error = String;

    fn document_text(&self, path: &Path) -> Result<String, Self::Error> {
        *self.call_count.lock().unwrap() += 1;
        self.documents
            .get(path)
            .cloned()
            .ok_or_else(|| format!("no canned document for {}", path.display()))
    }
}
