//! Field records - the fundamental unit of the newswire dataset

use crate::Label;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Synthetic key for headline text preceding the first recognized field code
pub const HEADLINE_KEY: &str = "HD";

/// Field code carrying the record's publication date
pub const PUBLICATION_DATE_KEY: &str = "PD";

/// Field code carrying the record's lead paragraph
pub const LEAD_PARAGRAPH_KEY: &str = "LP";

/// One news record as a mapping from field code to accumulated value
///
/// Keys are the short metadata codes of the export format (`BY`, `WC`, `PD`,
/// `LP`, ...) plus the synthetic [`HEADLINE_KEY`] for text preceding the
/// first recognized code. Values are whole field bodies, with multi-line
/// continuations joined by single spaces.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldRecord {
    fields: BTreeMap<String, String>,
}

impl FieldRecord {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field, replacing any previous value for the same code
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    /// Get a field value by code
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }

    /// Whether a field code is present
    pub fn contains_key(&self, key: &str) -> bool {
        self.fields.contains_key(key)
    }

    /// Number of fields in the record
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate over (code, value) pairs in code order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Headline text, if any was accumulated
    pub fn headline(&self) -> Option<&str> {
        self.get(HEADLINE_KEY)
    }

    /// Raw publication-date field (e.g. `01 January 2022`)
    pub fn publication_date(&self) -> Option<&str> {
        self.get(PUBLICATION_DATE_KEY)
    }

    /// Lead paragraph text
    pub fn lead_paragraph(&self) -> Option<&str> {
        self.get(LEAD_PARAGRAPH_KEY)
    }
}

impl FromIterator<(String, String)> for FieldRecord {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            fields: iter.into_iter().collect(),
        }
    }
}

/// A field record with its target label attached
///
/// Serializes to a flat JSON object: the fields inlined at the top level,
/// plus a `"target"` entry (the shape the downstream dataset assembler
/// consumes).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabeledRecord {
    /// Extracted metadata fields
    #[serde(flatten)]
    pub fields: FieldRecord,

    /// Forward-looking price-change label
    pub target: Label,
}

impl LabeledRecord {
    /// Attach a label to a record
    pub fn new(fields: FieldRecord, target: Label) -> Self {
        Self { fields, target }
    }
}
