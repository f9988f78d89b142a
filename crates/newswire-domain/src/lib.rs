//! Newswire Domain Layer
//!
//! This crate contains the core data model for newswire. It carries only
//! fundamental primitives (calendar dates, serde derives) and defines the
//! value objects and trait interfaces that all other layers depend upon.
//!
//! ## Key Concepts
//!
//! - **FieldRecord**: one news record as a field-code → value mapping
//! - **PricePoint**: one trading day of a daily price series
//! - **Label**: forward-looking price-change percentage, or `Pending`
//! - **LabeledRecord**: a FieldRecord with its target label attached
//!
//! ## Architecture
//!
//! Infrastructure concerns live in other crates:
//! - Parsing raw export text into records: `newswire-parser`
//! - Building the date → label index and attaching labels: `newswire-labeler`
//! - Batch orchestration and I/O: `newswire-pipeline`
//!
//! Trait definitions for external collaborators (document text extraction,
//! model tokenization) live in [`traits`].

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod label;
pub mod price;
pub mod record;
pub mod traits;

// Re-exports for convenience
pub use label::Label;
pub use price::PricePoint;
pub use record::{FieldRecord, LabeledRecord, HEADLINE_KEY, LEAD_PARAGRAPH_KEY, PUBLICATION_DATE_KEY};
