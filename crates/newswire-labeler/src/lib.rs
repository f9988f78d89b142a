//! Newswire Labeler
//!
//! Attaches forward-looking price-change labels to parsed news records.
//!
//! # Overview
//!
//! Labeling has two halves. [`PriceLabelIndex`] is built once per run from a
//! daily price series: for every date with a full look-ahead window it
//! precomputes the truncated percentage change between that day's close and
//! the open at the end of the window. [`RecordLabeler`] then resolves each
//! record's publication date, advances it by the window, rolls weekend dates
//! to the next business day, and looks the result up in the index.
//!
//! # Architecture
//!
//! ```text
//! PriceSeries → PriceLabelIndex ─┐
//!                                ├→ RecordLabeler → LabeledRecord
//! FieldRecord (PD field) ────────┘
//! ```
//!
//! A record whose date cannot be resolved is an error for the caller to skip;
//! a date with no index entry is not an error, its label is `Pending`.

#![warn(missing_docs)]

mod config;
mod error;
mod index;
mod labeler;

pub use config::LabelerConfig;
pub use error::LabelError;
pub use index::PriceLabelIndex;
pub use labeler::{RecordLabeler, ISO_DATE_FORMAT};
