//! Price series value objects

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One trading day of a daily price series
///
/// A price series is a slice of these, ordered newest-first as consumed by
/// the label index builder.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PricePoint {
    /// Trading date
    pub date: NaiveDate,

    /// Opening price
    pub open: f64,

    /// Closing price
    pub close: f64,
}

impl PricePoint {
    /// Create a new price point
    pub fn new(date: NaiveDate, open: f64, close: f64) -> Self {
        Self { date, open, close }
    }
}
