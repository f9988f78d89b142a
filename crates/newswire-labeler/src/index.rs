//! Precomputed date → price-change-label lookup

use chrono::NaiveDate;
use newswire_domain::PricePoint;
use std::collections::HashMap;
use tracing::{debug, warn};

/// Immutable date-keyed lookup of precomputed percentage price-change labels
///
/// Built once per run and read-only thereafter, so it can be shared freely
/// across threads.
#[derive(Debug, Clone, Default)]
pub struct PriceLabelIndex {
    labels: HashMap<NaiveDate, i32>,
}

impl PriceLabelIndex {
    /// Build the index from a daily price series
    ///
    /// The series is consumed as given, ordered newest-first: for each
    /// position `i` in `[window_days, len)` the point at `i` is the window's
    /// start anchor and the point `window_days` positions earlier in the
    /// slice is its end anchor. The label is
    /// `trunc((end.open − start.close) / start.close × 100)`, keyed by the
    /// start anchor's date. No ordering validation is performed.
    ///
    /// A series shorter than `window_days + 1` yields an empty index. Start
    /// points with a zero close are skipped (the ratio is undefined).
    pub fn build(series: &[PricePoint], window_days: u32) -> Self {
        let window = window_days as usize;
        let mut labels = HashMap::new();

        for i in window..series.len() {
            let start = &series[i];
            let end = &series[i - window];

            if start.close == 0.0 {
                warn!(date = %start.date, "skipping price point with zero close");
                continue;
            }

            // Truncating cast matches the integer-division semantics of the
            // label definition
            let label = ((end.open - start.close) / start.close * 100.0) as i32;
            labels.insert(start.date, label);
        }

        debug!(
            entries = labels.len(),
            window_days, "built price label index"
        );
        Self { labels }
    }

    /// Look up the label for a date
    pub fn get(&self, date: NaiveDate) -> Option<i32> {
        self.labels.get(&date).copied()
    }

    /// Number of dates with a label
    pub fn len(&self) -> usize {
        self.labels.len()
    }

    /// Whether the index has no entries
    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Earliest and latest labeled dates, when any exist
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        let min = self.labels.keys().min()?;
        let max = self.labels.keys().max()?;
        Some((*min, *max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    /// Daily series of `len` points, newest first, ending at `oldest`
    fn series(oldest: NaiveDate, len: usize, open: f64, close: f64) -> Vec<PricePoint> {
        (0..len)
            .map(|i| {
                let offset = (len - 1 - i) as u64;
                PricePoint::new(oldest + chrono::Duration::days(offset as i64), open, close)
            })
            .collect()
    }

    #[test]
    fn test_entry_count_is_len_minus_window() {
        let s = series(date(2022, 1, 1), 40, 110.0, 100.0);
        let index = PriceLabelIndex::build(&s, 30);
        assert_eq!(index.len(), 10);
    }

    #[test]
    fn test_series_of_exactly_window_length_is_empty() {
        let s = series(date(2022, 1, 1), 30, 110.0, 100.0);
        assert!(PriceLabelIndex::build(&s, 30).is_empty());
    }

    #[test]
    fn test_series_of_window_plus_one_has_one_entry() {
        let s = series(date(2022, 1, 1), 31, 110.0, 100.0);
        let index = PriceLabelIndex::build(&s, 30);
        assert_eq!(index.len(), 1);
        // The single start anchor is the oldest point
        assert_eq!(index.get(date(2022, 1, 1)), Some(10));
    }

    #[test]
    fn test_short_series_is_empty() {
        let s = series(date(2022, 1, 1), 5, 110.0, 100.0);
        assert!(PriceLabelIndex::build(&s, 30).is_empty());
        assert!(PriceLabelIndex::build(&[], 30).is_empty());
    }

    #[test]
    fn test_label_truncates_toward_zero() {
        // (109.9 - 100) / 100 * 100 = 9.9 → 9
        let mut s = series(date(2022, 1, 1), 31, 109.9, 100.0);
        let index = PriceLabelIndex::build(&s, 30);
        assert_eq!(index.get(date(2022, 1, 1)), Some(9));

        // (90.5 - 100) / 100 * 100 = -9.5 → -9 (toward zero, not floor)
        for p in &mut s {
            p.open = 90.5;
        }
        let index = PriceLabelIndex::build(&s, 30);
        assert_eq!(index.get(date(2022, 1, 1)), Some(-9));
    }

    #[test]
    fn test_zero_close_start_is_skipped() {
        let mut s = series(date(2022, 1, 1), 31, 110.0, 100.0);
        s[30].close = 0.0; // the only start anchor
        assert!(PriceLabelIndex::build(&s, 30).is_empty());
    }

    #[test]
    fn test_missing_date_is_none() {
        let s = series(date(2022, 1, 1), 31, 110.0, 100.0);
        let index = PriceLabelIndex::build(&s, 30);
        assert_eq!(index.get(date(2021, 12, 31)), None);
    }

    #[test]
    fn test_date_range() {
        let s = series(date(2022, 1, 1), 40, 110.0, 100.0);
        let index = PriceLabelIndex::build(&s, 30);
        assert_eq!(
            index.date_range(),
            Some((date(2022, 1, 1), date(2022, 1, 10)))
        );
        assert_eq!(PriceLabelIndex::default().date_range(), None);
    }
}
