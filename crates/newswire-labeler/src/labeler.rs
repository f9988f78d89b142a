//! Attach labels to parsed records

use crate::config::LabelerConfig;
use crate::error::LabelError;
use crate::index::PriceLabelIndex;
use chrono::{Datelike, Duration, NaiveDate, Weekday};
use newswire_domain::{FieldRecord, Label, LabeledRecord};
use tracing::debug;

/// Date format of the index keys on the wire (`YYYY-MM-DD`)
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Computes each record's target label date and attaches the label
pub struct RecordLabeler {
    index: PriceLabelIndex,
    window_days: u32,
    date_format: String,
    adjust_weekends: bool,
}

impl RecordLabeler {
    /// Create a labeler over a prebuilt index
    pub fn new(index: PriceLabelIndex, config: &LabelerConfig) -> Self {
        Self {
            index,
            window_days: config.window_days,
            date_format: config.date_format.clone(),
            adjust_weekends: config.adjust_weekends,
        }
    }

    /// The index this labeler resolves against
    pub fn index(&self) -> &PriceLabelIndex {
        &self.index
    }

    /// Attach the record's target label
    ///
    /// Resolves the publication date, advances it by the window, rolls
    /// weekend dates to the next Monday, and looks the result up in the
    /// index. A date missing from the index is not an error; the record is
    /// labeled [`Label::Pending`].
    ///
    /// # Errors
    ///
    /// [`LabelError::MissingDateField`] when the record has no
    /// publication-date field, [`LabelError::UnparseableDate`] when the
    /// field does not match the configured format. Both are recoverable;
    /// callers skip the record and continue the batch.
    pub fn label(&self, record: FieldRecord) -> Result<LabeledRecord, LabelError> {
        let raw = record
            .publication_date()
            .ok_or(LabelError::MissingDateField)?;

        let published = NaiveDate::parse_from_str(raw, &self.date_format).map_err(|source| {
            LabelError::UnparseableDate {
                value: raw.to_string(),
                source,
            }
        })?;

        let target_date = self.target_date(published);
        let target = match self.index.get(target_date) {
            Some(pct) => Label::Pct(pct),
            None => Label::Pending,
        };

        debug!(%published, %target_date, %target, "labeled record");
        Ok(LabeledRecord::new(record, target))
    }

    /// The date whose price-change label the record receives
    ///
    /// Publication date plus the window, with Saturday rolled forward two
    /// days and Sunday one so weekend dates land on the next trading day.
    pub fn target_date(&self, published: NaiveDate) -> NaiveDate {
        let candidate = published + Duration::days(i64::from(self.window_days));
        if !self.adjust_weekends {
            return candidate;
        }
        match candidate.weekday() {
            Weekday::Sat => candidate + Duration::days(2),
            Weekday::Sun => candidate + Duration::days(1),
            _ => candidate,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use newswire_domain::{PricePoint, PUBLICATION_DATE_KEY};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn record_with_pd(pd: &str) -> FieldRecord {
        let mut record = FieldRecord::new();
        record.insert("HD", "Headline");
        record.insert(PUBLICATION_DATE_KEY, pd);
        record.insert("LP", "Some lead text");
        record
    }

    /// Index with a single labeled date
    fn index_for(target: NaiveDate, start_close: f64, end_open: f64) -> PriceLabelIndex {
        let series: Vec<PricePoint> = (0..31)
            .map(|i| PricePoint::new(target + Duration::days(30 - i), end_open, start_close))
            .collect();
        PriceLabelIndex::build(&series, 30)
    }

    #[test]
    fn test_label_hit() {
        // 01 January 2022 + 30 days = Monday 2022-01-31, no weekend roll
        let index = index_for(date(2022, 1, 31), 100.0, 110.0);
        let labeler = RecordLabeler::new(index, &LabelerConfig::default());

        let labeled = labeler.label(record_with_pd("01 January 2022")).unwrap();
        assert_eq!(labeled.target, Label::Pct(10));
        assert_eq!(labeled.fields.lead_paragraph(), Some("Some lead text"));
    }

    #[test]
    fn test_label_miss_is_pending() {
        let index = index_for(date(2022, 1, 31), 100.0, 110.0);
        let labeler = RecordLabeler::new(index, &LabelerConfig::default());

        let labeled = labeler.label(record_with_pd("05 March 2022")).unwrap();
        assert_eq!(labeled.target, Label::Pending);
    }

    #[test]
    fn test_empty_index_labels_pending() {
        let labeler = RecordLabeler::new(PriceLabelIndex::default(), &LabelerConfig::default());
        let labeled = labeler.label(record_with_pd("01 January 2022")).unwrap();
        assert_eq!(labeled.target, Label::Pending);
    }

    #[test]
    fn test_missing_date_field() {
        let labeler = RecordLabeler::new(PriceLabelIndex::default(), &LabelerConfig::default());
        let mut record = FieldRecord::new();
        record.insert("LP", "Lead without a date");

        assert!(matches!(
            labeler.label(record),
            Err(LabelError::MissingDateField)
        ));
    }

    #[test]
    fn test_invalid_calendar_date() {
        let labeler = RecordLabeler::new(PriceLabelIndex::default(), &LabelerConfig::default());
        let result = labeler.label(record_with_pd("31 February 2022"));
        assert!(matches!(result, Err(LabelError::UnparseableDate { .. })));
    }

    #[test]
    fn test_garbage_date() {
        let labeler = RecordLabeler::new(PriceLabelIndex::default(), &LabelerConfig::default());
        let result = labeler.label(record_with_pd("sometime next week"));
        assert!(matches!(result, Err(LabelError::UnparseableDate { .. })));
    }

    #[test]
    fn test_weekend_roll_to_monday() {
        let labeler = RecordLabeler::new(PriceLabelIndex::default(), &LabelerConfig::default());

        // 2022-01-29 is a Saturday, 2022-01-30 a Sunday; both roll to Monday
        assert_eq!(
            labeler.target_date(date(2021, 12, 30)),
            date(2022, 1, 31),
            "Saturday candidate rolls two days"
        );
        assert_eq!(
            labeler.target_date(date(2021, 12, 31)),
            date(2022, 1, 31),
            "Sunday candidate rolls one day"
        );
        assert_eq!(
            labeler.target_date(date(2022, 1, 1)),
            date(2022, 1, 31),
            "weekday candidate is unchanged"
        );
    }

    #[test]
    fn test_weekend_roll_disabled() {
        let mut config = LabelerConfig::default();
        config.adjust_weekends = false;
        let labeler = RecordLabeler::new(PriceLabelIndex::default(), &config);

        assert_eq!(labeler.target_date(date(2021, 12, 30)), date(2022, 1, 29));
    }

    #[test]
    fn test_iso_round_trip() {
        let labeler = RecordLabeler::new(PriceLabelIndex::default(), &LabelerConfig::default());
        let target = labeler.target_date(date(2022, 1, 1));

        let iso = target.format(ISO_DATE_FORMAT).to_string();
        assert_eq!(iso, "2022-01-31");
        let back = NaiveDate::parse_from_str(&iso, ISO_DATE_FORMAT).unwrap();
        assert_eq!(back, target);
    }
}
