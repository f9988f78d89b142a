//! Integration tests for the parser

#[cfg(test)]
mod tests {
    use crate::{FieldExtractor, ParserConfig, RecordSplitter};

    /// A realistic two-record export blob with page-header preamble
    const EXPORT_BLOB: &str = "\
Factiva export
Page 1 of 12
HD
Tesla Deliveries Beat Estimates
BY A Reporter
WC 512 words
PD 01 January 2022
SN Dow Jones Newswires
LP Tesla said quarterly deliveries
rose past analyst expectations.
CO tsla : Tesla Inc
AN Document DJDN000020220101
HD
Regulators Open New Inquiry
WC 301 words
PD 02 January 2022
LP The agency said it would review
the matter in the coming weeks.
AN Document DJDN000020220102";

    #[test]
    fn test_full_document_parse() {
        let config = ParserConfig::default();
        let splitter = RecordSplitter::new(&config);
        let extractor = FieldExtractor::new(&config);

        let chunks = splitter.split(EXPORT_BLOB);
        assert_eq!(chunks.len(), 2);

        let first = extractor.extract(&chunks[0]).unwrap();
        assert_eq!(first.headline(), Some("Tesla Deliveries Beat Estimates"));
        assert_eq!(first.get("BY"), Some("A Reporter"));
        assert_eq!(first.get("WC"), Some("512 words"));
        assert_eq!(first.publication_date(), Some("01 January 2022"));
        assert_eq!(
            first.lead_paragraph(),
            Some("Tesla said quarterly deliveries rose past analyst expectations.")
        );
        assert_eq!(first.get("CO"), Some("tsla : Tesla Inc"));
        assert_eq!(first.get("AN"), Some("Document DJDN000020220101"));

        let second = extractor.extract(&chunks[1]).unwrap();
        assert_eq!(second.headline(), Some("Regulators Open New Inquiry"));
        assert_eq!(second.publication_date(), Some("02 January 2022"));
        assert_eq!(second.get("AN"), Some("Document DJDN000020220102"));
    }

    #[test]
    fn test_record_count_bounded_by_chunk_count() {
        let config = ParserConfig::default();
        let splitter = RecordSplitter::new(&config);
        let extractor = FieldExtractor::new(&config);

        // Second marker opens an empty chunk that fails extraction
        let blob = "HD\nA headline\nPD 01 January 2022\nHD\nHD\nAnother\nPD 02 January 2022";
        let chunks = splitter.split(blob);
        let records: Vec<_> = chunks
            .iter()
            .filter_map(|c| extractor.extract(c).ok())
            .collect();

        assert_eq!(chunks.len(), 3);
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_parse_is_deterministic() {
        let config = ParserConfig::default();
        let splitter = RecordSplitter::new(&config);
        let extractor = FieldExtractor::new(&config);

        let run = || -> Vec<_> {
            splitter
                .split(EXPORT_BLOB)
                .iter()
                .filter_map(|c| extractor.extract(c).ok())
                .collect()
        };
        assert_eq!(run(), run());
    }
}
