//! Split a raw export blob into per-record chunks

use crate::config::ParserConfig;

/// Splits a raw text blob into per-record chunks on headline-marker lines
///
/// A line starting with the marker token opens a new record. The marker
/// line itself (including any trailing text on it) is consumed by the
/// split; each chunk is the text from the following line up to the next
/// marker line or end of input. Text before the first marker line is
/// preamble and is discarded.
pub struct RecordSplitter {
    marker: String,
}

impl RecordSplitter {
    /// Create a splitter from parser configuration
    pub fn new(config: &ParserConfig) -> Self {
        Self {
            marker: config.headline_marker.clone(),
        }
    }

    /// Split the blob into ordered record chunks
    ///
    /// Returns an empty vec when the blob contains no marker line; a
    /// malformed document simply contributes no records.
    pub fn split(&self, text: &str) -> Vec<String> {
        let mut chunks = Vec::new();
        // None until the first marker line; everything before it is preamble
        let mut current: Option<String> = None;

        for line in text.lines() {
            if line.starts_with(&self.marker) {
                if let Some(chunk) = current.take() {
                    chunks.push(chunk);
                }
                current = Some(String::new());
            } else if let Some(chunk) = current.as_mut() {
                if !chunk.is_empty() {
                    chunk.push('\n');
                }
                chunk.push_str(line);
            }
        }

        if let Some(chunk) = current {
            chunks.push(chunk);
        }

        chunks
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn splitter() -> RecordSplitter {
        RecordSplitter::new(&ParserConfig::default())
    }

    #[test]
    fn test_no_marker_yields_no_chunks() {
        let chunks = splitter().split("just some text\nwith no records");
        assert!(chunks.is_empty());
    }

    #[test]
    fn test_empty_text() {
        assert!(splitter().split("").is_empty());
    }

    #[test]
    fn test_preamble_is_discarded() {
        let text = "export header\npage 1 of 3\nHD\nHeadline text\nPD 01 January 2022";
        let chunks = splitter().split(text);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0], "Headline text\nPD 01 January 2022");
    }

    #[test]
    fn test_multiple_records() {
        let text = "HD\nFirst headline\nPD 01 January 2022\nHD\nSecond headline\nPD 02 January 2022";
        let chunks = splitter().split(text);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0], "First headline\nPD 01 January 2022");
        assert_eq!(chunks[1], "Second headline\nPD 02 January 2022");
    }

    #[test]
    fn test_marker_line_trailing_text_is_dropped() {
        // The marker line itself is consumed whole, trailing title included
        let text = "HD Title on marker line\nPD 01 January 2022";
        let chunks = splitter().split(text);
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0], "PD 01 January 2022");
    }

    #[test]
    fn test_adjacent_markers_yield_empty_chunk() {
        let text = "HD\nHD\nOnly the second record has lines";
        let chunks = splitter().split(text);
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0], "");
        assert_eq!(chunks[1], "Only the second record has lines");
    }

    #[test]
    fn test_split_is_restartable() {
        let text = "HD\na\nHD\nb";
        let s = splitter();
        assert_eq!(s.split(text), s.split(text));
    }

    #[test]
    fn test_custom_marker() {
        let mut config = ParserConfig::default();
        config.headline_marker = "##".to_string();
        let s = RecordSplitter::new(&config);
        let chunks = s.split("##\nrecord one\n##\nrecord two");
        assert_eq!(chunks, vec!["record one", "record two"]);
    }
}
