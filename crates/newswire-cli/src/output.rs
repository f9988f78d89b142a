//! Dataset output writing.

use crate::error::Result;
use newswire_domain::LabeledRecord;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write labeled records as one JSON object per line.
pub fn write_jsonl(path: &Path, records: &[LabeledRecord]) -> Result<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    for record in records {
        serde_json::to_writer(&mut writer, record)?;
        writer.write_all(b"\n")?;
    }

    writer.flush()?;
    Ok(())
}
