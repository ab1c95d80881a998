//! CSV ingestion
//!
//! Reads and writes ledgers in the `Date,Category,Amount,Type` layout. Only
//! structural problems are reported here; field validation happens when the
//! records are turned into a [`TransactionSet`](crate::models::TransactionSet).

use csv::{ReaderBuilder, Trim, WriterBuilder};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use crate::error::{TrackerError, TrackerResult};
use crate::models::RawRecord;

/// Read raw records from CSV data with a header row
pub fn read_records<R: Read>(reader: R) -> TrackerResult<Vec<RawRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(Trim::All)
        .from_reader(reader);

    let mut records = Vec::new();
    for (idx, result) in reader.deserialize::<RawRecord>().enumerate() {
        let record = result
            .map_err(|e| TrackerError::Import(format!("row {}: {}", idx + 1, e)))?;
        records.push(record);
    }

    tracing::debug!(count = records.len(), "read CSV records");
    Ok(records)
}

/// Read raw records from a CSV file
pub fn read_records_from_path(path: &Path) -> TrackerResult<Vec<RawRecord>> {
    let file = File::open(path).map_err(|e| {
        TrackerError::Import(format!("Failed to open {}: {}", path.display(), e))
    })?;
    read_records(file)
}

/// Write raw records as CSV with a header row
pub fn write_records<W: Write>(writer: W, records: &[RawRecord]) -> TrackerResult<()> {
    let mut writer = WriterBuilder::new().has_headers(true).from_writer(writer);
    for record in records {
        writer
            .serialize(record)
            .map_err(|e| TrackerError::Export(e.to_string()))?;
    }
    writer.flush()?;
    Ok(())
}
