//! CLI command handlers
//!
//! Bridges clap argument parsing with the ingestion, reporting and display
//! layers.

pub mod explore;
pub mod report;
pub mod sample;

pub use explore::{handle_explore_command, ExploreArgs};
pub use report::{handle_report_command, OutputFormat, ReportArgs};
pub use sample::{handle_sample_command, SampleArgs};

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::{TrackerError, TrackerResult};
use crate::ingest::{read_records_from_path, SampleGenerator};
use crate::models::RawRecord;

/// Label used as the report source when sample data is generated
pub const SAMPLE_SOURCE: &str = "sample";

/// Read records from `input`, or generate a sample batch when it is absent
///
/// Returns the records together with a description of their source.
pub fn load_records(
    input: Option<&Path>,
    settings: &Settings,
) -> TrackerResult<(Vec<RawRecord>, String)> {
    match input {
        Some(path) => {
            let records = read_records_from_path(path)?;
            tracing::info!(path = %path.display(), count = records.len(), "loaded ledger");
            Ok((records, path.display().to_string()))
        }
        None => {
            eprintln!("No input file given. Using sample data.");
            tracing::info!(count = settings.sample_size, "falling back to sample data");
            let today = chrono::Local::now().date_naive();
            let records = SampleGenerator::new(settings.categories.clone(), today)
                .generate(settings.sample_size);
            Ok((records, SAMPLE_SOURCE.to_string()))
        }
    }
}

/// Open the output destination: a buffered file, or stdout
pub fn open_output(output: Option<&PathBuf>) -> TrackerResult<Box<dyn Write>> {
    match output {
        Some(path) => {
            let file = File::create(path).map_err(|e| {
                TrackerError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            Ok(Box::new(BufWriter::new(file)))
        }
        None => Ok(Box::new(std::io::stdout().lock())),
    }
}
