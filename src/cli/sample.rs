//! CLI command for generating a sample ledger

use clap::Args;
use std::io::Write;
use std::path::PathBuf;

use super::open_output;
use crate::config::Settings;
use crate::error::TrackerResult;
use crate::ingest::{write_records, SampleGenerator};

/// Arguments for `sample`
#[derive(Args, Debug, Default)]
pub struct SampleArgs {
    /// Number of records to generate (defaults to the configured sample size)
    #[arg(short, long)]
    pub count: Option<usize>,

    /// Write the CSV to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Handle the sample command
pub fn handle_sample_command(settings: &Settings, args: SampleArgs) -> TrackerResult<()> {
    let count = args.count.unwrap_or(settings.sample_size);
    let today = chrono::Local::now().date_naive();
    let records = SampleGenerator::new(settings.categories.clone(), today).generate(count);

    let mut writer = open_output(args.output.as_ref())?;
    write_records(&mut writer, &records)?;
    writer.flush()?;

    if let Some(path) = &args.output {
        println!("Wrote {} sample transactions to: {}", count, path.display());
    }

    Ok(())
}
