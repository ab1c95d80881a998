//! CLI command for browsing transactions, newest first

use clap::Args;
use std::path::PathBuf;

use super::load_records;
use crate::config::Settings;
use crate::display::format_transactions;
use crate::error::{TrackerError, TrackerResult};
use crate::models::{Month, TransactionSet};

/// Arguments for `explore`
#[derive(Args, Debug)]
pub struct ExploreArgs {
    /// CSV file to browse (sample data if omitted)
    #[arg(short, long)]
    pub input: Option<PathBuf>,

    /// Only show transactions from this month (YYYY-MM)
    #[arg(short, long)]
    pub month: Option<String>,

    /// Number of transactions to show
    #[arg(short, long, default_value = "20")]
    pub limit: usize,
}

/// Handle the explore command
pub fn handle_explore_command(settings: &Settings, args: ExploreArgs) -> TrackerResult<()> {
    let (records, _source) = load_records(args.input.as_deref(), settings)?;
    let mut transactions = TransactionSet::from_records(records, &settings.record_policy())?;

    if let Some(month) = args.month.as_deref() {
        let month = Month::parse(month).map_err(|e| TrackerError::Validation(e.to_string()))?;
        transactions = transactions.for_month(month);
    }

    let newest: Vec<_> = transactions.newest_first().into_iter().take(args.limit).collect();
    println!("{}", format_transactions(&newest, &settings.currency_symbol));

    if transactions.len() > newest.len() {
        println!("Showing {} of {} transactions", newest.len(), transactions.len());
    }

    Ok(())
}
