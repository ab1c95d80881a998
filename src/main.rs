use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use budget_tracker::cli::{
    handle_explore_command, handle_report_command, handle_sample_command, ExploreArgs, ReportArgs,
    SampleArgs,
};
use budget_tracker::config::{Settings, TrackerPaths};
use budget_tracker::TrackerError;

#[derive(Parser)]
#[command(
    name = "budget-tracker",
    author = "Kaylee Beyene",
    version,
    about = "Personal finance budget tracker",
    long_about = "Reads a ledger of income and expense transactions, checks spending \
                  against per-category budgets and reports totals, budget status \
                  and monthly trends."
)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Analyse a ledger against the configured budgets
    Report(ReportArgs),

    /// Generate a synthetic ledger as CSV
    Sample(SampleArgs),

    /// List transactions, newest first
    #[command(alias = "ls")]
    Explore(ExploreArgs),

    /// Write the default settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).with_filter(filter))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let paths = TrackerPaths::new()?;
    let settings = Settings::load_or_create(&paths)?;

    match cli.command {
        Some(Commands::Report(args)) => handle_report_command(&settings, args)?,
        Some(Commands::Sample(args)) => handle_sample_command(&settings, args)?,
        Some(Commands::Explore(args)) => handle_explore_command(&settings, args)?,
        Some(Commands::Init) => {
            if paths.is_initialized() {
                println!("Already initialized at: {}", paths.base_dir().display());
            } else {
                settings.save(&paths)?;
                println!("Initialized budget-tracker at: {}", paths.base_dir().display());
            }
            println!("Edit {} to change categories and budgets.", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("Budget Tracker Configuration");
            println!("============================");
            println!("Config directory: {}", paths.base_dir().display());
            println!("Settings file:    {}", paths.settings_file().display());
            println!();
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        None => {
            println!("budget-tracker - personal finance budget tracker");
            println!();
            println!("Run 'budget-tracker --help' for usage information.");
            println!("Run 'budget-tracker report' to analyse sample data.");
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<TrackerError>() {
                Some(TrackerError::InvalidRecords(errors)) => {
                    eprintln!("Error: {} invalid records", errors.len());
                    for error in errors {
                        eprintln!("  {}", error);
                    }
                }
                _ => eprintln!("Error: {:#}", err),
            }
            ExitCode::FAILURE
        }
    }
}
