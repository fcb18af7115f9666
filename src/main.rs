mod db;
mod error;
mod models;
mod run;
mod validate;


use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use crate::error::ExpenseError;

#[derive(Parser)]
#[command(
    name = "expense-tracker",
    version,
    about = "Personal expense tracker (CLI + SQLite)"
)]
struct Cli {
    /// SQLite database file
    #[arg(
        long,
        global = true,
        env = "EXPENSE_TRACKER_DB",
        default_value = "expenses.db"
    )]
    db: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Initialize the database
    Init,

    /// Add a new expense
    Add {
        /// Amount like 12.50
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
        /// Category like food, transport or Rent
        #[arg(long)]
        category: String,
        /// Date YYYY-MM-DD
        #[arg(long)]
        date: String,
        /// Optional note
        #[arg(long)]
        note: Option<String>,
    },

    /// List recent expenses
    List {
        /// Number of expenses to show
        #[arg(long, default_value_t = 20, allow_negative_numbers = true)]
        limit: i64,
    },

    /// Monthly summary by category
    Summary {
        /// Month YYYY-MM
        #[arg(long)]
        month: String,
    },
}

fn main() -> ExitCode {
    init_tracing();
    let cli = Cli::parse();

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match run::as_cli(cli.command, &cli.db, &mut out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err, &mut out),
    }
}

/// Input and precondition failures are printed to stdout and exit with 2.
/// Anything else is fatal: stderr and exit 1.
fn report(err: &anyhow::Error, out: &mut impl Write) -> ExitCode {
    match err.downcast_ref::<ExpenseError>() {
        Some(e) if e.is_user_error() => {
            info!(error = %e, "command rejected");
            // Nothing useful left to do if stdout itself is gone.
            let _ = writeln!(out, "Error: {e}");
            ExitCode::from(e.exit_code())
        }
        Some(e) => {
            debug!(error = ?e, "storage failure");
            eprintln!("Error: {e}");
            ExitCode::from(e.exit_code())
        }
        None => {
            debug!(error = ?err, "command failed");
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("expense_tracker=warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
