mod cli;

use anyhow::Result;
use std::io::Write;
use std::path::Path;

use crate::Commands;

pub(crate) fn as_cli(command: Commands, db_path: &Path, out: &mut impl Write) -> Result<()> {
    match command {
        Commands::Init => cli::cli_init(db_path, out),
        Commands::Add {
            amount,
            category,
            date,
            note,
        } => cli::cli_add(db_path, &amount, &category, &date, note, out),
        Commands::List { limit } => cli::cli_list(db_path, limit, out),
        Commands::Summary { month } => cli::cli_summary(db_path, &month, out),
    }
}
