use anyhow::{Context, Result};
use std::io::Write;
use std::path::Path;
use tracing::info;

use crate::db::Database;
use crate::models::{format_cents, parse_amount, NewExpense, CURRENCY};
use crate::validate::{validate_category, validate_date, validate_month};

pub(crate) fn cli_init(db_path: &Path, out: &mut impl Write) -> Result<()> {
    let db = Database::init(db_path)?;
    let resolved = std::env::current_dir()
        .context("Failed to resolve current directory")?
        .join(db.path());
    db.close()?;

    writeln!(out, "Database initialized at {}", resolved.display())?;
    info!(path = %resolved.display(), "database initialized");
    Ok(())
}

pub(crate) fn cli_add(
    db_path: &Path,
    amount: &str,
    category: &str,
    date: &str,
    note: Option<String>,
    out: &mut impl Write,
) -> Result<()> {
    let mut db = Database::open(db_path)?;

    let amount_cents = parse_amount(amount)?;
    validate_date(date)?;
    validate_category(category)?;

    let expense = NewExpense::new(amount_cents, category.to_string(), date.to_string(), note);
    let id = db.insert_expense(&expense)?;
    db.close()?;

    writeln!(out, "Added: {amount} {CURRENCY} {category} {date}")?;
    info!(id, amount_cents, category, date, "expense added");
    Ok(())
}

pub(crate) fn cli_list(db_path: &Path, limit: i64, out: &mut impl Write) -> Result<()> {
    let db = Database::open(db_path)?;
    let expenses = db.list_recent(limit)?;
    db.close()?;

    if expenses.is_empty() {
        writeln!(out, "There are no expenses yet")?;
        return Ok(());
    }

    writeln!(
        out,
        "{:<4} {:<10} {:<12} {:>10}  Note",
        "ID", "Date", "Category", "Amount"
    )?;
    for e in &expenses {
        writeln!(
            out,
            "{:<4} {:<10} {:<12} {:>10}  {}",
            e.id,
            e.date,
            e.category,
            e.display_amount(),
            e.note,
        )?;
    }
    info!(count = expenses.len(), "listed expenses");
    Ok(())
}

pub(crate) fn cli_summary(db_path: &Path, month: &str, out: &mut impl Write) -> Result<()> {
    let db = Database::open(db_path)?;
    validate_month(month)?;
    let totals = db.sum_by_category_for_month(month)?;
    db.close()?;

    if totals.is_empty() {
        writeln!(out, "No expenses for {month}")?;
        return Ok(());
    }

    writeln!(out, "Summary for {month}:")?;
    let mut total_cents: i64 = 0;
    for (category, cents) in &totals {
        total_cents = total_cents
            .checked_add(*cents)
            .with_context(|| format!("Total for {month} is too large to display"))?;
        writeln!(out, "  {category:<20} {:>12}", format_cents(*cents))?;
    }
    writeln!(out, "{}", "─".repeat(35))?;
    writeln!(out, "  {:<20} {:>12}", "Total", format_cents(total_cents))?;
    info!(month, categories = totals.len(), total_cents, "summary printed");
    Ok(())
}
