use chrono::{Datelike, NaiveDate};

use crate::error::{ExpenseError, Result};

/// True when `s` is ASCII digits separated by dashes at the given byte
/// offsets, e.g. `YYYY-MM-DD` is `shape_matches(s, 10, &[4, 7])`.
fn shape_matches(s: &str, len: usize, dashes: &[usize]) -> bool {
    s.len() == len
        && s.bytes().enumerate().all(|(i, b)| {
            if dashes.contains(&i) {
                b == b'-'
            } else {
                b.is_ascii_digit()
            }
        })
}

/// Accept only zero-padded `YYYY-MM-DD` strings naming a real calendar day.
pub(crate) fn validate_date(s: &str) -> Result<()> {
    if !shape_matches(s, 10, &[4, 7]) {
        return Err(ExpenseError::InvalidDate(s.to_string()));
    }
    match NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        Ok(date) if date.year() >= 1 => Ok(()),
        _ => Err(ExpenseError::InvalidDate(s.to_string())),
    }
}

/// Accept only `YYYY-MM` with a month in 01..=12.
pub(crate) fn validate_month(s: &str) -> Result<()> {
    if !shape_matches(s, 7, &[4]) {
        return Err(ExpenseError::InvalidMonth(s.to_string()));
    }
    match s[5..].parse::<u32>() {
        Ok(1..=12) => Ok(()),
        _ => Err(ExpenseError::InvalidMonth(s.to_string())),
    }
}

/// Categories are free text but must contain something other than
/// whitespace. The value itself is stored untouched.
pub(crate) fn validate_category(s: &str) -> Result<()> {
    if s.trim().is_empty() {
        return Err(ExpenseError::EmptyCategory);
    }
    Ok(())
}
