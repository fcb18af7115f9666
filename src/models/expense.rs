use chrono::{SecondsFormat, Utc};

use super::money::{format_cents, CURRENCY};

/// A stored expense row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expense {
    pub id: i64,
    pub amount_cents: i64,
    pub currency: String,
    pub category: String,
    pub date: String,
    pub note: String,
    pub created_at: String,
}

impl Expense {
    pub fn display_amount(&self) -> String {
        format_cents(self.amount_cents)
    }
}

/// Validated input for a new expense. The store assigns the id, currency
/// and creation timestamp on insert.
#[derive(Debug, Clone)]
pub struct NewExpense {
    pub amount_cents: i64,
    pub category: String,
    pub date: String,
    pub note: String,
}

impl NewExpense {
    pub fn new(amount_cents: i64, category: String, date: String, note: Option<String>) -> Self {
        Self {
            amount_cents,
            category,
            date,
            note: note.unwrap_or_default(),
        }
    }

    pub fn currency(&self) -> &'static str {
        CURRENCY
    }
}

/// Current UTC time as ISO-8601 with second precision,
/// e.g. `2024-03-01T09:30:00+00:00`.
pub fn utc_timestamp() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Secs, false)
}
