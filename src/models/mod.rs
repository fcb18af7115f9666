mod expense;
mod money;

pub use expense::{utc_timestamp, Expense, NewExpense};
pub use money::{format_cents, parse_amount, CURRENCY};
