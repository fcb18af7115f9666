use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use std::str::FromStr;

use crate::error::{ExpenseError, Result};

/// Fixed currency recorded against every expense.
pub const CURRENCY: &str = "AUD";

/// Largest accepted amount: 999,999,999,999.99.
pub const MAX_AMOUNT_CENTS: i64 = 99_999_999_999_999;

/// Parse a decimal amount like `12.50` into whole cents.
///
/// The value is scaled by 100 and rounded half away from zero, so `0.005`
/// becomes 1 cent. Scientific notation (`1e2`) is accepted. Anything that
/// rounds to zero or below is rejected, as is anything above
/// [`MAX_AMOUNT_CENTS`].
pub fn parse_amount(input: &str) -> Result<i64> {
    let invalid = || ExpenseError::InvalidAmount(input.to_string());

    let amount = parse_decimal(input.trim()).ok_or_else(invalid)?;

    let cents = amount
        .checked_mul(Decimal::ONE_HUNDRED)
        .ok_or_else(invalid)?
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .ok_or_else(invalid)?;

    if cents <= 0 {
        return Err(ExpenseError::NonPositiveAmount(input.to_string()));
    }
    if cents > MAX_AMOUNT_CENTS {
        return Err(invalid());
    }
    Ok(cents)
}

/// Plain or scientific decimal numeral. Exponents are applied one power of
/// ten at a time so tiny values shrink towards zero instead of failing.
fn parse_decimal(s: &str) -> Option<Decimal> {
    if let Ok(d) = Decimal::from_str(s) {
        return Some(d);
    }
    let (mantissa, exponent) = s.split_once(['e', 'E'])?;
    let mut value = Decimal::from_str(mantissa).ok()?;
    let exponent: i64 = exponent.parse().ok()?;

    for _ in 0..exponent.unsigned_abs() {
        if value.is_zero() {
            break;
        }
        value = if exponent < 0 {
            value.checked_div(Decimal::TEN)?
        } else {
            value.checked_mul(Decimal::TEN)?
        };
    }
    Some(value)
}

/// Render cents as a plain two-decimal amount, e.g. `1550` → `"15.50"`.
pub fn format_cents(cents: i64) -> String {
    format!("{:.2}", Decimal::new(cents, 2))
}
