//! Pure currency-text formatting.
//!
//! CRITICAL: Display rounding truncates toward zero and is separate from
//! the half-away-from-zero rounding applied when amounts are constructed.
//! Formatting never mutates shared state.

use rust_decimal::{Decimal, RoundingStrategy};
use thiserror::Error;

use super::locale::Locale;
use crate::currency::CurrencyCode;

/// Errors raised while rendering a magnitude as display text.
#[derive(Debug, Error)]
pub enum FormatError {
    /// The magnitude is too large to carry two fraction digits.
    #[error("Magnitude cannot be scaled to two decimals: {0}")]
    ScaleOverflow(Decimal),

    /// The decimal text did not decompose into integer and fraction parts.
    #[error("Malformed decimal representation: {0}")]
    Malformed(String),
}

/// Formats a magnitude as locale-aware currency text.
///
/// The result always carries exactly two fraction digits and groups integer
/// digits in threes; the currency symbol is suffixed after a space, and a
/// leading minus sign appears only for strictly negative values
/// (the "0.00 ¤" / "-0.00 ¤" templates).
pub fn format_amount(
    value: Decimal,
    currency: CurrencyCode,
    locale: Locale,
) -> Result<String, FormatError> {
    let mut truncated = value.round_dp_with_strategy(2, RoundingStrategy::ToZero);
    truncated.rescale(2);
    if truncated.scale() != 2 {
        return Err(FormatError::ScaleOverflow(value));
    }

    let negative = truncated.is_sign_negative() && !truncated.is_zero();
    let digits = truncated.abs().to_string();
    let (integer_digits, fraction_digits) = digits
        .split_once('.')
        .ok_or_else(|| FormatError::Malformed(digits.clone()))?;

    let mut grouped = String::with_capacity(integer_digits.len() + integer_digits.len() / 3);
    let count = integer_digits.len();
    for (i, digit) in integer_digits.chars().enumerate() {
        if i > 0 && (count - i) % 3 == 0 {
            grouped.push(locale.grouping_separator());
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    let separator = locale.decimal_separator();
    let symbol = currency.symbol();
    Ok(format!("{sign}{grouped}{separator}{fraction_digits} {symbol}"))
}
