//! Error types for amount construction and display configuration.

use thiserror::Error;

/// Errors from building amounts or parsing display configuration.
///
/// Mismatched-currency arithmetic is a contract violation and panics
/// instead of surfacing here.
#[derive(Debug, Error)]
pub enum AmountError {
    /// Currency code is not three ASCII letters.
    #[error("Invalid currency code: {0}")]
    InvalidCurrency(String),

    /// Locale name does not match a supported preset.
    #[error("Unknown locale: {0}")]
    UnknownLocale(String),

    /// Floating-point input was NaN or infinite.
    #[error("Amount value is not finite: {0}")]
    NotFinite(f64),

    /// Floating-point input does not fit the decimal range.
    #[error("Amount value is out of range: {0}")]
    OutOfRange(f64),
}
