//! Currency-aware monetary amounts for Importo.
//!
//! This crate contains pure value types with ZERO UI or I/O dependencies.
//! All amount construction, arithmetic, and rendering logic lives here.
//!
//! # Modules
//!
//! - `amount` - The `Amount` value type: rounding, arithmetic, serialization
//! - `currency` - Currency code token and symbol lookup
//! - `display` - Locale presets, currency formatting, styled text spans
//! - `error` - Error types for construction and parsing

pub mod amount;
pub mod currency;
pub mod display;
pub mod error;

#[cfg(test)]
mod amount_props;

pub use amount::Amount;
pub use currency::CurrencyCode;
pub use display::{
    describe, describe_in, format_amount, styled, styled_in, styled_uniform, FontWeight,
    FormatError, Locale, StyledText, TextColor, TextSpan, TextStyle, INVALID_AMOUNT_TEXT,
    MISSING_AMOUNT_TEXT,
};
pub use error::AmountError;
