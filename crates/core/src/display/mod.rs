//! Locale-aware rendering of amounts.
//!
//! This module implements the display pipeline:
//! - Locale presets for separators
//! - Pure currency-text formatting (grouping, truncation, symbol)
//! - Styled text spans for differentiated integer/fraction rendering
//! - Fallback text for invalid and missing amounts
//!
//! CRITICAL: formatting is a pure function of (value, currency, locale).
//! There is no shared formatter state, so concurrent rendering needs no
//! synchronization.

pub mod formatter;
pub mod locale;
pub mod text;

pub use formatter::{format_amount, FormatError};
pub use locale::Locale;
pub use text::{
    describe, describe_in, styled, styled_in, styled_uniform, FontWeight, StyledText, TextColor,
    TextSpan, TextStyle,
};

/// Fallback text for magnitudes that cannot be formatted.
pub const INVALID_AMOUNT_TEXT: &str = "Importo non valido";

/// Fallback text for missing amounts.
pub const MISSING_AMOUNT_TEXT: &str = "Informazione non disponibile";
