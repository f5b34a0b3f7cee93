//! Currency code token and symbol lookup.
//!
//! Currencies are open three-letter codes (ISO 4217 style) rather than a
//! closed enum: amounts carry whatever denomination the caller names, and
//! the symbol table falls back to the code itself for unknown currencies.

use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

use crate::error::AmountError;

/// A three-letter currency code (ISO 4217 style).
///
/// Stored as uppercase ASCII; construction validates shape, not membership
/// in any registry. The default currency is EUR.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct CurrencyCode([u8; 3]);

impl CurrencyCode {
    /// Euro.
    pub const EUR: Self = Self(*b"EUR");
    /// US Dollar.
    pub const USD: Self = Self(*b"USD");
    /// Pound Sterling.
    pub const GBP: Self = Self(*b"GBP");
    /// Japanese Yen.
    pub const JPY: Self = Self(*b"JPY");

    /// Creates a currency code from a three-letter string.
    ///
    /// Lowercase input is accepted and uppercased.
    pub fn new(code: &str) -> Result<Self, AmountError> {
        let bytes = code.as_bytes();
        if bytes.len() != 3 || !bytes.iter().all(u8::is_ascii_alphabetic) {
            return Err(AmountError::InvalidCurrency(code.to_string()));
        }
        let mut upper = [0u8; 3];
        for (dst, src) in upper.iter_mut().zip(bytes) {
            *dst = src.to_ascii_uppercase();
        }
        Ok(Self(upper))
    }

    /// Returns the code as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        // Bytes are validated ASCII at construction; XXX is the ISO
        // "no currency" code.
        std::str::from_utf8(&self.0).unwrap_or("XXX")
    }

    /// Returns the display symbol for this currency.
    ///
    /// Unknown currencies render as their code.
    #[must_use]
    pub fn symbol(&self) -> &str {
        match &self.0 {
            b"EUR" => "€",
            b"USD" => "$",
            b"GBP" => "£",
            b"JPY" => "¥",
            _ => self.as_str(),
        }
    }
}

impl Default for CurrencyCode {
    fn default() -> Self {
        Self::EUR
    }
}

impl std::fmt::Debug for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("CurrencyCode").field(&self.as_str()).finish()
    }
}

impl std::fmt::Display for CurrencyCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CurrencyCode {
    type Err = AmountError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl Serialize for CurrencyCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for CurrencyCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        Self::new(&code).map_err(de::Error::custom)
    }
}
