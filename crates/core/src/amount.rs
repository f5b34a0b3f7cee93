//! The `Amount` value type: rounding, arithmetic, serialization.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! `Amount` wraps `rust_decimal::Decimal` and rounds every constructed or
//! computed magnitude to two decimal places (half away from zero), so all
//! arithmetic happens on exact decimals.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Sub};

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};
use serde::de::{self, Deserialize, Deserializer};
use serde::ser::{self, Serialize, Serializer};

use crate::currency::CurrencyCode;
use crate::display::{format_amount, Locale, INVALID_AMOUNT_TEXT};
use crate::error::AmountError;

/// A monetary amount: a rounded decimal magnitude tagged with a currency.
///
/// Amounts are immutable `Copy` values; every operation yields a new amount
/// rounded to two decimal places. Arithmetic and ordering are defined only
/// between amounts of the same currency; mixing currencies is a programming
/// error and panics. Equality never panics: amounts in different currencies
/// are simply unequal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Amount {
    /// Magnitude, held at two decimal places whenever representable.
    magnitude: Decimal,
    /// Denomination of the magnitude.
    currency: CurrencyCode,
}

impl Amount {
    /// Creates an amount, rounding the value half away from zero to two
    /// decimal places.
    ///
    /// Magnitudes too large to carry two fraction digits keep a smaller
    /// scale; they stay exact for arithmetic but cannot be formatted.
    #[must_use]
    pub fn new(value: Decimal, currency: CurrencyCode) -> Self {
        let mut magnitude =
            value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        magnitude.rescale(2);
        Self {
            magnitude,
            currency,
        }
    }

    /// Creates an amount from whole currency units.
    #[must_use]
    pub fn from_int(units: i64, currency: CurrencyCode) -> Self {
        Self::new(Decimal::from(units), currency)
    }

    /// Creates an amount from minor units (cents).
    #[must_use]
    pub fn from_minor_units(minor: i64, currency: CurrencyCode) -> Self {
        Self::new(Decimal::new(minor, 2), currency)
    }

    /// Creates an amount from a float, going through the float's decimal
    /// string representation rather than its binary expansion.
    ///
    /// # Errors
    ///
    /// Fails when the value is NaN, infinite, or outside the decimal range.
    pub fn from_f64(value: f64, currency: CurrencyCode) -> Result<Self, AmountError> {
        if !value.is_finite() {
            return Err(AmountError::NotFinite(value));
        }
        let parsed = Decimal::from_f64(value).ok_or(AmountError::OutOfRange(value))?;
        Ok(Self::new(parsed, currency))
    }

    /// Creates a zero amount in the specified currency.
    #[must_use]
    pub fn zero(currency: CurrencyCode) -> Self {
        Self::new(Decimal::ZERO, currency)
    }

    /// Returns the rounded magnitude.
    #[must_use]
    pub const fn magnitude(&self) -> Decimal {
        self.magnitude
    }

    /// Returns the currency.
    #[must_use]
    pub const fn currency(&self) -> CurrencyCode {
        self.currency
    }

    /// Returns the absolute value in the same currency.
    #[must_use]
    pub fn abs(&self) -> Self {
        Self {
            magnitude: self.magnitude.abs(),
            currency: self.currency,
        }
    }

    /// Returns true if the magnitude is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.magnitude.is_zero()
    }

    /// Returns true if the magnitude is negative.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.magnitude.is_sign_negative() && !self.magnitude.is_zero()
    }

    /// Formats the amount in the given locale.
    ///
    /// Unformattable magnitudes render as the invalid-amount fallback text.
    #[must_use]
    pub fn display_in(&self, locale: Locale) -> String {
        match format_amount(self.magnitude, self.currency, locale) {
            Ok(text) => text,
            Err(_) => INVALID_AMOUNT_TEXT.to_string(),
        }
    }

    fn assert_same_currency(&self, other: &Self, op: &str) {
        assert_eq!(
            self.currency, other.currency,
            "currency mismatch in {op}: {} vs {}",
            self.currency, other.currency
        );
    }
}

/// Formats with the default locale; see [`Amount::display_in`].
impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_in(Locale::default()))
    }
}

/// Magnitude ordering within one currency.
impl PartialOrd for Amount {
    /// Compares magnitudes.
    ///
    /// # Panics
    ///
    /// Panics when the currencies differ; ordering across currencies is
    /// undefined.
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.assert_same_currency(other, "compare");
        self.magnitude.partial_cmp(&other.magnitude)
    }
}

impl Add for Amount {
    type Output = Self;

    /// Sums two amounts of the same currency.
    ///
    /// # Panics
    ///
    /// Panics when the currencies differ.
    fn add(self, rhs: Self) -> Self {
        self.assert_same_currency(&rhs, "add");
        Self::new(self.magnitude + rhs.magnitude, self.currency)
    }
}

impl Sub for Amount {
    type Output = Self;

    /// Subtracts an amount of the same currency.
    ///
    /// # Panics
    ///
    /// Panics when the currencies differ.
    fn sub(self, rhs: Self) -> Self {
        self.assert_same_currency(&rhs, "subtract");
        Self::new(self.magnitude - rhs.magnitude, self.currency)
    }
}

impl Mul for Amount {
    type Output = Self;

    /// Multiplies two amounts of the same currency, re-rounding the product.
    ///
    /// # Panics
    ///
    /// Panics when the currencies differ.
    fn mul(self, rhs: Self) -> Self {
        self.assert_same_currency(&rhs, "multiply");
        Self::new(self.magnitude * rhs.magnitude, self.currency)
    }
}

impl Div for Amount {
    type Output = Self;

    /// Divides by an amount of the same currency, re-rounding the quotient.
    ///
    /// # Panics
    ///
    /// Panics when the currencies differ or the divisor is zero.
    fn div(self, rhs: Self) -> Self {
        self.assert_same_currency(&rhs, "divide");
        Self::new(self.magnitude / rhs.magnitude, self.currency)
    }
}

impl AddAssign for Amount {
    /// Adds an amount of the same currency in place.
    ///
    /// # Panics
    ///
    /// Panics when the currencies differ.
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// Serializes the magnitude only, as a bare number.
///
/// The currency is intentionally not persisted; decoding reattaches the
/// default currency.
impl Serialize for Amount {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self.magnitude.to_f64() {
            Some(value) => serializer.serialize_f64(value),
            None => Err(ser::Error::custom("Amount magnitude exceeds double range")),
        }
    }
}

/// Decodes a bare number through the float path with the default currency.
impl<'de> Deserialize<'de> for Amount {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = f64::deserialize(deserializer)?;
        Self::from_f64(value, CurrencyCode::default()).map_err(de::Error::custom)
    }
}
