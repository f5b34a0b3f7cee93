//! Property-based tests for amount arithmetic and rendering.
//!
//! - Rounding idempotence and two-decimal invariant
//! - Identity elements and commutativity of arithmetic
//! - Ordering/equality exclusivity
//! - Display and serialization determinism

use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::amount::Amount;
use crate::currency::CurrencyCode;
use crate::display::Locale;

/// Strategy to generate rounded magnitudes (-10,000.00 to 10,000.00).
fn any_magnitude() -> impl Strategy<Value = Decimal> {
    (-1_000_000i64..=1_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy to generate EUR amounts.
fn eur_amount() -> impl Strategy<Value = Amount> {
    any_magnitude().prop_map(|magnitude| Amount::new(magnitude, CurrencyCode::EUR))
}

/// Strategy to generate unrounded decimals with six fraction digits.
fn unrounded() -> impl Strategy<Value = Decimal> {
    (-1_000_000_000i64..=1_000_000_000i64).prop_map(|units| Decimal::new(units, 6))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // =========================================================================
    // Rounding invariants
    // =========================================================================

    /// *For any* input value, the constructed magnitude SHALL carry exactly
    /// two decimal places.
    #[test]
    fn prop_construction_rounds_to_two_decimals(value in unrounded()) {
        let amount = Amount::new(value, CurrencyCode::EUR);
        prop_assert_eq!(amount.magnitude().scale(), 2);
    }

    /// *For any* amount, re-constructing from its own magnitude SHALL be
    /// the identity.
    #[test]
    fn prop_rounding_is_idempotent(amount in eur_amount()) {
        let again = Amount::new(amount.magnitude(), amount.currency());
        prop_assert_eq!(again, amount);
    }

    // =========================================================================
    // Arithmetic laws
    // =========================================================================

    /// *For any* amount, adding zero SHALL return the amount unchanged.
    #[test]
    fn prop_add_zero_is_identity(amount in eur_amount()) {
        let zero = Amount::zero(CurrencyCode::EUR);
        prop_assert_eq!(amount + zero, amount);
    }

    /// *For any* amount, subtracting itself SHALL return zero.
    #[test]
    fn prop_sub_self_is_zero(amount in eur_amount()) {
        prop_assert_eq!(amount - amount, Amount::zero(CurrencyCode::EUR));
    }

    /// *For any* two amounts, addition SHALL be commutative.
    #[test]
    fn prop_add_commutative(a in eur_amount(), b in eur_amount()) {
        prop_assert_eq!(a + b, b + a);
    }

    /// *For any* three amounts, addition SHALL be associative: sums of
    /// two-decimal values never re-round.
    #[test]
    fn prop_add_associative(a in eur_amount(), b in eur_amount(), c in eur_amount()) {
        prop_assert_eq!((a + b) + c, a + (b + c));
    }

    /// *For any* two amounts, multiplication SHALL be commutative.
    #[test]
    fn prop_mul_commutative(a in eur_amount(), b in eur_amount()) {
        prop_assert_eq!(a * b, b * a);
    }

    /// *For any* amount, the absolute value SHALL not be negative.
    #[test]
    fn prop_abs_never_negative(amount in eur_amount()) {
        prop_assert!(!amount.abs().is_negative());
    }

    // =========================================================================
    // Ordering
    // =========================================================================

    /// *For any* two same-currency amounts, exactly one of `<`, `==`, `>`
    /// SHALL hold.
    #[test]
    fn prop_lt_eq_mutually_exclusive(a in eur_amount(), b in eur_amount()) {
        let less = a < b;
        let equal = a == b;
        let greater = a > b;
        prop_assert_eq!(u8::from(less) + u8::from(equal) + u8::from(greater), 1);
    }

    // =========================================================================
    // Display and serialization
    // =========================================================================

    /// *For any* amount, formatting twice SHALL produce identical text.
    #[test]
    fn prop_display_is_deterministic(amount in eur_amount()) {
        prop_assert_eq!(amount.display_in(Locale::ItIt), amount.display_in(Locale::ItIt));
    }

    /// *For any* amount, the rendered text SHALL end with two fraction
    /// digits and the currency symbol.
    #[test]
    fn prop_display_has_two_fraction_digits(amount in eur_amount()) {
        let text = amount.display_in(Locale::ItIt);
        let (_, tail) = text.rsplit_once(',').unwrap();
        prop_assert!(tail.ends_with(" €"));
        prop_assert_eq!(tail.len(), "00 €".len());
    }

    /// *For any* amount, encoding and decoding SHALL preserve the magnitude
    /// while the currency resets to the default.
    #[test]
    fn prop_serde_round_trip_preserves_magnitude(amount in eur_amount()) {
        let json = serde_json::to_string(&amount).unwrap();
        let decoded: Amount = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(decoded.magnitude(), amount.magnitude());
        prop_assert_eq!(decoded.currency(), CurrencyCode::EUR);
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;
    use rust_decimal_macros::dec;

    /// Specific example: half cents round away from zero in both directions.
    #[test]
    fn test_half_cent_rounds_away_from_zero() {
        assert_eq!(
            Amount::new(dec!(2.675), CurrencyCode::EUR).magnitude(),
            dec!(2.68)
        );
        assert_eq!(
            Amount::new(dec!(-2.675), CurrencyCode::EUR).magnitude(),
            dec!(-2.68)
        );
        assert_eq!(
            Amount::new(dec!(2.665), CurrencyCode::EUR).magnitude(),
            dec!(2.67)
        );
    }

    /// Specific example: multiplication associativity breaks on a rounding
    /// boundary because each product re-rounds.
    #[test]
    fn test_mul_associativity_rounding_boundary() {
        let base = Amount::new(dec!(10.00), CurrencyCode::EUR);
        let rate = Amount::new(dec!(0.07), CurrencyCode::EUR);

        // (10.00 * 0.07) * 0.07 -> 0.70 * 0.07 = 0.049 -> 0.05
        let left = (base * rate) * rate;
        assert_eq!(left.magnitude(), dec!(0.05));

        // 10.00 * (0.07 * 0.07) -> 10.00 * 0.00 = 0.00
        let right = base * (rate * rate);
        assert_eq!(right.magnitude(), dec!(0.00));

        assert_ne!(left, right);
    }

    /// Specific example: equal amounts are not ordered before each other.
    #[test]
    fn test_equal_amounts_are_not_less() {
        let a = Amount::new(dec!(42.00), CurrencyCode::EUR);
        let b = Amount::from_minor_units(4_200, CurrencyCode::EUR);
        assert_eq!(a, b);
        assert!(!(a < b));
        assert!(!(b < a));
    }
}
