//! Money types with precise decimal arithmetic
//!
//! This module provides a type-safe representation of monetary values
//! using rust_decimal for precise calculations without floating-point errors.
//! Quotes are only ever issued in US dollars, so `Currency` is a closed
//! single-member set kept explicit for serialization and display.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Currency codes following ISO 4217
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    USD,
}

impl Currency {
    /// Returns the number of decimal places for this currency
    pub fn decimal_places(&self) -> u32 {
        match self {
            Currency::USD => 2,
        }
    }

    /// Returns the currency symbol
    pub fn symbol(&self) -> &'static str {
        match self {
            Currency::USD => "$",
        }
    }

    /// Returns the ISO 4217 code
    pub fn code(&self) -> &'static str {
        match self {
            Currency::USD => "USD",
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::USD
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Rounds to `dp` decimal places, with midpoints rounded away from zero
///
/// This is the "round half up" rule for positive magnitudes: `234.375`
/// becomes `234.38` and `-0.005` becomes `-0.01`. Banker's rounding is
/// deliberately not used here. The result always carries exactly `dp`
/// decimal places, so `4500` comes back as `4500.00`.
pub fn round_half_up(value: Decimal, dp: u32) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(dp);
    rounded
}

/// Formats an amount as US dollars, e.g. `$1,234.56`
///
/// Always two decimal places, comma-grouped thousands, `$` prefix and a
/// leading `-` for negative amounts. No currency code suffix.
pub fn format_currency(amount: Decimal) -> String {
    Money::usd(amount).format()
}

/// A monetary amount with associated currency
///
/// The amount is stored exactly as given; rounding happens only when a
/// caller asks for it via [`Money::round_to_currency`] or formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Money {
    amount: Decimal,
    currency: Currency,
}

impl Money {
    /// Creates a new Money value
    pub fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Creates a US dollar amount
    pub fn usd(amount: Decimal) -> Self {
        Self::new(amount, Currency::USD)
    }

    /// Returns the amount
    pub fn amount(&self) -> Decimal {
        self.amount
    }

    /// Returns the currency
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Returns true if the amount is zero
    pub fn is_zero(&self) -> bool {
        self.amount.is_zero()
    }

    /// Returns true if the amount is positive
    pub fn is_positive(&self) -> bool {
        self.amount.is_sign_positive() && !self.amount.is_zero()
    }

    /// Returns true if the amount is negative
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Rounds half away from zero to the currency's standard decimal places
    pub fn round_to_currency(&self) -> Self {
        Self {
            amount: round_half_up(self.amount, self.currency.decimal_places()),
            currency: self.currency,
        }
    }

    /// Renders the amount in the fixed display locale
    ///
    /// # Returns
    ///
    /// A string such as `$1,234.56`
    pub fn format(&self) -> String {
        let dp = self.currency.decimal_places();
        let rounded = round_half_up(self.amount, dp);
        let digits = format!("{:.dp$}", rounded.abs(), dp = dp as usize);

        let (whole, fraction) = match digits.split_once('.') {
            Some((whole, fraction)) => (whole, Some(fraction)),
            None => (digits.as_str(), None),
        };

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, ch) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(ch);
        }

        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };

        match fraction {
            Some(fraction) => format!("{}{}{}.{}", sign, self.currency.symbol(), grouped, fraction),
            None => format!("{}{}{}", sign, self.currency.symbol(), grouped),
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_money_creation() {
        let m = Money::new(dec!(100.50), Currency::USD);
        assert_eq!(m.amount(), dec!(100.50));
        assert_eq!(m.currency(), Currency::USD);
    }

    #[test]
    fn test_round_half_up_midpoints() {
        assert_eq!(round_half_up(dec!(234.375), 2), dec!(234.38));
        assert_eq!(round_half_up(dec!(29765.625), 2), dec!(29765.63));
        assert_eq!(round_half_up(dec!(0.125), 2), dec!(0.13));
        assert_eq!(round_half_up(dec!(-0.125), 2), dec!(-0.13));
        assert_eq!(round_half_up(dec!(0.124), 2), dec!(0.12));
    }

    #[test]
    fn test_round_half_up_pads_scale() {
        assert_eq!(round_half_up(dec!(4500), 2).to_string(), "4500.00");
        assert_eq!(round_half_up(dec!(2812.5), 2).to_string(), "2812.50");
    }

    #[test]
    fn test_round_to_currency_is_not_bankers() {
        let m = Money::usd(dec!(2.345));
        assert_eq!(m.round_to_currency().amount(), dec!(2.35));
    }

    #[test]
    fn test_format_examples() {
        assert_eq!(format_currency(dec!(1000)), "$1,000.00");
        assert_eq!(format_currency(dec!(0)), "$0.00");
        assert_eq!(format_currency(dec!(1234.56)), "$1,234.56");
    }

    #[test]
    fn test_format_grouping_and_sign() {
        assert_eq!(format_currency(dec!(999.999)), "$1,000.00");
        assert_eq!(format_currency(dec!(10000000)), "$10,000,000.00");
        assert_eq!(format_currency(dec!(357187.5)), "$357,187.50");
        assert_eq!(format_currency(dec!(-1234.5)), "-$1,234.50");
        assert_eq!(format_currency(dec!(-0.001)), "$0.00");
    }

    #[test]
    fn test_display_uses_format() {
        let m = Money::usd(dec!(29765.63));
        assert_eq!(m.to_string(), "$29,765.63");
    }
}

#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn rounding_moves_at_most_half_a_cent(minor in -1_000_000_000i64..1_000_000_000i64) {
            let value = Decimal::new(minor, 3);
            let rounded = round_half_up(value, 2);
            prop_assert!((rounded - value).abs() <= Decimal::new(5, 3));
        }

        #[test]
        fn formatted_amount_has_two_decimals(minor in 0i64..100_000_000_000i64) {
            let formatted = format_currency(Decimal::new(minor, 2));
            prop_assert!(formatted.starts_with('$'));
            let (_, cents) = formatted.split_once('.').unwrap();
            prop_assert_eq!(cents.len(), 2);
        }
    }
}
