//! Unit tests for the Money module
//!
//! Tests cover money creation, predicates, half-up rounding and the
//! fixed-locale currency formatting used in quotes.

use core_kernel::{format_currency, round_half_up, Currency, Money};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

mod creation {
    use super::*;

    #[test]
    fn test_new_keeps_amount_exact() {
        let m = Money::new(dec!(100.123456789), Currency::USD);
        assert_eq!(m.amount(), dec!(100.123456789));
    }

    #[test]
    fn test_usd_shorthand() {
        let m = Money::usd(dec!(250000));
        assert_eq!(m.currency(), Currency::USD);
        assert_eq!(m.amount(), dec!(250000));
    }

    #[test]
    fn test_zero_amount_predicates() {
        let m = Money::usd(Decimal::ZERO);
        assert!(m.is_zero());
        assert!(!m.is_positive());
        assert!(!m.is_negative());
    }

    #[test]
    fn test_negative_amount_creation() {
        let m = Money::usd(dec!(-100.00));
        assert!(m.is_negative());
        assert!(!m.is_positive());
    }
}

mod currency {
    use super::*;

    #[test]
    fn test_usd_metadata() {
        assert_eq!(Currency::USD.symbol(), "$");
        assert_eq!(Currency::USD.code(), "USD");
        assert_eq!(Currency::USD.decimal_places(), 2);
        assert_eq!(Currency::default(), Currency::USD);
    }

    #[test]
    fn test_currency_serializes_as_code() {
        let json = serde_json::to_string(&Currency::USD).unwrap();
        assert_eq!(json, "\"USD\"");
    }
}

mod rounding {
    use super::*;

    #[test]
    fn test_midpoint_rounds_away_from_zero() {
        assert_eq!(round_half_up(dec!(1.005), 2), dec!(1.01));
        assert_eq!(round_half_up(dec!(1.015), 2), dec!(1.02));
        assert_eq!(round_half_up(dec!(1.025), 2), dec!(1.03));
    }

    #[test]
    fn test_below_midpoint_rounds_down() {
        assert_eq!(round_half_up(dec!(1.0049999), 2), dec!(1.00));
    }

    #[test]
    fn test_round_to_currency() {
        let m = Money::usd(dec!(234.375)).round_to_currency();
        assert_eq!(m.amount(), dec!(234.38));
    }
}

mod formatting {
    use super::*;

    #[test]
    fn test_format_whole_thousands() {
        assert_eq!(format_currency(dec!(1000)), "$1,000.00");
    }

    #[test]
    fn test_format_zero() {
        assert_eq!(format_currency(Decimal::ZERO), "$0.00");
    }

    #[test]
    fn test_format_with_cents() {
        assert_eq!(format_currency(dec!(1234.56)), "$1,234.56");
    }

    #[test]
    fn test_format_small_amounts_have_no_separator() {
        assert_eq!(format_currency(dec!(5)), "$5.00");
        assert_eq!(format_currency(dec!(375)), "$375.00");
        assert_eq!(format_currency(dec!(0.5)), "$0.50");
    }

    #[test]
    fn test_format_millions() {
        assert_eq!(format_currency(dec!(1234567.891)), "$1,234,567.89");
    }

    #[test]
    fn test_money_display_matches_format() {
        let m = Money::usd(dec!(4500));
        assert_eq!(format!("{}", m), "$4,500.00");
        assert_eq!(m.format(), format_currency(dec!(4500)));
    }
}
