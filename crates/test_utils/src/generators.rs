//! Property-Based Test Generators
//!
//! Provides proptest strategies for premium inputs. Strategies named
//! `valid_*` only produce values every validator accepts relative to
//! [`ClockFixtures::reference_year`](crate::ClockFixtures::reference_year).

use domain_premium::{occupations, PremiumInput};
use proptest::prelude::*;
use rust_decimal::Decimal;

use crate::fixtures::ClockFixtures;

/// Strategy for names of 2 to 40 letters
pub fn valid_name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z]{2,40}"
}

/// Strategy for ages inside the accepted range
pub fn valid_age_strategy() -> impl Strategy<Value = i64> {
    1i64..=100i64
}

/// Strategy for `MM/YYYY` birth months inside the accepted window
pub fn valid_date_of_birth_strategy() -> impl Strategy<Value = String> {
    let year = ClockFixtures::reference_year();
    (1u32..=12u32, (year - 100)..=year).prop_map(|(month, year)| format!("{month:02}/{year:04}"))
}

/// Strategy for registry occupation codes
pub fn occupation_code_strategy() -> impl Strategy<Value = String> {
    proptest::sample::select(occupations().iter().map(|o| o.code).collect::<Vec<_>>())
        .prop_map(str::to_string)
}

/// Strategy for sums insured from one cent to $10,000,000
pub fn valid_sum_insured_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..=1_000_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Strategy for fully valid inputs
pub fn valid_input_strategy() -> impl Strategy<Value = PremiumInput> {
    (
        valid_name_strategy(),
        valid_age_strategy(),
        valid_date_of_birth_strategy(),
        occupation_code_strategy(),
        valid_sum_insured_strategy(),
    )
        .prop_map(|(name, age, dob, code, sum)| PremiumInput::new(name, age, dob, code, sum))
}

/// Strategy for ages outside the accepted range
pub fn invalid_age_strategy() -> impl Strategy<Value = i64> {
    prop_oneof![-1000i64..=0i64, 101i64..=1000i64]
}
