//! Pre-built Test Fixtures
//!
//! Provides the worked quote scenarios and a pinned calendar so tests
//! do not depend on the year they happen to run in.

use chrono::NaiveDate;
use core_kernel::{FixedClock, Money};
use domain_premium::{OccupationRating, PremiumCalculator, PremiumInput};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Fixture for the pinned calendar
pub struct ClockFixtures;

impl ClockFixtures {
    /// Reference date used across the suite (June 15, 2024)
    pub fn reference_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
    }

    /// Year of the reference date
    pub fn reference_year() -> i32 {
        2024
    }

    /// A clock stopped at the reference date
    pub fn fixed() -> FixedClock {
        FixedClock::new(Self::reference_date())
    }

    /// A calculator reading the fixed clock
    pub fn calculator() -> PremiumCalculator {
        PremiumCalculator::with_clock(Self::fixed())
    }
}

/// A worked quote: input plus the figures it must produce
#[derive(Debug, Clone)]
pub struct QuoteScenario {
    pub input: PremiumInput,
    pub rating: OccupationRating,
    pub factor: Decimal,
    pub monthly: Money,
    pub annual: Money,
}

/// Fixture for premium inputs
pub struct InputFixtures;

impl InputFixtures {
    /// Doctor, age 30, $100,000 cover
    pub fn scenario_a() -> QuoteScenario {
        QuoteScenario {
            input: PremiumInput::new("John Doe", 30, "01/1994", "doctor", dec!(100000)),
            rating: OccupationRating::Professional,
            factor: dec!(1.5),
            monthly: Money::usd(dec!(375.00)),
            annual: Money::usd(dec!(4500.00)),
        }
    }

    /// Mechanic, age 45, $250,000 cover
    pub fn scenario_b() -> QuoteScenario {
        QuoteScenario {
            input: PremiumInput::new("Jane Smith", 45, "06/1979", "mechanic", dec!(250000)),
            rating: OccupationRating::HeavyManual,
            factor: dec!(31.75),
            monthly: Money::usd(dec!(29765.63)),
            annual: Money::usd(dec!(357187.50)),
        }
    }

    /// Author, age 25, $50,000 cover; monthly lands on a half cent
    pub fn scenario_c() -> QuoteScenario {
        QuoteScenario {
            input: PremiumInput::new("Bob Wilson", 25, "12/1999", "author", dec!(50000)),
            rating: OccupationRating::WhiteCollar,
            factor: dec!(2.25),
            monthly: Money::usd(dec!(234.38)),
            annual: Money::usd(dec!(2812.50)),
        }
    }

    /// All three worked scenarios
    pub fn scenarios() -> Vec<QuoteScenario> {
        vec![Self::scenario_a(), Self::scenario_b(), Self::scenario_c()]
    }

    /// A valid input using the doctor scenario
    pub fn valid() -> PremiumInput {
        Self::scenario_a().input
    }

    /// An untouched form: nothing supplied
    pub fn empty() -> PremiumInput {
        PremiumInput::default()
    }
}
