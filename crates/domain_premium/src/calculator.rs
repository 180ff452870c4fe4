//! Premium calculator service
//!
//! Orchestrates the field validators, the occupation registry and the
//! pricing formula. `validate` and `quote` share one validation pass, so
//! "is it valid" and "why is it invalid" cannot drift apart.

use std::sync::Arc;

use core_kernel::{Clock, Money, SystemClock};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tracing::debug;

use crate::error::{Field, ValidationError};
use crate::occupation::{factor_for, lookup_by_code, Occupation};
use crate::premium::{PremiumBreakdown, PremiumInput, PremiumResult};
use crate::validation::{
    validate_age, validate_date_of_birth, validate_name, validate_occupation_code,
    validate_sum_insured, BirthMonth, ValidationReport,
};

/// Input that passed every validator, with normalized values
#[derive(Debug, Clone, PartialEq, Eq)]
struct ValidatedInput {
    age: u32,
    birth: BirthMonth,
    occupation: &'static Occupation,
    sum_insured: Money,
}

/// Service for quoting death-cover premiums
///
/// The calculator holds no mutable state; the clock is only read to find
/// the current year for date-of-birth validation. It is `Send + Sync` and
/// can be shared freely between threads.
pub struct PremiumCalculator {
    clock: Arc<dyn Clock>,
}

impl PremiumCalculator {
    /// Creates a calculator reading the current year from `clock`
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self { clock }
    }

    /// Creates a calculator from any clock value
    pub fn with_clock(clock: impl Clock + 'static) -> Self {
        Self::new(Arc::new(clock))
    }

    /// Validates every field and reports each failure
    ///
    /// This is the entry point for field-level error display. An empty
    /// report means `calculate` will succeed for the same input and clock
    /// reading.
    pub fn validate(&self, input: &PremiumInput) -> ValidationReport {
        match self.check(input) {
            Ok(_) => ValidationReport::new(),
            Err(report) => report,
        }
    }

    /// Quotes a premium, or returns every reason the input was rejected
    ///
    /// # Arguments
    ///
    /// * `input` - The applicant's facts
    ///
    /// # Returns
    ///
    /// The premium result, or a report naming each failing field
    pub fn quote(&self, input: &PremiumInput) -> Result<PremiumResult, ValidationReport> {
        match self.check(input) {
            Ok(validated) => {
                let result = Self::price(&validated);
                debug!(
                    occupation = validated.occupation.code,
                    rating = %result.occupation_rating,
                    birth = %validated.birth,
                    monthly = %result.monthly_premium.amount(),
                    annual = %result.annual_premium.amount(),
                    "Premium quoted"
                );
                Ok(result)
            }
            Err(report) => {
                debug!(failures = report.len(), "Premium input rejected");
                Err(report)
            }
        }
    }

    /// Quotes a premium, collapsing any rejection to `None`
    pub fn calculate(&self, input: &PremiumInput) -> Option<PremiumResult> {
        self.quote(input).ok()
    }

    /// Runs every validator plus the occupation lookup
    fn check(&self, input: &PremiumInput) -> Result<ValidatedInput, ValidationReport> {
        let current_year = self.clock.current_year();
        let mut report = ValidationReport::new();

        let name = report.capture(Field::Name, validate_name(&input.name));
        let age = report.capture(Field::AgeNextBirthday, validate_age(input.age_next_birthday));
        let birth = report.capture(
            Field::DateOfBirth,
            validate_date_of_birth(&input.date_of_birth, current_year),
        );
        let occupation = report.capture(
            Field::Occupation,
            validate_occupation_code(&input.occupation_code).and_then(|()| {
                lookup_by_code(&input.occupation_code).ok_or_else(|| {
                    ValidationError::UnknownOccupation {
                        code: input.occupation_code.clone(),
                    }
                })
            }),
        );
        let sum_insured = report.capture(
            Field::DeathSumInsured,
            validate_sum_insured(input.death_sum_insured),
        );

        match (name, age, birth, occupation, sum_insured) {
            (Some(()), Some(age), Some(birth), Some(occupation), Some(sum_insured)) => {
                Ok(ValidatedInput { age, birth, occupation, sum_insured })
            }
            _ => Err(report),
        }
    }

    /// Applies the pricing formula
    fn price(validated: &ValidatedInput) -> PremiumResult {
        let rating = validated.occupation.rating;
        let factor = factor_for(rating);
        let sum_insured = validated.sum_insured;

        // sum × factor × age ÷ 1000 is exactly the unrounded monthly premium times 12
        let raw_annual = sum_insured.amount() * factor * Decimal::from(validated.age) / dec!(1000);
        let raw_monthly = raw_annual / dec!(12);

        let monthly_premium = Money::usd(raw_monthly).round_to_currency();
        let annual_premium = Money::usd(raw_annual).round_to_currency();

        let formula = format!(
            "(${} × {} × {}) ÷ 1000 × 12 = ${}/year",
            sum_insured.amount().normalize(),
            factor.normalize(),
            validated.age,
            annual_premium.amount().normalize(),
        );

        PremiumResult {
            monthly_premium,
            annual_premium,
            occupation_rating: rating,
            occupation_factor: factor,
            details: PremiumBreakdown {
                death_cover_amount: sum_insured,
                age: validated.age,
                factor,
                formula,
            },
        }
    }
}

impl Default for PremiumCalculator {
    fn default() -> Self {
        Self::with_clock(SystemClock::default())
    }
}
