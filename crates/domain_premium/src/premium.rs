//! Premium quote inputs and results
//!
//! `PremiumInput` is the raw, unvalidated request exactly as a form or API
//! call supplies it. `PremiumResult` is only ever built by the calculator
//! from input that passed every validator.

use core_kernel::Money;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::occupation::OccupationRating;

/// Facts supplied by the applicant
///
/// Optional numeric fields model controls the user has not filled in yet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PremiumInput {
    /// Applicant name
    pub name: String,
    /// Age at next birthday
    pub age_next_birthday: Option<i64>,
    /// Birth month as `MM/YYYY`
    pub date_of_birth: String,
    /// Registry occupation code, e.g. `"doctor"`
    #[serde(rename = "occupation")]
    pub occupation_code: String,
    /// Death benefit in dollars
    pub death_sum_insured: Option<Decimal>,
}

impl PremiumInput {
    /// Creates a fully populated input
    pub fn new(
        name: impl Into<String>,
        age_next_birthday: i64,
        date_of_birth: impl Into<String>,
        occupation_code: impl Into<String>,
        death_sum_insured: Decimal,
    ) -> Self {
        Self {
            name: name.into(),
            age_next_birthday: Some(age_next_birthday),
            date_of_birth: date_of_birth.into(),
            occupation_code: occupation_code.into(),
            death_sum_insured: Some(death_sum_insured),
        }
    }
}

/// Calculation inputs echoed back alongside a quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumBreakdown {
    /// Death sum insured used in the formula
    pub death_cover_amount: Money,
    /// Age next birthday used in the formula
    pub age: u32,
    /// Rating factor used in the formula
    pub factor: Decimal,
    /// Human-readable rendering of the calculation
    pub formula: String,
}

/// A successful premium quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PremiumResult {
    /// Monthly premium, rounded to cents
    pub monthly_premium: Money,
    /// Annual premium, rounded to cents from the unrounded monthly figure
    pub annual_premium: Money,
    pub occupation_rating: OccupationRating,
    pub occupation_factor: Decimal,
    pub details: PremiumBreakdown,
}
