//! Premium DTOs

use domain_premium::{
    Field, Occupation, OccupationRating, PremiumInput, PremiumResult, RatingFactor,
    ValidationReport,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Quote request body; every field may be omitted
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PremiumRequest {
    pub name: Option<String>,
    pub age_next_birthday: Option<i64>,
    pub date_of_birth: Option<String>,
    pub occupation: Option<String>,
    pub death_sum_insured: Option<Decimal>,
}

impl From<PremiumRequest> for PremiumInput {
    fn from(request: PremiumRequest) -> Self {
        PremiumInput {
            name: request.name.unwrap_or_default(),
            age_next_birthday: request.age_next_birthday,
            date_of_birth: request.date_of_birth.unwrap_or_default(),
            occupation_code: request.occupation.unwrap_or_default(),
            death_sum_insured: request.death_sum_insured,
        }
    }
}

/// One failing field
#[derive(Debug, Serialize)]
pub struct FieldErrorResponse {
    pub field: Field,
    pub kind: String,
    pub message: String,
}

impl FieldErrorResponse {
    pub fn from_report(report: &ValidationReport) -> Vec<Self> {
        report
            .errors()
            .iter()
            .map(|failure| FieldErrorResponse {
                field: failure.field,
                kind: error_kind(&failure.error),
                message: failure.error.to_string(),
            })
            .collect()
    }
}

fn error_kind(error: &domain_premium::ValidationError) -> String {
    serde_json::to_value(error)
        .ok()
        .and_then(|value| value.get("kind").and_then(|kind| kind.as_str()).map(str::to_string))
        .unwrap_or_default()
}

#[derive(Debug, Serialize)]
pub struct ValidationResponse {
    pub valid: bool,
    pub errors: Vec<FieldErrorResponse>,
}

impl From<&ValidationReport> for ValidationResponse {
    fn from(report: &ValidationReport) -> Self {
        Self {
            valid: report.is_valid(),
            errors: FieldErrorResponse::from_report(report),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub monthly_premium: Decimal,
    pub annual_premium: Decimal,
    pub monthly_premium_formatted: String,
    pub annual_premium_formatted: String,
    pub occupation_rating: OccupationRating,
    pub occupation_factor: Decimal,
    pub death_cover_amount: Decimal,
    pub age: u32,
    pub formula: String,
}

impl From<PremiumResult> for QuoteResponse {
    fn from(result: PremiumResult) -> Self {
        Self {
            monthly_premium: result.monthly_premium.amount(),
            annual_premium: result.annual_premium.amount(),
            monthly_premium_formatted: result.monthly_premium.format(),
            annual_premium_formatted: result.annual_premium.format(),
            occupation_rating: result.occupation_rating,
            occupation_factor: result.occupation_factor,
            death_cover_amount: result.details.death_cover_amount.amount(),
            age: result.details.age,
            formula: result.details.formula,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct OccupationResponse {
    pub name: &'static str,
    pub code: &'static str,
    pub rating: OccupationRating,
    pub factor: Decimal,
}

impl From<&Occupation> for OccupationResponse {
    fn from(occupation: &Occupation) -> Self {
        Self {
            name: occupation.name,
            code: occupation.code,
            rating: occupation.rating,
            factor: occupation.factor(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RatingResponse {
    pub rating: OccupationRating,
    pub factor: Decimal,
}

impl From<RatingFactor> for RatingResponse {
    fn from(entry: RatingFactor) -> Self {
        Self {
            rating: entry.rating,
            factor: entry.factor,
        }
    }
}
