//! Premium handlers

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use domain_premium::PremiumInput;
use tracing::{info, warn};

use crate::dto::premium::{PremiumRequest, QuoteResponse, ValidationResponse};
use crate::{error::ApiError, AppState};

/// Validates every field without quoting
pub async fn validate_premium(
    State(state): State<AppState>,
    payload: Result<Json<PremiumRequest>, JsonRejection>,
) -> Result<Json<ValidationResponse>, ApiError> {
    let Json(request) = payload?;
    let input = PremiumInput::from(request);
    let report = state.calculator.validate(&input);
    Ok(Json(ValidationResponse::from(&report)))
}

/// Quotes monthly and annual premiums
pub async fn quote_premium(
    State(state): State<AppState>,
    payload: Result<Json<PremiumRequest>, JsonRejection>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let Json(request) = payload?;
    let input = PremiumInput::from(request);

    match state.calculator.quote(&input) {
        Ok(result) => {
            info!(
                occupation = %input.occupation_code,
                monthly = %result.monthly_premium.amount(),
                "Premium quote issued"
            );
            Ok(Json(QuoteResponse::from(result)))
        }
        Err(report) => {
            warn!(failures = report.len(), "Premium quote rejected: {}", report);
            Err(ApiError::from(report))
        }
    }
}
