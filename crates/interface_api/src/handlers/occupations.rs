//! Occupation and rating reference data handlers

use axum::Json;
use domain_premium::{occupations, rating_factors};

use crate::dto::premium::{OccupationResponse, RatingResponse};

/// Lists occupations in display order
pub async fn list_occupations() -> Json<Vec<OccupationResponse>> {
    Json(occupations().iter().map(OccupationResponse::from).collect())
}

/// Lists the rating factor table
pub async fn list_ratings() -> Json<Vec<RatingResponse>> {
    Json(rating_factors().into_iter().map(RatingResponse::from).collect())
}
