//! HTTP API Layer
//!
//! This crate exposes the premium quote engine over REST using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Reference data, validation and quoting endpoints
//! - **Middleware**: Request logging, tracing, CORS
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState};
//!
//! let app = create_router(AppState::new(config)?);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod middleware;
pub mod handlers;
pub mod dto;

use std::sync::Arc;

use axum::{
    Router,
    routing::{get, post},
    middleware as axum_middleware,
};
use core_kernel::{CoreError, SystemClock};
use domain_premium::PremiumCalculator;
use tower_http::trace::TraceLayer;
use tower_http::cors::{CorsLayer, Any};

use crate::config::ApiConfig;
use crate::middleware::request_log_middleware;
use crate::handlers::{health, occupations, premium};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub calculator: Arc<PremiumCalculator>,
    pub config: ApiConfig,
}

impl AppState {
    /// Builds state with a wall clock in the configured timezone
    pub fn new(config: ApiConfig) -> Result<Self, CoreError> {
        let clock = SystemClock::new(config.timezone()?);
        Ok(Self::with_calculator(PremiumCalculator::with_clock(clock), config))
    }

    /// Builds state around an existing calculator
    pub fn with_calculator(calculator: PremiumCalculator, config: ApiConfig) -> Self {
        Self {
            calculator: Arc::new(calculator),
            config,
        }
    }
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Calculator and configuration shared by the handlers
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    let public_routes = Router::new()
        .route("/health", get(health::health_check));

    let premium_routes = Router::new()
        .route("/validate", post(premium::validate_premium))
        .route("/quote", post(premium::quote_premium));

    let api_routes = Router::new()
        .route("/occupations", get(occupations::list_occupations))
        .route("/ratings", get(occupations::list_ratings))
        .nest("/premium", premium_routes)
        .layer(axum_middleware::from_fn(request_log_middleware));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
