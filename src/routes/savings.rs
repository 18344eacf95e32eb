use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::routing::post;
use axum::{Json, Router};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::models::{SavingsRequest, SavingsResponse};
use crate::state::AppState;

/// Create the savings router
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/calculate-savings", post(calculate_savings))
}

/// POST /api/calculate-savings
/// Monthly amount needed to reach a goal within the given number of years
pub async fn calculate_savings(
    State(state): State<AppState>,
    payload: Result<Json<SavingsRequest>, JsonRejection>,
) -> Result<Json<SavingsResponse>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        warn!("Rejected savings request body: {}", rejection.body_text());
        AppError::from(rejection)
    })?;

    info!(
        "POST /api/calculate-savings - goal={} current={} years={}",
        request.goal_amount, request.current_savings, request.years_to_save
    );

    let response = state.calculator.calculate(&request)?;

    Ok(Json(response))
}
