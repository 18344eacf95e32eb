use axum::{
    Json,
    Router,
    routing::get,
};
use tracing::info;

use crate::models::HealthStatus;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health))
}

async fn health() -> Json<HealthStatus> {
    info!("GET /health - Health check");
    Json(HealthStatus::ok())
}
