use axum::{extract::State, http::StatusCode, Json};
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

/// Liveness body: which deployment answered and which build it runs
#[derive(Serialize)]
pub struct LivenessReport {
    status: &'static str,
    service: String,
    version: &'static str,
}

pub async fn health_check(State(state): State<AppState>) -> Json<LivenessReport> {
    Json(LivenessReport {
        status: "healthy",
        service: state.app_name.to_string(),
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Ready once the database answers.
pub async fn readiness_check(State(state): State<AppState>) -> Result<StatusCode, ApiError> {
    state
        .users
        .ping()
        .await
        .map_err(|e| ApiError::Unavailable(e.to_string()))?;
    Ok(StatusCode::OK)
}
