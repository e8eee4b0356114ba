// ============================================================================
// Registry API - User Handlers
// File: crates/registry-api/src/handlers/users.rs
// ============================================================================
//! `/users` CRUD handlers

use axum::{
    body::Bytes,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use registry_core::domain::UserInput;

use crate::dto::{NikRequest, UserRequest};
use crate::error::ApiError;
use crate::state::AppState;

/// Create handler - POST /users
pub async fn create_user(
    State(state): State<AppState>,
    Json(payload): Json<UserRequest>,
) -> Result<(StatusCode, Json<UserRequest>), ApiError> {
    state
        .users
        .create(&UserInput::from(payload.clone()))
        .await?;

    Ok((StatusCode::CREATED, Json(payload)))
}

/// Read handler - GET /users
///
/// `nik` comes from `?nik=` or a JSON body; a non-empty body value wins.
/// Without a `nik` the whole active list is returned.
pub async fn get_users(
    State(state): State<AppState>,
    Query(query): Query<NikRequest>,
    body: Bytes,
) -> Result<Response, ApiError> {
    let mut nik = query.nik;
    if !body.is_empty() {
        let from_body: NikRequest =
            serde_json::from_slice(&body).map_err(|e| ApiError::BadRequest(e.to_string()))?;
        if !from_body.nik.is_empty() {
            nik = from_body.nik;
        }
    }

    if nik.is_empty() {
        let users = state.users.list().await?;
        return Ok(Json(users).into_response());
    }

    let user = state.users.find(&nik).await?;
    Ok(Json(user).into_response())
}

/// Update handler - PUT /users
pub async fn update_user(
    State(state): State<AppState>,
    Json(payload): Json<UserRequest>,
) -> Result<Json<UserRequest>, ApiError> {
    state
        .users
        .update(&UserInput::from(payload.clone()))
        .await?;

    Ok(Json(payload))
}

/// Delete handler - DELETE /users
pub async fn delete_user(
    State(state): State<AppState>,
    Json(payload): Json<NikRequest>,
) -> Result<Json<NikRequest>, ApiError> {
    state.users.delete(&payload.nik).await?;

    Ok(Json(payload))
}
