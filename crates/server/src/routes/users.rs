//! User CRUD handlers.
//!
//! Every handler renders the uniform envelope. Expected failures map to
//! [`ApiError`] locally; the only 500 path is the panic middleware.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use common::types::Envelope;
use models::user::{CreateUser, UpdateUser, User};

use super::ServerState;
use crate::errors::ApiError;

/// Parse the `:id` path segment. A non-numeric id is a client error with
/// its own envelope, not an extractor rejection.
fn parse_id(raw: &str) -> Result<u64, ApiError> {
    raw.parse::<u64>()
        .map_err(|_| ApiError::validation("Invalid user id"))
}

pub async fn list_users(State(state): State<ServerState>) -> Json<Envelope<Vec<User>>> {
    let users = state.users.list().await;
    let count = users.len();
    Json(Envelope::with_count(users, count))
}

pub async fn create_user(
    State(state): State<ServerState>,
    body: Option<Json<CreateUser>>,
) -> Result<(StatusCode, Json<Envelope<User>>), ApiError> {
    // A missing or non-JSON body is treated as an empty input and fails
    // the presence check, matching the 400 contract.
    let input = body.map(|Json(input)| input).unwrap_or_default();
    let user = state.users.create(input).await?;
    Ok((
        StatusCode::CREATED,
        Json(Envelope::with_message(user, "User created successfully")),
    ))
}

pub async fn get_user(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<User>>, ApiError> {
    let id = parse_id(&id)?;
    let user = state
        .users
        .get(id)
        .await
        .ok_or_else(|| ApiError::not_found("User not found"))?;
    Ok(Json(Envelope::ok(user)))
}

pub async fn update_user(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    body: Option<Json<UpdateUser>>,
) -> Result<Json<Envelope<User>>, ApiError> {
    let id = parse_id(&id)?;
    // No body at all is a legal empty patch: the record is returned
    // unchanged.
    let patch = body.map(|Json(patch)| patch).unwrap_or_default();
    let user = state.users.update(id, patch).await?;
    Ok(Json(Envelope::with_message(
        user,
        "User updated successfully",
    )))
}

pub async fn delete_user(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> Result<Json<Envelope<User>>, ApiError> {
    let id = parse_id(&id)?;
    let user = state
        .users
        .remove(id)
        .await
        .ok_or_else(|| ApiError::not_found("User not found"))?;
    Ok(Json(Envelope::with_message(
        user,
        "User deleted successfully",
    )))
}
