//! Handlers for reading and toggling the service flag.
//!
//! `GET /get-state` is public. `POST /change-state` requires HTTP Basic
//! credentials; only the password is checked against the configured bcrypt
//! hash, the username is ignored. A successful toggle flips the flag to its
//! complement - there is no way to set it to a specific value.

use axum::{extract::State, Json};
use axum_extra::headers::{authorization::Basic, Authorization};
use axum_extra::TypedHeader;
use serde::Serialize;
use tracing::instrument;

use crate::error::AppError;
use crate::state::{AppState, Status};

#[derive(Debug, Serialize)]
pub struct StateResponse {
    pub status: Status,
}

#[derive(Debug, Serialize)]
pub struct ChangeResponse {
    pub message: &'static str,
    pub new_state: Status,
}

/// Current value of the flag. Never fails, no side effects.
#[instrument(skip_all)]
pub async fn get_state(State(state): State<AppState>) -> Json<StateResponse> {
    Json(StateResponse {
        status: state.status(),
    })
}

/// Toggle the flag after verifying the caller's password.
///
/// Missing credentials map to 401, a wrong password to 403, both via
/// [`AppError`]. The credentials themselves must never reach the log, so the
/// extractor output is excluded from the instrument span.
#[instrument(skip_all)]
pub async fn change_state(
    State(state): State<AppState>,
    credentials: Option<TypedHeader<Authorization<Basic>>>,
) -> Result<Json<ChangeResponse>, AppError> {
    let TypedHeader(Authorization(basic)) = credentials.ok_or(AppError::AuthRequired)?;
    // A header carrying an empty password is "no credentials", not a mismatch.
    if basic.password().is_empty() {
        return Err(AppError::AuthRequired);
    }
    state.verifier.verify(basic.password())?;

    let new_state = state.toggle_status();
    tracing::info!(new_state = new_state.as_str(), "State toggled");

    Ok(Json(ChangeResponse {
        message: "State changed successfully",
        new_state,
    }))
}
