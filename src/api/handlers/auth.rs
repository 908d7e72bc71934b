//! Password signup and login handlers.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::types::{LoginRequest, SignupRequest, UserEnvelope};
use crate::domain::validation::{is_valid_password, MIN_PASSWORD_LEN};
use crate::domain::User;
use crate::server::AppState;

/// POST /api/signup - Create a password-backed account.
#[instrument(skip(state, payload))]
pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserEnvelope>), ApiError> {
    let Json(req) = payload?;

    let username = req
        .username
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or_else(|| ApiError::missing_field("username"))?;
    let password = req
        .password
        .as_deref()
        .filter(|p| !p.is_empty())
        .ok_or_else(|| ApiError::missing_field("password"))?;

    if !is_valid_password(password) {
        return Err(ApiError::invalid_field(format!(
            "password must be at least {MIN_PASSWORD_LEN} characters"
        )));
    }

    let user = User {
        id: Uuid::new_v4(),
        username: username.to_string(),
        password: Some(password.to_string()),
        email: req.email.as_deref().map(str::trim).filter(|e| !e.is_empty()).map(str::to_owned),
        eth_address: None,
        created_at: Utc::now(),
        updated_at: None,
    };

    // Duplicate usernames surface here as a 409 via the UNIQUE constraint.
    state.users.insert(&user).await?;

    info!(username, "account created");

    Ok((
        StatusCode::CREATED,
        Json(UserEnvelope {
            message: "Account created".to_string(),
            user: user.into(),
        }),
    ))
}

/// POST /api/login - Validate a username/password pair.
///
/// Sessions are stateless; credentials are re-validated on every call.
pub async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<Json<UserEnvelope>, ApiError> {
    let Json(req) = payload?;

    let username = req
        .username
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or_else(|| ApiError::missing_field("username"))?;
    let password = req
        .password
        .as_deref()
        .filter(|p| !p.is_empty())
        .ok_or_else(|| ApiError::missing_field("password"))?;

    let user = state
        .users
        .find_by_username(username)
        .await?
        .ok_or_else(ApiError::invalid_credentials)?;

    // Passwords are stored and compared verbatim; wallet-registered accounts
    // have none and can never pass this check.
    if user.password.as_deref() != Some(password) {
        return Err(ApiError::invalid_credentials());
    }

    Ok(Json(UserEnvelope {
        message: "Login successful".to_string(),
        user: user.into(),
    }))
}
