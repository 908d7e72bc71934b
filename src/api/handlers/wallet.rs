//! Wallet registration, wallet login, and wallet-address update handlers.
//!
//! Signature handling is shape-only (`0x` prefix, length 132): no
//! cryptographic recovery is applied before accepting a wallet login, and
//! both paths log a warning to that effect. Whether verification was meant
//! to be cryptographic is an open product question tracked in DESIGN.md.

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use tracing::{info, instrument, warn};
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::types::{
    RegisterWalletRequest, UpdateWalletRequest, UserEnvelope, WalletLoginRequest,
};
use crate::domain::validation::{
    has_signature_shape, is_valid_eth_address, is_valid_username, normalize_eth_address,
    MIN_USERNAME_LEN,
};
use crate::domain::User;
use crate::server::AppState;

fn required<'a>(value: Option<&'a str>, field: &str) -> Result<&'a str, ApiError> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| ApiError::missing_field(field))
}

/// Validate format and lowercase-normalize an incoming wallet address.
fn checked_address(raw: &str) -> Result<String, ApiError> {
    let address = normalize_eth_address(raw);
    if !is_valid_eth_address(&address) {
        return Err(ApiError::invalid_field(
            "ethAddress must be 0x followed by 40 hex characters",
        ));
    }
    Ok(address)
}

fn checked_signature(signature: &str) -> Result<(), ApiError> {
    if !has_signature_shape(signature) {
        return Err(ApiError::invalid_signature());
    }
    warn!("signature accepted on shape alone; no cryptographic verification performed");
    Ok(())
}

/// POST /api/register-wallet - Create an account bound to a wallet address.
#[instrument(skip(state, payload))]
pub async fn register_wallet(
    State(state): State<AppState>,
    payload: Result<Json<RegisterWalletRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<UserEnvelope>), ApiError> {
    let Json(req) = payload?;

    let eth_address = required(req.eth_address.as_deref(), "ethAddress")?;
    let signature = required(req.signature.as_deref(), "signature")?;
    let username = required(req.username.as_deref(), "username")?;

    if !is_valid_username(username) {
        return Err(ApiError::invalid_field(format!(
            "username must be at least {MIN_USERNAME_LEN} characters"
        )));
    }
    let eth_address = checked_address(eth_address)?;
    checked_signature(signature)?;

    let user = User {
        id: Uuid::new_v4(),
        username: username.to_string(),
        password: None,
        email: None,
        eth_address: Some(eth_address.clone()),
        created_at: Utc::now(),
        updated_at: None,
    };

    // Either UNIQUE constraint (username, eth_address) maps to a 409.
    state.users.insert(&user).await?;

    info!(username, %eth_address, "wallet registered");

    Ok((
        StatusCode::CREATED,
        Json(UserEnvelope {
            message: "Wallet registered".to_string(),
            user: user.into(),
        }),
    ))
}

/// POST /api/login-wallet - Validate a wallet address/signature pair.
pub async fn login_wallet(
    State(state): State<AppState>,
    payload: Result<Json<WalletLoginRequest>, JsonRejection>,
) -> Result<Json<UserEnvelope>, ApiError> {
    let Json(req) = payload?;

    let eth_address = required(req.eth_address.as_deref(), "ethAddress")?;
    let signature = required(req.signature.as_deref(), "signature")?;

    let eth_address = checked_address(eth_address)?;
    checked_signature(signature)?;

    let user = state
        .users
        .find_by_address(&eth_address)
        .await?
        .ok_or_else(ApiError::user_not_found)?;

    Ok(Json(UserEnvelope {
        message: "Login successful".to_string(),
        user: user.into(),
    }))
}

/// POST /api/update-wallet - Attach or replace the wallet address of an account.
#[instrument(skip(state, payload))]
pub async fn update_wallet(
    State(state): State<AppState>,
    payload: Result<Json<UpdateWalletRequest>, JsonRejection>,
) -> Result<Json<UserEnvelope>, ApiError> {
    let Json(req) = payload?;

    let eth_address = required(req.eth_address.as_deref(), "ethAddress")?;
    let username = required(req.username.as_deref(), "username")?;

    let eth_address = checked_address(eth_address)?;

    // Single UPDATE ... RETURNING: no row means 404, an address held by
    // another account trips the UNIQUE constraint and maps to 409.
    let user = state.users.update_wallet(username, &eth_address).await?;

    info!(username, %eth_address, "wallet address updated");

    Ok(Json(UserEnvelope {
        message: "Wallet address updated".to_string(),
        user: user.into(),
    }))
}
