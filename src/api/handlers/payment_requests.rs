//! Payment-request creation and lookup handlers.
//!
//! Creation owns the index-consistency step: after the primary insert
//! succeeds, a request carrying a contract identifier is projected into the
//! `upi_index` table with replace-semantics. A failed index write surfaces
//! as a 500 — the primary row is already committed and is not rolled back.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use tracing::{error, info, instrument};
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::types::{
    CreatePaymentRequest, PaymentRequestEnvelope, PaymentRequestListEnvelope,
};
use crate::domain::validation::is_valid_amount;
use crate::domain::{PaymentRequest, RequestStatus, UpiIndexEntry};
use crate::server::AppState;

/// Longest accepted contract-request identifier path parameter.
pub(crate) const MAX_CONTRACT_ID_LEN: usize = 128;

pub(crate) fn checked_contract_id(raw: &str) -> Result<&str, ApiError> {
    let id = raw.trim();
    if id.is_empty() || id.len() > MAX_CONTRACT_ID_LEN {
        return Err(ApiError::invalid_field("invalid contractRequestId"));
    }
    Ok(id)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.map(|v| v.trim().to_string()).filter(|v| !v.is_empty())
}

/// POST /api/payment-request - Record a payment request.
#[instrument(skip(state, payload))]
pub async fn create_payment_request(
    State(state): State<AppState>,
    payload: Result<Json<CreatePaymentRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<PaymentRequestEnvelope>), ApiError> {
    let Json(req) = payload?;

    let upi_id = req
        .upi_id
        .as_deref()
        .map(str::trim)
        .filter(|u| !u.is_empty())
        .ok_or_else(|| ApiError::missing_field("upiId"))?;
    let amount = req
        .amount
        .ok_or_else(|| ApiError::missing_field("amount"))?;
    if !is_valid_amount(amount) {
        return Err(ApiError::invalid_field("amount must be a positive number"));
    }

    let wallet_address = non_empty(req.wallet_address);
    let request = PaymentRequest {
        id: Uuid::new_v4(),
        upi_id: upi_id.to_string(),
        amount,
        payee_name: non_empty(req.payee_name),
        note: non_empty(req.note),
        contract_request_id: non_empty(req.contract_request_id),
        wallet_address: wallet_address.clone(),
        dai_amount: req.dai_amount,
        eth_fee: req.eth_fee,
        requester_id: PaymentRequest::requester_for(wallet_address.as_deref()),
        status: RequestStatus::Pending,
        created_at: Utc::now(),
    };

    state.payment_requests.insert(&request).await?;

    // Index-consistency step: runs only after the primary insert committed.
    // An error here must reach the caller; the payment request row stays.
    if let Some(entry) = UpiIndexEntry::from_request(&request) {
        if let Err(e) = state.upi_index.upsert(&entry).await {
            error!(
                contract_request_id = %entry.contract_request_id,
                error = %e,
                "upi index write failed after payment request insert"
            );
            return Err(e.into());
        }
    }

    info!(request_id = %request.id, "payment request created");

    Ok((
        StatusCode::CREATED,
        Json(PaymentRequestEnvelope {
            message: "Payment request created".to_string(),
            payment_request: request,
        }),
    ))
}

/// GET /api/payment-requests - Pending requests, newest first.
pub async fn list_payment_requests(
    State(state): State<AppState>,
) -> Result<Json<PaymentRequestListEnvelope>, ApiError> {
    let requests = state.payment_requests.list_pending().await?;

    Ok(Json(PaymentRequestListEnvelope {
        message: format!("{} pending payment requests", requests.len()),
        payment_requests: requests,
    }))
}

/// GET /api/payment-request/contract/:contractRequestId
pub async fn get_payment_request_by_contract(
    State(state): State<AppState>,
    Path(contract_request_id): Path<String>,
) -> Result<Json<PaymentRequestEnvelope>, ApiError> {
    let contract_request_id = checked_contract_id(&contract_request_id)?;

    let request = state
        .payment_requests
        .find_by_contract(contract_request_id)
        .await?
        .ok_or_else(ApiError::request_not_found)?;

    Ok(Json(PaymentRequestEnvelope {
        message: "Payment request found".to_string(),
        payment_request: request,
    }))
}
