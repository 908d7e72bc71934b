//! Shared request and response types for REST API handlers.
//!
//! Required fields are modeled as `Option` and checked by the handlers so a
//! missing field produces a 400 naming the field rather than a bare
//! deserialization failure.

use serde::{Deserialize, Serialize};

use crate::domain::{PaymentRequest, UpiIndexEntry, UserView};

// ============================================================================
// Account types
// ============================================================================

/// Request body for POST /api/signup.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignupRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub email: Option<String>,
}

/// Request body for POST /api/login.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Request body for POST /api/register-wallet.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterWalletRequest {
    pub eth_address: Option<String>,
    pub signature: Option<String>,
    pub username: Option<String>,
}

/// Request body for POST /api/login-wallet.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WalletLoginRequest {
    pub eth_address: Option<String>,
    pub signature: Option<String>,
}

/// Request body for POST /api/update-wallet.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateWalletRequest {
    pub eth_address: Option<String>,
    pub username: Option<String>,
}

/// `{message, user}` success envelope.
#[derive(Debug, Serialize)]
pub struct UserEnvelope {
    pub message: String,
    pub user: UserView,
}

// ============================================================================
// Payment-request types
// ============================================================================

/// Request body for POST /api/payment-request.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    pub upi_id: Option<String>,
    pub amount: Option<f64>,
    pub payee_name: Option<String>,
    pub note: Option<String>,
    pub contract_request_id: Option<String>,
    pub wallet_address: Option<String>,
    pub dai_amount: Option<f64>,
    pub eth_fee: Option<f64>,
}

/// `{message, paymentRequest}` success envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequestEnvelope {
    pub message: String,
    pub payment_request: PaymentRequest,
}

/// `{message, paymentRequests}` list envelope.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequestListEnvelope {
    pub message: String,
    pub payment_requests: Vec<PaymentRequest>,
}

/// Trimmed UPI lookup response: `{upiId, payeeName, note}`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpiDetailsResponse {
    pub upi_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payee_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl From<UpiIndexEntry> for UpiDetailsResponse {
    fn from(entry: UpiIndexEntry) -> Self {
        Self {
            upi_id: entry.upi_id,
            payee_name: entry.payee_name,
            note: entry.note,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_accepts_camel_case_body() {
        let body: CreatePaymentRequest = serde_json::from_value(serde_json::json!({
            "upiId": "merchant@upi",
            "amount": 10,
            "contractRequestId": "0xfeed",
            "daiAmount": 0.12,
            "ethFee": 0.0003
        }))
        .unwrap();

        assert_eq!(body.upi_id.as_deref(), Some("merchant@upi"));
        assert_eq!(body.amount, Some(10.0));
        assert_eq!(body.contract_request_id.as_deref(), Some("0xfeed"));
        assert_eq!(body.dai_amount, Some(0.12));
    }

    #[test]
    fn create_request_rejects_string_amount() {
        let result = serde_json::from_value::<CreatePaymentRequest>(serde_json::json!({
            "upiId": "merchant@upi",
            "amount": "10"
        }));
        assert!(result.is_err());
    }

    #[test]
    fn upi_details_response_shape() {
        let entry = UpiIndexEntry {
            contract_request_id: "0xfeed".to_string(),
            upi_id: "merchant@upi".to_string(),
            payee_name: Some("Merchant".to_string()),
            note: None,
            created_at: chrono::Utc::now(),
        };

        let json = serde_json::to_value(UpiDetailsResponse::from(entry)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"upiId": "merchant@upi", "payeeName": "Merchant"})
        );
    }
}
