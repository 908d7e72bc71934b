//! Payment requests and the denormalized UPI lookup entry derived from them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Requester recorded when no wallet address accompanies a payment request.
pub const ANONYMOUS_REQUESTER: &str = "anonymous";

/// Status of a payment request.
///
/// `Pending` is the only status this service ever assigns; settlement happens
/// outside it and no endpoint transitions the field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestStatus {
    #[default]
    Pending,
}

impl RequestStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
        }
    }
}

impl std::fmt::Display for RequestStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RequestStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(Self::Pending),
            other => Err(format!("unknown request status: {other}")),
        }
    }
}

/// A payment request as stored in `payment_requests`.
///
/// Created once and never mutated; the optional contract-request identifier
/// links it to an on-chain request and drives the [`UpiIndexEntry`] upsert.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    pub id: Uuid,
    pub upi_id: String,
    pub amount: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payee_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contract_request_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_address: Option<String>,
    /// Derived currency amount quoted at creation time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dai_amount: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eth_fee: Option<f64>,
    /// Wallet address of the requester, or [`ANONYMOUS_REQUESTER`].
    pub requester_id: String,
    pub status: RequestStatus,
    pub created_at: DateTime<Utc>,
}

impl PaymentRequest {
    /// Requester recorded for a new request: the wallet address when one was
    /// supplied, `"anonymous"` otherwise.
    pub fn requester_for(wallet_address: Option<&str>) -> String {
        wallet_address
            .map(str::trim)
            .filter(|w| !w.is_empty())
            .map(str::to_owned)
            .unwrap_or_else(|| ANONYMOUS_REQUESTER.to_string())
    }
}

/// Denormalized UPI details keyed by contract-request identifier.
///
/// At most one entry exists per identifier; a later payment request reusing
/// the identifier fully replaces the entry's fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpiIndexEntry {
    pub contract_request_id: String,
    pub upi_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payee_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl UpiIndexEntry {
    /// Project the index entry out of a freshly inserted payment request.
    ///
    /// Returns `None` when the request carries no usable contract identifier,
    /// in which case nothing is written to the index.
    pub fn from_request(request: &PaymentRequest) -> Option<Self> {
        let contract_request_id = request
            .contract_request_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty())?;

        Some(Self {
            contract_request_id: contract_request_id.to_string(),
            upi_id: request.upi_id.clone(),
            payee_name: request.payee_name.clone(),
            note: request.note.clone(),
            created_at: request.created_at,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_request(contract_request_id: Option<&str>) -> PaymentRequest {
        PaymentRequest {
            id: Uuid::new_v4(),
            upi_id: "merchant@upi".to_string(),
            amount: 250.0,
            payee_name: Some("Merchant".to_string()),
            note: Some("invoice 42".to_string()),
            contract_request_id: contract_request_id.map(str::to_owned),
            wallet_address: None,
            dai_amount: None,
            eth_fee: None,
            requester_id: ANONYMOUS_REQUESTER.to_string(),
            status: RequestStatus::Pending,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn requester_falls_back_to_anonymous() {
        assert_eq!(PaymentRequest::requester_for(None), "anonymous");
        assert_eq!(PaymentRequest::requester_for(Some("")), "anonymous");
        assert_eq!(PaymentRequest::requester_for(Some("   ")), "anonymous");
        assert_eq!(
            PaymentRequest::requester_for(Some("0xabc")),
            "0xabc".to_string()
        );
    }

    #[test]
    fn status_round_trips_through_text() {
        assert_eq!(RequestStatus::Pending.to_string(), "pending");
        assert_eq!("pending".parse::<RequestStatus>(), Ok(RequestStatus::Pending));
        assert!("settled".parse::<RequestStatus>().is_err());
    }

    #[test]
    fn index_entry_copies_upi_details() {
        let request = sample_request(Some("0xfeed"));
        let entry = UpiIndexEntry::from_request(&request).unwrap();

        assert_eq!(entry.contract_request_id, "0xfeed");
        assert_eq!(entry.upi_id, request.upi_id);
        assert_eq!(entry.payee_name, request.payee_name);
        assert_eq!(entry.note, request.note);
        assert_eq!(entry.created_at, request.created_at);
    }

    #[test]
    fn index_entry_requires_contract_identifier() {
        assert!(UpiIndexEntry::from_request(&sample_request(None)).is_none());
        assert!(UpiIndexEntry::from_request(&sample_request(Some(""))).is_none());
        assert!(UpiIndexEntry::from_request(&sample_request(Some("  "))).is_none());
    }

    #[test]
    fn request_serializes_with_camel_case_names() {
        let request = sample_request(Some("0xfeed"));
        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(json["upiId"], "merchant@upi");
        assert_eq!(json["contractRequestId"], "0xfeed");
        assert_eq!(json["status"], "pending");
        assert!(json.get("upi_id").is_none());
    }
}
