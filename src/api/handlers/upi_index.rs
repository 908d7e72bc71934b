//! UPI lookup handler: resolve a contract-request identifier to UPI details.

use axum::extract::{Path, State};
use axum::Json;

use crate::api::error::ApiError;
use crate::api::handlers::payment_requests::checked_contract_id;
use crate::api::types::UpiDetailsResponse;
use crate::server::AppState;

/// GET /api/upi-id/contract/:contractRequestId
///
/// Returns the UPI details from the most recent payment request that carried
/// the identifier; earlier values are gone, fully replaced by the upsert.
pub async fn get_upi_details(
    State(state): State<AppState>,
    Path(contract_request_id): Path<String>,
) -> Result<Json<UpiDetailsResponse>, ApiError> {
    let contract_request_id = checked_contract_id(&contract_request_id)?;

    let entry = state
        .upi_index
        .find(contract_request_id)
        .await?
        .ok_or_else(ApiError::upi_mapping_not_found)?;

    Ok(Json(entry.into()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use chrono::Utc;

    use crate::api::handlers::testing::mock_state;
    use crate::domain::UpiIndexEntry;
    use crate::infra::{MockPaymentRequestStore, MockUpiIndexStore, MockUserStore};

    #[tokio::test]
    async fn lookup_rejects_blank_identifier() {
        let state = mock_state(
            MockUserStore::new(),
            MockPaymentRequestStore::new(),
            MockUpiIndexStore::new(),
        );

        let err = get_upi_details(State(state), Path("  ".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn lookup_404s_when_no_mapping_exists() {
        let mut index = MockUpiIndexStore::new();
        index.expect_find().returning(|_| Ok(None));
        let state = mock_state(MockUserStore::new(), MockPaymentRequestStore::new(), index);

        let err = get_upi_details(State(state), Path("0xfeed".to_string()))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn lookup_returns_trimmed_details() {
        let mut index = MockUpiIndexStore::new();
        index.expect_find().returning(|_| {
            Ok(Some(UpiIndexEntry {
                contract_request_id: "0xfeed".to_string(),
                upi_id: "merchant@upi".to_string(),
                payee_name: Some("Merchant".to_string()),
                note: None,
                created_at: Utc::now(),
            }))
        });
        let state = mock_state(MockUserStore::new(), MockPaymentRequestStore::new(), index);

        let Json(details) = get_upi_details(State(state), Path("0xfeed".to_string()))
            .await
            .unwrap();
        assert_eq!(details.upi_id, "merchant@upi");
        assert_eq!(details.payee_name.as_deref(), Some("Merchant"));
        assert!(details.note.is_none());
    }
}
