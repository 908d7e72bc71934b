//! PostgreSQL-backed payment-request store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPool;
use uuid::Uuid;

use crate::domain::{PaymentRequest, RequestStatus};
use crate::infra::{PaymentRequestStore, Result, StoreError};

/// Database row for payment requests
#[derive(sqlx::FromRow)]
struct PaymentRequestRow {
    id: Uuid,
    upi_id: String,
    amount: f64,
    payee_name: Option<String>,
    note: Option<String>,
    contract_request_id: Option<String>,
    wallet_address: Option<String>,
    dai_amount: Option<f64>,
    eth_fee: Option<f64>,
    requester_id: String,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<PaymentRequestRow> for PaymentRequest {
    type Error = StoreError;

    fn try_from(row: PaymentRequestRow) -> Result<Self> {
        let status: RequestStatus = row.status.parse().map_err(StoreError::Internal)?;

        Ok(Self {
            id: row.id,
            upi_id: row.upi_id,
            amount: row.amount,
            payee_name: row.payee_name,
            note: row.note,
            contract_request_id: row.contract_request_id,
            wallet_address: row.wallet_address,
            dai_amount: row.dai_amount,
            eth_fee: row.eth_fee,
            requester_id: row.requester_id,
            status,
            created_at: row.created_at,
        })
    }
}

/// PostgreSQL-backed `payment_requests` collection.
pub struct PgPaymentRequestStore {
    pool: PgPool,
}

impl PgPaymentRequestStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl PaymentRequestStore for PgPaymentRequestStore {
    async fn insert(&self, request: &PaymentRequest) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO payment_requests (
                id, upi_id, amount, payee_name, note,
                contract_request_id, wallet_address, dai_amount, eth_fee,
                requester_id, status, created_at
            ) VALUES (
                $1, $2, $3, $4, $5,
                $6, $7, $8, $9,
                $10, $11, $12
            )
            "#,
        )
        .bind(request.id)
        .bind(&request.upi_id)
        .bind(request.amount)
        .bind(&request.payee_name)
        .bind(&request.note)
        .bind(&request.contract_request_id)
        .bind(&request.wallet_address)
        .bind(request.dai_amount)
        .bind(request.eth_fee)
        .bind(&request.requester_id)
        .bind(request.status.to_string())
        .bind(request.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn list_pending(&self) -> Result<Vec<PaymentRequest>> {
        let rows: Vec<PaymentRequestRow> = sqlx::query_as(
            r#"
            SELECT * FROM payment_requests
            WHERE status = $1
            ORDER BY created_at DESC
            "#,
        )
        .bind(RequestStatus::Pending.to_string())
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(PaymentRequest::try_from).collect()
    }

    async fn find_by_contract(
        &self,
        contract_request_id: &str,
    ) -> Result<Option<PaymentRequest>> {
        let row: Option<PaymentRequestRow> = sqlx::query_as(
            r#"
            SELECT * FROM payment_requests
            WHERE contract_request_id = $1
            ORDER BY created_at DESC
            LIMIT 1
            "#,
        )
        .bind(contract_request_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(PaymentRequest::try_from).transpose()
    }
}
