//! PostgreSQL-backed UPI index store.
//!
//! One row per contract-request identifier. Writes go through a single
//! `INSERT ... ON CONFLICT DO UPDATE` so that replacing an existing mapping
//! is atomic; no application-level locking is layered on top.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPool;

use crate::domain::UpiIndexEntry;
use crate::infra::{Result, UpiIndexStore};

/// Database row for UPI index entries
#[derive(sqlx::FromRow)]
struct UpiIndexRow {
    contract_request_id: String,
    upi_id: String,
    payee_name: Option<String>,
    note: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<UpiIndexRow> for UpiIndexEntry {
    fn from(row: UpiIndexRow) -> Self {
        Self {
            contract_request_id: row.contract_request_id,
            upi_id: row.upi_id,
            payee_name: row.payee_name,
            note: row.note,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL-backed `upi_index` collection.
pub struct PgUpiIndexStore {
    pool: PgPool,
}

impl PgUpiIndexStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UpiIndexStore for PgUpiIndexStore {
    async fn upsert(&self, entry: &UpiIndexEntry) -> Result<()> {
        // Full replace of the non-key fields, never a merge.
        sqlx::query(
            r#"
            INSERT INTO upi_index (contract_request_id, upi_id, payee_name, note, created_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (contract_request_id) DO UPDATE SET
                upi_id = EXCLUDED.upi_id,
                payee_name = EXCLUDED.payee_name,
                note = EXCLUDED.note,
                created_at = EXCLUDED.created_at
            "#,
        )
        .bind(&entry.contract_request_id)
        .bind(&entry.upi_id)
        .bind(&entry.payee_name)
        .bind(&entry.note)
        .bind(entry.created_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, contract_request_id: &str) -> Result<Option<UpiIndexEntry>> {
        let row: Option<UpiIndexRow> = sqlx::query_as(
            r#"
            SELECT * FROM upi_index WHERE contract_request_id = $1
            "#,
        )
        .bind(contract_request_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(UpiIndexEntry::from))
    }
}
