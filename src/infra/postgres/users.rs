//! PostgreSQL-backed user store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgPool;
use uuid::Uuid;

use crate::domain::User;
use crate::infra::{Result, StoreError, UserStore};

/// Database row for user accounts
#[derive(sqlx::FromRow)]
struct UserRow {
    id: Uuid,
    username: String,
    password: Option<String>,
    email: Option<String>,
    eth_address: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            username: row.username,
            password: row.password,
            email: row.email,
            eth_address: row.eth_address,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// PostgreSQL-backed `users` collection.
pub struct PgUserStore {
    pool: PgPool,
}

impl PgUserStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgUserStore {
    async fn insert(&self, user: &User) -> Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users (id, username, password, email, eth_address, created_at, updated_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            "#,
        )
        .bind(user.id)
        .bind(&user.username)
        .bind(&user.password)
        .bind(&user.email)
        .bind(&user.eth_address)
        .bind(user.created_at)
        .bind(user.updated_at)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT * FROM users WHERE username = $1
            "#,
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }

    async fn find_by_address(&self, eth_address: &str) -> Result<Option<User>> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT * FROM users WHERE eth_address = $1
            "#,
        )
        .bind(eth_address)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(User::from))
    }

    async fn update_wallet(&self, username: &str, eth_address: &str) -> Result<User> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            UPDATE users
            SET eth_address = $2, updated_at = NOW()
            WHERE username = $1
            RETURNING *
            "#,
        )
        .bind(username)
        .bind(eth_address)
        .fetch_optional(&self.pool)
        .await?;

        row.map(User::from).ok_or(StoreError::UserNotFound)
    }
}
