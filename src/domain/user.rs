//! User accounts and their client-facing projection.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// A registered account, created via password signup or wallet registration.
///
/// Passwords are stored and compared verbatim. The struct is never serialized
/// to clients directly; only [`UserView`] crosses the API boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    pub id: Uuid,
    /// Unique across all accounts.
    pub username: String,
    /// Absent for wallet-registered accounts.
    pub password: Option<String>,
    pub email: Option<String>,
    /// Lowercase-normalized wallet address, unique across accounts when present.
    pub eth_address: Option<String>,
    pub created_at: DateTime<Utc>,
    /// Set when the wallet address is attached or replaced.
    pub updated_at: Option<DateTime<Utc>>,
}

/// Projection of [`User`] returned by the API: every field except the password.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserView {
    pub id: Uuid,
    pub username: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub eth_address: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<User> for UserView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            eth_address: user.eth_address,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}
