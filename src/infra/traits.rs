//! Trait definitions for the persistence seams.
//!
//! Handlers depend on these traits rather than on the PostgreSQL types
//! directly, so request logic can be exercised against mocks.

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::domain::{PaymentRequest, UpiIndexEntry, User};

use super::Result;

/// Account storage: the `users` collection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new account.
    ///
    /// Username and wallet-address uniqueness are enforced by store-level
    /// constraints; violations surface as `StoreError::UniqueViolation`.
    async fn insert(&self, user: &User) -> Result<()>;

    async fn find_by_username(&self, username: &str) -> Result<Option<User>>;

    /// Lookup by lowercase-normalized wallet address.
    async fn find_by_address(&self, eth_address: &str) -> Result<Option<User>>;

    /// Attach or replace the wallet address of the named account, returning
    /// the post-update row. `UserNotFound` when no row matches.
    async fn update_wallet(&self, username: &str, eth_address: &str) -> Result<User>;
}

/// Primary payment-request storage: the `payment_requests` collection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait PaymentRequestStore: Send + Sync {
    async fn insert(&self, request: &PaymentRequest) -> Result<()>;

    /// Pending requests, newest first.
    async fn list_pending(&self) -> Result<Vec<PaymentRequest>>;

    /// Most recent request carrying the given contract identifier.
    async fn find_by_contract(&self, contract_request_id: &str)
        -> Result<Option<PaymentRequest>>;
}

/// Secondary UPI lookup table: the `upi_index` collection.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UpiIndexStore: Send + Sync {
    /// Insert-or-fully-overwrite keyed on the contract-request identifier.
    ///
    /// The store's native upsert atomicity is the only consistency guarantee
    /// under concurrent writers of the same key; last writer wins.
    async fn upsert(&self, entry: &UpiIndexEntry) -> Result<()>;

    async fn find(&self, contract_request_id: &str) -> Result<Option<UpiIndexEntry>>;
}
