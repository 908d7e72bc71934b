//! UPI Bridge Library
//!
//! REST API backing a crypto-payment-request application: password and
//! wallet-signature authentication, payment-request creation and listing,
//! and a denormalized index mapping smart-contract request identifiers to
//! UPI payment details.
//!
//! ## Modules
//!
//! - [`domain`] - Core domain types (users, payment requests, UPI index)
//! - [`infra`] - Store traits and PostgreSQL implementations
//! - [`api`] - REST API routes and handlers
//! - [`server`] - Configuration and HTTP bootstrap

pub mod api;
pub mod domain;
pub mod infra;
pub mod migrations;
pub mod server;

// Re-export commonly used types
pub use domain::{PaymentRequest, RequestStatus, UpiIndexEntry, User, UserView};
pub use infra::{PaymentRequestStore, Result, StoreError, UpiIndexStore, UserStore};
