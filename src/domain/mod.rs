//! Core domain types for the UPI Bridge service.

mod payment_request;
mod user;
pub mod validation;

pub use payment_request::{PaymentRequest, RequestStatus, UpiIndexEntry, ANONYMOUS_REQUESTER};
pub use user::{User, UserView};
