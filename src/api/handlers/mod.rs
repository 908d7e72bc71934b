//! REST API handlers organized by domain.

pub mod auth;
pub mod health;
pub mod payment_requests;
pub mod upi_index;
pub mod wallet;

pub use auth::*;
pub use health::*;
pub use payment_requests::*;
pub use upi_index::*;
pub use wallet::*;
