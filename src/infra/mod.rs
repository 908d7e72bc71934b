//! Infrastructure: store traits and PostgreSQL implementations.

mod error;
pub mod postgres;
mod traits;

pub use error::{Result, StoreError};
pub use postgres::{PgPaymentRequestStore, PgUpiIndexStore, PgUserStore};
pub use traits::{PaymentRequestStore, UpiIndexStore, UserStore};

#[cfg(test)]
pub use traits::{MockPaymentRequestStore, MockUpiIndexStore, MockUserStore};
