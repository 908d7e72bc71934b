//! PostgreSQL-backed store implementations.

mod payment_requests;
mod upi_index;
mod users;

pub use payment_requests::PgPaymentRequestStore;
pub use upi_index::PgUpiIndexStore;
pub use users::PgUserStore;
