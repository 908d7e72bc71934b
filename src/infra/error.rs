//! Error types for the store layer.

use thiserror::Error;

/// Errors surfaced by the persistence layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Database error
    #[error("database error: {0}")]
    Database(sqlx::Error),

    /// A store-level UNIQUE constraint rejected a write
    #[error("unique constraint violated: {constraint}")]
    UniqueViolation { constraint: String },

    /// User lookup or update matched no row
    #[error("user not found")]
    UserNotFound,

    /// Internal error
    #[error("internal error: {0}")]
    Internal(String),
}

/// Result type for store operations
pub type Result<T> = std::result::Result<T, StoreError>;

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        if let sqlx::Error::Database(ref db) = err {
            if db.is_unique_violation() {
                return StoreError::UniqueViolation {
                    constraint: db.constraint().unwrap_or("unknown").to_string(),
                };
            }
        }
        StoreError::Database(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_not_found_stays_a_database_error() {
        let err = StoreError::from(sqlx::Error::RowNotFound);
        assert!(matches!(err, StoreError::Database(_)));
    }

    #[test]
    fn display_messages_name_the_failure() {
        assert_eq!(StoreError::UserNotFound.to_string(), "user not found");
        assert_eq!(
            StoreError::UniqueViolation {
                constraint: "users_username_key".to_string()
            }
            .to_string(),
            "unique constraint violated: users_username_key"
        );
    }
}
