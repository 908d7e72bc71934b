//! Structured API error responses.
//!
//! Failures serialize as `{"error": "<message>"}`; a machine-readable code
//! travels in the `x-error-code` response header. Store failures convert via
//! [`From<StoreError>`], malformed JSON bodies via [`From<JsonRejection>`],
//! so handlers stay on `?`.

use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use crate::infra::StoreError;

/// Error codes for API responses
///
/// These codes are stable and can be used by clients for programmatic error
/// handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Validation errors (400)
    /// Request body is missing or malformed
    InvalidRequestBody,
    /// Required field is missing
    MissingRequiredField,
    /// Field value is invalid
    InvalidFieldValue,

    // Auth errors (401)
    /// Username/password pair did not match an account
    InvalidCredentials,
    /// Signature failed the shape check
    InvalidSignature,

    // Resource errors (404)
    /// User not found
    UserNotFound,
    /// Payment request not found
    RequestNotFound,
    /// No UPI mapping for the contract-request identifier
    UpiMappingNotFound,

    // Conflict errors (409)
    /// Username already registered
    UsernameTaken,
    /// Wallet address already registered
    AddressTaken,
    /// Some other unique constraint rejected the write
    DuplicateResource,

    // Infrastructure errors (500)
    /// Internal server error
    InternalError,
}

impl ErrorCode {
    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        match self {
            ErrorCode::InvalidRequestBody
            | ErrorCode::MissingRequiredField
            | ErrorCode::InvalidFieldValue => StatusCode::BAD_REQUEST,

            ErrorCode::InvalidCredentials | ErrorCode::InvalidSignature => {
                StatusCode::UNAUTHORIZED
            }

            ErrorCode::UserNotFound
            | ErrorCode::RequestNotFound
            | ErrorCode::UpiMappingNotFound => StatusCode::NOT_FOUND,

            ErrorCode::UsernameTaken
            | ErrorCode::AddressTaken
            | ErrorCode::DuplicateResource => StatusCode::CONFLICT,

            ErrorCode::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidRequestBody => "INVALID_REQUEST_BODY",
            ErrorCode::MissingRequiredField => "MISSING_REQUIRED_FIELD",
            ErrorCode::InvalidFieldValue => "INVALID_FIELD_VALUE",
            ErrorCode::InvalidCredentials => "INVALID_CREDENTIALS",
            ErrorCode::InvalidSignature => "INVALID_SIGNATURE",
            ErrorCode::UserNotFound => "USER_NOT_FOUND",
            ErrorCode::RequestNotFound => "REQUEST_NOT_FOUND",
            ErrorCode::UpiMappingNotFound => "UPI_MAPPING_NOT_FOUND",
            ErrorCode::UsernameTaken => "USERNAME_TAKEN",
            ErrorCode::AddressTaken => "ADDRESS_TAKEN",
            ErrorCode::DuplicateResource => "DUPLICATE_RESOURCE",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An API error: a status-mapped code plus the client-facing message.
#[derive(Debug, Clone)]
pub struct ApiError {
    code: ErrorCode,
    message: String,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn status(&self) -> StatusCode {
        self.code.http_status()
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn missing_field(field: &str) -> Self {
        Self::new(ErrorCode::MissingRequiredField, format!("{field} is required"))
    }

    pub fn invalid_field(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFieldValue, message)
    }

    pub fn invalid_credentials() -> Self {
        Self::new(ErrorCode::InvalidCredentials, "Invalid username or password")
    }

    pub fn invalid_signature() -> Self {
        Self::new(ErrorCode::InvalidSignature, "Invalid signature format")
    }

    pub fn user_not_found() -> Self {
        Self::new(ErrorCode::UserNotFound, "User not found")
    }

    pub fn request_not_found() -> Self {
        Self::new(ErrorCode::RequestNotFound, "Payment request not found")
    }

    pub fn upi_mapping_not_found() -> Self {
        Self::new(
            ErrorCode::UpiMappingNotFound,
            "No UPI details found for this contract request",
        )
    }

    pub fn username_taken() -> Self {
        Self::new(ErrorCode::UsernameTaken, "Username already taken")
    }

    pub fn address_taken() -> Self {
        Self::new(ErrorCode::AddressTaken, "Wallet address already registered")
    }

    /// The client-facing message is deliberately generic; detail is logged
    /// server-side at the conversion site.
    pub fn internal() -> Self {
        Self::new(ErrorCode::InternalError, "Internal server error")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code_str = self.code.as_str();
        let mut response = (status, Json(ErrorBody { error: self.message })).into_response();

        if let Ok(code_value) = axum::http::HeaderValue::from_str(code_str) {
            response.headers_mut().insert(
                axum::http::header::HeaderName::from_static("x-error-code"),
                code_value,
            );
        }

        response
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Database(e) => {
                tracing::error!(error = %e, "database operation failed");
                ApiError::internal()
            }
            StoreError::Internal(msg) => {
                tracing::error!(error = %msg, "store internal error");
                ApiError::internal()
            }
            StoreError::UniqueViolation { constraint } => match constraint.as_str() {
                "users_username_key" => ApiError::username_taken(),
                "users_eth_address_key" => ApiError::address_taken(),
                other => {
                    tracing::warn!(constraint = other, "unexpected unique violation");
                    ApiError::new(ErrorCode::DuplicateResource, "Resource already exists")
                }
            },
            StoreError::UserNotFound => ApiError::user_not_found(),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::new(
            ErrorCode::InvalidRequestBody,
            format!("Invalid request body: {}", rejection.body_text()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(
            ErrorCode::MissingRequiredField.http_status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ErrorCode::InvalidCredentials.http_status(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(ErrorCode::UserNotFound.http_status(), StatusCode::NOT_FOUND);
        assert_eq!(ErrorCode::UsernameTaken.http_status(), StatusCode::CONFLICT);
        assert_eq!(
            ErrorCode::InternalError.http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_serialization_is_flat_error_field() {
        let err = ApiError::username_taken();
        let body = serde_json::to_value(ErrorBody {
            error: err.message().to_string(),
        })
        .unwrap();

        assert_eq!(body, serde_json::json!({"error": "Username already taken"}));
    }

    #[test]
    fn test_store_error_conversion() {
        let err = ApiError::from(StoreError::UniqueViolation {
            constraint: "users_username_key".to_string(),
        });
        assert_eq!(err.code(), ErrorCode::UsernameTaken);

        let err = ApiError::from(StoreError::UniqueViolation {
            constraint: "users_eth_address_key".to_string(),
        });
        assert_eq!(err.code(), ErrorCode::AddressTaken);

        let err = ApiError::from(StoreError::UserNotFound);
        assert_eq!(err.status(), StatusCode::NOT_FOUND);

        let err = ApiError::from(StoreError::Database(sqlx::Error::RowNotFound));
        assert_eq!(err.code(), ErrorCode::InternalError);
        assert_eq!(err.message(), "Internal server error");
    }

    #[test]
    fn test_error_display() {
        assert_eq!(ErrorCode::InvalidSignature.to_string(), "INVALID_SIGNATURE");
        assert_eq!(
            ErrorCode::UpiMappingNotFound.to_string(),
            "UPI_MAPPING_NOT_FOUND"
        );
    }
}
