//! Common test utilities and fixtures for integration tests

#![allow(dead_code)]

use serde_json::json;
use uuid::Uuid;

/// Well-formed 132-character signature that passes the shape check.
pub fn test_signature() -> String {
    format!("0x{}", "ab".repeat(65))
}

/// Generate a unique username so tests never collide across runs.
pub fn unique_username(prefix: &str) -> String {
    format!("{}-{}", prefix, &Uuid::new_v4().simple().to_string()[..12])
}

/// Generate a unique, well-formed wallet address (lowercase).
pub fn unique_address() -> String {
    format!("0x{}00000000", Uuid::new_v4().simple())
}

/// Generate a unique contract-request identifier.
pub fn unique_contract_id() -> String {
    format!("0x{}", Uuid::new_v4().simple())
}

/// Body for POST /api/signup.
pub fn signup_body(username: &str, password: &str) -> serde_json::Value {
    json!({
        "username": username,
        "password": password,
    })
}

/// Body for POST /api/payment-request.
///
/// `amount` is an arbitrary JSON value so tests can send strings and
/// negatives as well as valid numbers.
pub fn payment_request_body(
    upi_id: &str,
    amount: serde_json::Value,
    contract_request_id: Option<&str>,
) -> serde_json::Value {
    let mut body = json!({
        "upiId": upi_id,
        "amount": amount,
        "payeeName": "Merchant",
        "note": "integration test",
    });
    if let Some(id) = contract_request_id {
        body["contractRequestId"] = json!(id);
    }
    body
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_fixtures_are_well_formed() {
        assert_eq!(test_signature().len(), 132);
        assert_eq!(unique_address().len(), 42);
        assert_ne!(unique_username("u"), unique_username("u"));
    }
}
