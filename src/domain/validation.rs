//! Pure field validators shared by the request handlers.

/// Minimum password length for password signup.
pub const MIN_PASSWORD_LEN: usize = 6;

/// Minimum username length for wallet registration.
pub const MIN_USERNAME_LEN: usize = 3;

/// Exact length of a `0x`-prefixed 65-byte hex signature.
pub const SIGNATURE_LEN: usize = 132;

/// `0x` followed by exactly 40 hex digits.
pub fn is_valid_eth_address(address: &str) -> bool {
    let Some(hex) = address.strip_prefix("0x") else {
        return false;
    };
    hex.len() == 40 && hex.chars().all(|c| c.is_ascii_hexdigit())
}

/// Lowercase-normalize an address for storage and comparison.
pub fn normalize_eth_address(address: &str) -> String {
    address.trim().to_ascii_lowercase()
}

/// Shape-only signature check: `0x` prefix and fixed length 132.
///
/// No cryptographic recovery is performed anywhere in the service; callers
/// accepting a signature on this predicate alone must log that fact.
pub fn has_signature_shape(signature: &str) -> bool {
    signature.len() == SIGNATURE_LEN && signature.starts_with("0x")
}

/// Amounts must be positive and finite.
pub fn is_valid_amount(amount: f64) -> bool {
    amount.is_finite() && amount > 0.0
}

pub fn is_valid_password(password: &str) -> bool {
    password.len() >= MIN_PASSWORD_LEN
}

pub fn is_valid_username(username: &str) -> bool {
    username.trim().len() >= MIN_USERNAME_LEN
}
