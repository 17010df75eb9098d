//! Short code generation and validation utilities.
//!
//! Provides cryptographically secure random code generation and validation
//! for custom user-provided codes.

use crate::error::AppError;
use rand::Rng;
use rand::distr::Alphanumeric;
use regex::Regex;
use serde_json::json;
use std::sync::LazyLock;

/// Length of generated codes.
const CODE_LENGTH: usize = 6;

/// Custom codes must be 3-16 alphanumeric characters.
static CUSTOM_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9]{3,16}$").unwrap());

/// Codes that collide with fixed routes and cannot be used as short links.
const RESERVED_CODES: &[&str] = &["shorturls", "health"];

/// Generates a random 6-character alphanumeric short code.
///
/// Uses the thread-local CSPRNG, so codes are not guessable from previous
/// allocations.
///
/// # Examples
///
/// ```ignore
/// let code = generate_code();
/// assert_eq!(code.len(), 6);
/// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
/// ```
pub fn generate_code() -> String {
    let mut rng = rand::rng();
    (0..CODE_LENGTH)
        .map(|_| char::from(rng.sample(Alphanumeric)))
        .collect()
}

/// Validates a user-provided custom short code.
///
/// # Rules
///
/// - 3-16 characters, ASCII letters and digits only
/// - Cannot be a reserved route name
///
/// # Errors
///
/// Returns [`AppError::Validation`] if any validation rule is violated.
pub fn validate_custom_code(code: &str) -> Result<(), AppError> {
    if !CUSTOM_CODE_REGEX.is_match(code) {
        return Err(AppError::bad_request(
            "Shortcode must be alphanumeric and 3-16 chars",
            json!({ "code": code }),
        ));
    }

    if RESERVED_CODES.contains(&code) {
        return Err(AppError::bad_request(
            "This shortcode is reserved",
            json!({ "code": code }),
        ));
    }

    Ok(())
}
