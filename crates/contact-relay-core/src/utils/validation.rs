/// Input validation utilities
use crate::error::RelayError;
use regex::Regex;
use std::sync::LazyLock;

// One "@", no whitespace, and at least one "." in the domain part
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

pub fn validate_email_address(email: &str) -> Result<(), RelayError> {
    if EMAIL_REGEX.is_match(email) {
        Ok(())
    } else {
        Err(RelayError::InvalidEmail(format!(
            "Invalid email address: {}",
            crate::utils::logging::redact_email(email)
        )))
    }
}
