/// Logging utilities for PII redaction
///
/// Submitter addresses and message bodies never reach the logs verbatim.
use regex::Regex;
use std::sync::LazyLock;

// Email redaction regex
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^\s@<>]+@([^\s@<>]+)").unwrap());

/// Redacts email addresses from text, preserving domain for debugging
///
/// # Examples
/// ```
/// use contact_relay_core::utils::logging::redact_email;
///
/// assert_eq!(redact_email("user@example.com"), "***@example.com");
/// assert_eq!(redact_email("Reply to: ana@acme.com"), "Reply to: ***@acme.com");
/// ```
pub fn redact_email(text: &str) -> String {
    EMAIL_PATTERN.replace_all(text, "***@$1").to_string()
}

/// Redacts message body for logging (shows length only)
pub fn redact_body(body: &str) -> String {
    format!("[{} bytes]", body.len())
}

/// Extracts domain from email address for safe logging
pub fn email_domain(email: &str) -> &str {
    email.rsplit_once('@').map(|(_, domain)| domain).unwrap_or("unknown")
}
