use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{ContactError, ContactResult};
use crate::model::{Field, Pattern};

static PHONE_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\d{10}$").expect("Failed to compile phone pattern"));

// Deliberately loose: no length or character-class limits beyond the shape.
static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("Failed to compile email pattern")
});

/// Validates that a string is not blank (empty or whitespace-only).
/// Returns the trimmed string on success.
pub fn non_blank(value: &str, field: Field) -> ContactResult<String> {
    let trimmed = value.trim().to_string();
    if trimmed.is_empty() {
        Err(ContactError::EmptyField { field })
    } else {
        Ok(trimmed)
    }
}

/// Validates a phone number: exactly ten digits, nothing else.
pub fn phone_number(value: &str) -> ContactResult<String> {
    matches_pattern(&PHONE_PATTERN, value, Pattern::Phone)
}

/// Validates an email address of the shape `local@domain.tld`.
pub fn email_address(value: &str) -> ContactResult<String> {
    matches_pattern(&EMAIL_PATTERN, value, Pattern::Email)
}

fn matches_pattern(regex: &Regex, value: &str, pattern: Pattern) -> ContactResult<String> {
    if regex.is_match(value) {
        Ok(value.to_string())
    } else {
        Err(ContactError::InvalidFormat {
            pattern,
            value: value.to_string(),
        })
    }
}
