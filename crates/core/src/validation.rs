//! Sign-up form validation
//!
//! These are pure predicates. Showing the resulting errors is the job of
//! [`crate::form::FormState::apply_validation`].

use crate::error::FieldError;
use crate::types::RegistrationInput;
use once_cell::sync::Lazy;
use regex::Regex;

/// Minimum password length in UTF-16 code units
pub const MIN_PASSWORD_LEN: usize = 8;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@]+@[^\s\x{FEFF}@]+\.[^\s\x{FEFF}@]+$").expect("email pattern compiles")
});

/// Strip surrounding whitespace, counting the byte order mark as whitespace
/// the way browsers do
pub fn trim_input(value: &str) -> &str {
    value.trim_matches(|c: char| c.is_whitespace() || c == '\u{FEFF}')
}

/// Permissive email check: a local part, an "@" and a dotted domain
pub fn validate_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Password length check, counted the way the browser counts `value.length`
pub fn validate_password(password: &str) -> bool {
    password.encode_utf16().count() >= MIN_PASSWORD_LEN
}

/// Per-field outcome of validating a [`RegistrationInput`]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValidationReport {
    pub email: Option<FieldError>,
    pub password: Option<FieldError>,
}

impl ValidationReport {
    pub const fn is_valid(&self) -> bool {
        self.email.is_none() && self.password.is_none()
    }
}

/// Validate both fields of a submission
pub fn validate_form(input: &RegistrationInput) -> ValidationReport {
    ValidationReport {
        email: check_email(&input.email),
        password: check_password(&input.password),
    }
}

/// Error for the email field, if any. The value is trimmed first.
pub fn check_email(email: &str) -> Option<FieldError> {
    let email = trim_input(email);
    if email.is_empty() {
        Some(FieldError::EmailRequired)
    } else if !validate_email(email) {
        Some(FieldError::InvalidEmail)
    } else {
        None
    }
}

/// Error for the password field, if any
pub fn check_password(password: &str) -> Option<FieldError> {
    if password.is_empty() {
        Some(FieldError::PasswordRequired)
    } else if !validate_password(password) {
        Some(FieldError::PasswordTooShort)
    } else {
        None
    }
}
