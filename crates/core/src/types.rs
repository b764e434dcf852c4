//! Data exchanged with the identity endpoint

use serde::{Deserialize, Serialize};

/// Raw values from the sign-up form, alive for one submission
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationInput {
    pub email: String,
    pub password: String,
}

impl RegistrationInput {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// Result of an auth check or registration call
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthResult {
    pub success: bool,
    pub token: Option<String>,
}

impl AuthResult {
    /// Negative auth check result
    pub const fn failed() -> Self {
        Self {
            success: false,
            token: None,
        }
    }

    /// Successful response, keeping the token only if it is non-empty
    pub fn succeeded(token: Option<String>) -> Self {
        Self {
            success: true,
            token: token.filter(|t| !t.is_empty()),
        }
    }

    /// The token, if this result is actionable
    pub fn into_token(self) -> Option<String> {
        if self.success { self.token } else { None }
    }
}
