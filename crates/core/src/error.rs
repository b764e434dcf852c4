//! Error types shared by the widget crates

use thiserror::Error;

/// Field-level validation failure, rendered inline next to the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("Email is required")]
    EmailRequired,

    #[error("Please enter a valid email address")]
    InvalidEmail,

    #[error("Password is required")]
    PasswordRequired,

    #[error("Password must be at least 8 characters long")]
    PasswordTooShort,
}

/// Failure reported by an identity endpoint implementation
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdentityError {
    /// The endpoint answered with a non-2xx status
    #[error("identity endpoint returned status {status}")]
    Status { status: u16 },

    /// Transport-level fault (DNS, offline, timeout, CORS)
    #[error("network error: {0}")]
    Network(String),
}

/// User-facing failure of a sign-up attempt
///
/// The `Display` output is the exact banner text shown above the form.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlowError {
    #[error("Registration failed. Please try again.")]
    RegistrationFailed,

    #[error("Network error. Please check your connection and try again.")]
    Network,
}

impl From<IdentityError> for FlowError {
    fn from(err: IdentityError) -> Self {
        match err {
            IdentityError::Status { .. } => Self::RegistrationFailed,
            IdentityError::Network(_) => Self::Network,
        }
    }
}

/// Token persistence failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StorageError {
    #[error("persistent storage is unavailable")]
    Unavailable,

    #[error("storage rejected the write: {0}")]
    Rejected(String),
}

/// Configuration parsing or validation failure
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to parse widget config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{field}: invalid URL - {source}")]
    InvalidUrl {
        field: &'static str,
        #[source]
        source: url::ParseError,
    },

    #[error("{field}: cannot be empty")]
    Empty { field: &'static str },

    #[error("log_level: unknown level '{0}'")]
    LogLevel(String),
}
