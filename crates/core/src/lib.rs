//! Sign-up widget core: validation, form state and the registration flow
//!
//! Nothing in this crate touches the DOM or the network directly. The
//! browser frontend drives [`popup::PopupState`] and provides the
//! [`flow::IdentityApi`] and [`flow::TokenStore`] implementations.

pub mod config;
pub mod error;
pub mod flow;
pub mod form;
pub mod popup;
pub mod types;
pub mod validation;

pub use config::WidgetConfig;
pub use error::{ConfigError, FieldError, FlowError, IdentityError, StorageError};
pub use flow::{FlowOutcome, IdentityApi, SignupFlow, TokenStore, existing_token};
pub use form::{BannerId, Field, FieldState, FormPhase, FormState, SubmitControl};
pub use popup::{PopupAction, PopupState};
pub use types::{AuthResult, RegistrationInput};
pub use validation::{ValidationReport, validate_email, validate_form, validate_password};
