//! Explicit form state: field errors, submit phase and the form banner

use crate::error::{FieldError, FlowError};
use crate::types::RegistrationInput;
use crate::validation::{ValidationReport, check_email, check_password, trim_input};

/// Identifies one banner instance so a stale timer cannot remove a newer one
pub type BannerId = u64;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    Email,
    Password,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FieldState {
    #[default]
    Neutral,
    Error(FieldError),
}

impl FieldState {
    pub const fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    pub const fn error(&self) -> Option<FieldError> {
        match self {
            Self::Neutral => None,
            Self::Error(err) => Some(*err),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Submitting,
    Success,
}

/// How the submit button should render
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitControl {
    Enabled,
    Loading,
}

impl SubmitControl {
    pub const fn disabled(self) -> bool {
        matches!(self, Self::Loading)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Enabled => "Sign Up",
            Self::Loading => "Signing Up...",
        }
    }
}

/// Form-level error message shown above the inputs
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Banner {
    pub id: BannerId,
    pub message: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub email: String,
    pub password: String,
    email_state: FieldState,
    password_state: FieldState,
    phase: FormPhase,
    banner: Option<Banner>,
    next_banner_id: BannerId,
    token: Option<String>,
}

impl FormState {
    pub const fn phase(&self) -> FormPhase {
        self.phase
    }

    pub const fn field_state(&self, field: Field) -> FieldState {
        match field {
            Field::Email => self.email_state,
            Field::Password => self.password_state,
        }
    }

    pub const fn banner(&self) -> Option<&Banner> {
        self.banner.as_ref()
    }

    /// Token received by the last successful submission
    pub fn token(&self) -> Option<&str> {
        self.token.as_deref()
    }

    pub const fn submit_control(&self) -> SubmitControl {
        match self.phase {
            FormPhase::Submitting => SubmitControl::Loading,
            FormPhase::Idle | FormPhase::Success => SubmitControl::Enabled,
        }
    }

    pub const fn form_visible(&self) -> bool {
        !matches!(self.phase, FormPhase::Success)
    }

    pub const fn success_visible(&self) -> bool {
        matches!(self.phase, FormPhase::Success)
    }

    pub fn input(&self) -> RegistrationInput {
        RegistrationInput::new(self.email.clone(), self.password.clone())
    }

    fn slot(&mut self, field: Field) -> &mut FieldState {
        match field {
            Field::Email => &mut self.email_state,
            Field::Password => &mut self.password_state,
        }
    }

    /// Replace any existing error on `field` with `error`
    pub fn show_field_error(&mut self, field: Field, error: FieldError) {
        self.remove_field_error(field);
        *self.slot(field) = FieldState::Error(error);
    }

    pub fn remove_field_error(&mut self, field: Field) {
        *self.slot(field) = FieldState::Neutral;
    }

    /// Insert or replace the banner. Returns the id the removal timer must use.
    pub fn show_form_error(&mut self, message: impl Into<String>) -> BannerId {
        self.next_banner_id += 1;
        let id = self.next_banner_id;
        self.banner = Some(Banner {
            id,
            message: message.into(),
        });
        id
    }

    /// Remove the banner if it is still the one identified by `id`
    pub fn dismiss_form_error(&mut self, id: BannerId) {
        if self.banner.as_ref().is_some_and(|b| b.id == id) {
            self.banner = None;
        }
    }

    /// Clear both fields, then show whatever `report` flags
    pub fn apply_validation(&mut self, report: &ValidationReport) -> bool {
        self.remove_field_error(Field::Email);
        self.remove_field_error(Field::Password);
        if let Some(err) = report.email {
            self.show_field_error(Field::Email, err);
        }
        if let Some(err) = report.password {
            self.show_field_error(Field::Password, err);
        }
        report.is_valid()
    }

    pub fn set_value(&mut self, field: Field, value: String) {
        match field {
            Field::Email => self.email = value,
            Field::Password => self.password = value,
        }
        if self.field_state(field).is_error() {
            self.remove_field_error(field);
        }
    }

    /// Validate a single non-empty field when it loses focus
    pub fn blur(&mut self, field: Field) {
        let (value, check) = match field {
            Field::Email => (trim_input(&self.email), check_email(&self.email)),
            Field::Password => (self.password.as_str(), check_password(&self.password)),
        };
        if value.is_empty() {
            return;
        }
        match check {
            Some(err) => self.show_field_error(field, err),
            None => self.remove_field_error(field),
        }
    }

    /// Enter `Submitting`. Returns false if a submission is already running.
    pub fn begin_submit(&mut self) -> bool {
        if self.phase != FormPhase::Idle {
            return false;
        }
        self.banner = None;
        self.phase = FormPhase::Submitting;
        true
    }

    /// Leave `Submitting` with the outcome of the flow
    pub fn finish_submit(&mut self, outcome: Result<String, FlowError>) {
        match outcome {
            Ok(token) => {
                self.token = Some(token);
                self.phase = FormPhase::Success;
            }
            Err(err) => {
                self.show_form_error(err.to_string());
                self.phase = FormPhase::Idle;
            }
        }
    }

    /// Blank values, neutral fields, no banner, enabled submit
    pub fn reset(&mut self) {
        let next_banner_id = self.next_banner_id;
        *self = Self {
            next_banner_id,
            ..Self::default()
        };
    }
}
