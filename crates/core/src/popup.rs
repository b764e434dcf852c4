//! Popup lifecycle reducer
//!
//! Every open and close starts a new session. Results of a submission that
//! was started in an earlier session are dropped, so a response arriving
//! after the dialog was dismissed never touches the fresh form.

use crate::error::FlowError;
use crate::form::{BannerId, Field, FormState};
use crate::validation::ValidationReport;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PopupState {
    pub open: bool,
    pub session: u64,
    pub form: FormState,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PopupAction {
    Open,
    Close,
    Input { field: Field, value: String },
    Blur(Field),
    Validated(ValidationReport),
    SubmitStarted { session: u64 },
    Completed {
        session: u64,
        outcome: Result<String, FlowError>,
    },
    DismissBanner(BannerId),
}

impl PopupState {
    pub fn apply(&mut self, action: PopupAction) {
        match action {
            PopupAction::Open => {
                self.open = true;
                self.reset_form();
            }
            PopupAction::Close => {
                self.open = false;
                self.reset_form();
            }
            PopupAction::Input { field, value } => self.form.set_value(field, value),
            PopupAction::Blur(field) => self.form.blur(field),
            PopupAction::Validated(report) => {
                self.form.apply_validation(&report);
            }
            PopupAction::SubmitStarted { session } => {
                if session == self.session {
                    self.form.begin_submit();
                }
            }
            PopupAction::Completed { session, outcome } => {
                if session == self.session {
                    self.form.finish_submit(outcome);
                } else {
                    tracing::debug!(session, current = self.session, "Dropping stale result");
                }
            }
            PopupAction::DismissBanner(id) => self.form.dismiss_form_error(id),
        }
    }

    /// Changes on every open and is `None` while closed, so a delayed focus
    /// armed for one opening never fires for another
    pub const fn focus_key(&self) -> Option<u64> {
        if self.open { Some(self.session) } else { None }
    }

    fn reset_form(&mut self) {
        self.session += 1;
        self.form.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FieldError;
    use crate::form::{FieldState, FormPhase, SubmitControl};

    fn opened() -> PopupState {
        let mut state = PopupState::default();
        state.apply(PopupAction::Open);
        state
    }

    #[test]
    fn test_close_resets_errors_and_values() {
        let mut state = opened();
        state.apply(PopupAction::Input {
            field: Field::Email,
            value: "bad".into(),
        });
        state.apply(PopupAction::Blur(Field::Email));
        state.form.show_form_error("boom");
        assert!(state.form.field_state(Field::Email).is_error());

        state.apply(PopupAction::Close);
        assert!(!state.open);
        assert!(state.form.email.is_empty());
        assert_eq!(state.form.field_state(Field::Email), FieldState::Neutral);
        assert!(state.form.banner().is_none());

        state.apply(PopupAction::Open);
        assert!(state.open);
        assert_eq!(state.form.submit_control(), SubmitControl::Enabled);
    }

    #[test]
    fn test_each_open_gets_a_fresh_focus_key() {
        let mut state = PopupState::default();
        assert_eq!(state.focus_key(), None);

        state.apply(PopupAction::Open);
        let first = state.focus_key();
        assert!(first.is_some());

        state.apply(PopupAction::Close);
        assert_eq!(state.focus_key(), None);

        state.apply(PopupAction::Open);
        let second = state.focus_key();
        assert!(second.is_some());
        assert_ne!(first, second);
    }

    #[test]
    fn test_typing_keeps_focus_key() {
        let mut state = opened();
        let key = state.focus_key();
        state.apply(PopupAction::Input {
            field: Field::Email,
            value: "user@domain.tld".into(),
        });
        state.apply(PopupAction::Blur(Field::Email));
        assert_eq!(state.focus_key(), key);
    }

    #[test]
    fn test_result_from_previous_session_is_dropped() {
        let mut state = opened();
        let session = state.session;
        state.apply(PopupAction::SubmitStarted { session });
        assert_eq!(state.form.phase(), FormPhase::Submitting);

        state.apply(PopupAction::Close);
        state.apply(PopupAction::Open);
        state.apply(PopupAction::Completed {
            session,
            outcome: Ok("late".into()),
        });
        assert_eq!(state.form.phase(), FormPhase::Idle);
        assert!(state.form.token().is_none());
    }

    #[test]
    fn test_completed_always_leaves_submitting() {
        for outcome in [
            Ok("tok".to_string()),
            Err(FlowError::RegistrationFailed),
            Err(FlowError::Network),
        ] {
            let mut state = opened();
            let session = state.session;
            state.apply(PopupAction::SubmitStarted { session });
            state.apply(PopupAction::Completed { session, outcome });
            assert_eq!(state.form.submit_control(), SubmitControl::Enabled);
            assert_ne!(state.form.phase(), FormPhase::Submitting);
        }
    }

    #[test]
    fn test_validated_shows_one_error_per_field() {
        let mut state = opened();
        let report = ValidationReport {
            email: Some(FieldError::EmailRequired),
            password: None,
        };
        state.apply(PopupAction::Validated(report));
        state.apply(PopupAction::Validated(report));
        assert_eq!(
            state.form.field_state(Field::Email),
            FieldState::Error(FieldError::EmailRequired)
        );
        assert_eq!(state.form.field_state(Field::Password), FieldState::Neutral);
    }
}
