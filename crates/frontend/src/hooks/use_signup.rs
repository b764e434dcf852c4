//! Submit handler driving the sign-up flow

use crate::config::use_widget_config;
use crate::services::LocalTokenStore;
use crate::state::PopupHandle;
use signup_core::{FlowError, FormPhase, PopupAction, SignupFlow, validate_form};
use signup_http::IdentityClient;
use std::cell::RefCell;
use std::rc::Rc;
use yew::prelude::*;

/// Validate the form and, if it passes, run the sign-up flow
///
/// The flow result is dispatched with the session it was started in, so a
/// response that arrives after the popup closed is ignored by the reducer.
#[hook]
pub fn use_signup(popup: PopupHandle) -> Callback<SubmitEvent> {
    let config = use_widget_config();
    // Session of the submission currently awaiting a response
    let in_flight: Rc<RefCell<Option<u64>>> = use_mut_ref(|| None);

    Callback::from(move |e: SubmitEvent| {
        e.prevent_default();

        let session = popup.session;
        if popup.form.phase() != FormPhase::Idle || *in_flight.borrow() == Some(session) {
            return;
        }

        let input = popup.form.input();
        let report = validate_form(&input);
        popup.dispatch(PopupAction::Validated(report));
        if !report.is_valid() {
            return;
        }

        popup.dispatch(PopupAction::SubmitStarted { session });
        *in_flight.borrow_mut() = Some(session);

        let popup = popup.clone();
        let config = config.clone();
        let in_flight = in_flight.clone();
        wasm_bindgen_futures::spawn_local(async move {
            let store = LocalTokenStore::new(config.token_storage_key.clone());
            let outcome = match IdentityClient::from_config(&config) {
                Ok(client) => SignupFlow::new(client, store).submit(&input).await,
                Err(e) => {
                    tracing::error!(error = %e, "Failed to build identity client");
                    Err(FlowError::Network)
                }
            };

            {
                let mut current = in_flight.borrow_mut();
                if *current == Some(session) {
                    *current = None;
                }
            }
            popup.dispatch(PopupAction::Completed { session, outcome });
        });
    })
}
