use crate::components::RegistrationPopup;
use crate::services::{LocalTokenStore, page};
use crate::state::PopupModel;
use signup_core::{PopupAction, WidgetConfig, existing_token};
use std::rc::Rc;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<WidgetConfig>,
}

#[function_component(App)]
pub fn app(props: &AppProps) -> Html {
    let popup = use_reducer(PopupModel::default);

    // Returning visitors with a saved token skip the form entirely
    {
        let config = props.config.clone();
        use_effect_with((), move |()| {
            let store = LocalTokenStore::new(config.token_storage_key.clone());
            if let Some(token) = existing_token(&store) {
                match config.redirect_url(&token) {
                    Ok(url) => page::redirect(url.as_str()),
                    Err(e) => tracing::error!(error = %e, "Cannot build redirect URL"),
                }
            }
        });
    }

    let on_sign_up = {
        let popup = popup.clone();
        Callback::from(move |_: MouseEvent| popup.dispatch(PopupAction::Open))
    };

    html! {
        <ContextProvider<Rc<WidgetConfig>> context={props.config.clone()}>
            <main class="index-page">
                <h1 class="index-page__title">{"Meet someone new today"}</h1>
                <p class="index-page__subtitle">{"Join thousands of people already chatting."}</p>
                <button type="button" class="index-page__button" onclick={on_sign_up}>
                    {"Sign Up"}
                </button>
            </main>
            <RegistrationPopup {popup} />
        </ContextProvider<Rc<WidgetConfig>>>
    }
}
