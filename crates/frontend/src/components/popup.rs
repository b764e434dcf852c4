//! Registration popup: modal dialog, sign-up form and success panel

use crate::components::{FormBanner, FormField};
use crate::config::use_widget_config;
use crate::elements::PopupElements;
use crate::hooks::{use_signup, use_timeout};
use crate::services::page;
use crate::state::PopupHandle;
use signup_core::{Field, PopupAction};
use web_sys::Element;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct RegistrationPopupProps {
    pub popup: PopupHandle,
}

#[function_component(RegistrationPopup)]
pub fn registration_popup(props: &RegistrationPopupProps) -> Html {
    let popup = props.popup.clone();
    let config = use_widget_config();
    let elements = PopupElements {
        dialog: use_node_ref(),
        email: use_node_ref(),
    };
    let scroll_locked = use_mut_ref(|| false);
    let on_submit = use_signup(popup.clone());

    // Show or hide the native dialog and lock scrolling while it is open
    {
        let elements = elements.clone();
        use_effect_with(popup.open, move |open| {
            if *open {
                elements.show_modal();
                page::lock_scroll();
                *scroll_locked.borrow_mut() = true;
            } else {
                elements.close();
                if std::mem::replace(&mut *scroll_locked.borrow_mut(), false) {
                    page::unlock_scroll();
                }
            }
        });
    }

    // Focus the email field shortly after each open
    {
        let elements = elements.clone();
        use_timeout(popup.focus_key(), config.focus_delay_ms, move |_| elements.focus_email());
    }

    // Remove the banner after a fixed delay
    {
        let popup = popup.clone();
        let key = popup.form.banner().map(|banner| banner.id);
        use_timeout(key, config.form_error_ms, move |id| {
            popup.dispatch(PopupAction::DismissBanner(id));
        });
    }

    // Redirect once signed up
    {
        let config = config.clone();
        let key = config
            .auto_redirect
            .then(|| popup.form.token().map(str::to_string))
            .flatten();
        use_timeout(key, config.redirect_delay_ms, move |token| {
            match config.redirect_url(&token) {
                Ok(url) => page::redirect(url.as_str()),
                Err(e) => tracing::error!(error = %e, "Cannot build redirect URL"),
            }
        });
    }

    let on_close = {
        let popup = popup.clone();
        Callback::from(move |_: MouseEvent| popup.dispatch(PopupAction::Close))
    };

    // Clicks on the dialog element itself land on the backdrop
    let on_dialog_click = {
        let popup = popup.clone();
        let elements = elements.clone();
        Callback::from(move |e: MouseEvent| {
            let target = e.target_dyn_into::<Element>();
            if elements.is_dialog(target.as_ref()) {
                popup.dispatch(PopupAction::Close);
            }
        })
    };

    // Escape on a modal dialog fires `cancel`; close through the reducer instead
    let on_cancel = {
        let popup = popup.clone();
        Callback::from(move |e: Event| {
            e.prevent_default();
            popup.dispatch(PopupAction::Close);
        })
    };

    let field_input = |field: Field| {
        let popup = popup.clone();
        Callback::from(move |value: String| popup.dispatch(PopupAction::Input { field, value }))
    };
    let field_blur = |field: Field| {
        let popup = popup.clone();
        Callback::from(move |()| popup.dispatch(PopupAction::Blur(field)))
    };

    let form = &popup.form;
    let control = form.submit_control();

    html! {
        <dialog
            id="registrationPopup"
            class="popup"
            ref={elements.dialog.clone()}
            onclick={on_dialog_click}
            oncancel={on_cancel}
        >
            <div class="popup__content">
                <button type="button" class="popup__close" aria-label="Close" onclick={on_close}>
                    {"×"}
                </button>

                if form.form_visible() {
                    <div class="popup__header">
                        <h2 class="popup__title">{"Create your account"}</h2>
                        <p class="popup__subtitle">{"It only takes a minute"}</p>
                    </div>
                    <form
                        id="registrationForm"
                        class="popup__form"
                        novalidate={true}
                        onsubmit={on_submit}
                    >
                        if let Some(banner) = form.banner() {
                            <FormBanner message={banner.message.clone()} />
                        }
                        <FormField
                            id="email"
                            label="Email"
                            input_type="email"
                            value={form.email.clone()}
                            state={form.field_state(Field::Email)}
                            placeholder="you@example.com"
                            autocomplete="email"
                            node_ref={elements.email.clone()}
                            on_input={field_input(Field::Email)}
                            on_blur={field_blur(Field::Email)}
                        />
                        <FormField
                            id="password"
                            label="Password"
                            input_type="password"
                            value={form.password.clone()}
                            state={form.field_state(Field::Password)}
                            placeholder="At least 8 characters"
                            autocomplete="new-password"
                            on_input={field_input(Field::Password)}
                            on_blur={field_blur(Field::Password)}
                        />
                        <button
                            type="submit"
                            class="popup__submit-btn"
                            disabled={control.disabled()}
                        >
                            {control.label()}
                        </button>
                    </form>
                }

                if form.success_visible() {
                    <div id="successMessage" class="popup__success" role="status">
                        <h2>{"You're in!"}</h2>
                        <p>{"Your account is ready. Taking you to your profile..."}</p>
                    </div>
                }
            </div>
        </dialog>
    }
}
