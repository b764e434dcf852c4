//! Browser-only checks, run with `wasm-pack test --headless --firefox`

#![cfg(target_arch = "wasm32")]

use signup_core::{PopupAction, TokenStore, existing_token};
use signup_frontend::PopupModel;
use signup_frontend::components::RegistrationPopup;
use signup_frontend::services::LocalTokenStore;
use std::time::Duration;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, Element, Event, HtmlDialogElement};
use yew::AppHandle;
use yew::platform::time::sleep;
use yew::prelude::*;

wasm_bindgen_test_configure!(run_in_browser);

/// Longer than the default focus delay
const SETTLE: Duration = Duration::from_millis(300);

#[function_component(OpenedPopup)]
fn opened_popup() -> Html {
    let popup = use_reducer(PopupModel::default);
    {
        let popup = popup.clone();
        use_effect_with((), move |()| popup.dispatch(PopupAction::Open));
    }
    html! { <RegistrationPopup {popup} /> }
}

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn mount() -> (AppHandle<OpenedPopup>, Element) {
    let root = document().create_element("div").unwrap();
    document().body().unwrap().append_child(&root).unwrap();
    let handle = yew::Renderer::<OpenedPopup>::with_root(root.clone()).render();
    (handle, root)
}

fn dialog() -> HtmlDialogElement {
    document()
        .get_element_by_id("registrationPopup")
        .unwrap()
        .dyn_into::<HtmlDialogElement>()
        .unwrap()
}

fn body_overflow() -> String {
    document()
        .body()
        .unwrap()
        .style()
        .get_property_value("overflow")
        .unwrap()
}

fn unmount(handle: AppHandle<OpenedPopup>, root: Element) {
    handle.destroy();
    root.remove();
}

#[wasm_bindgen_test]
fn local_store_keeps_raw_token() {
    let store = LocalTokenStore::new("signup_test_token");
    store.save("abc.def").unwrap();
    assert_eq!(store.load().as_deref(), Some("abc.def"));

    let raw = web_sys::window()
        .unwrap()
        .local_storage()
        .unwrap()
        .unwrap()
        .get_item("signup_test_token")
        .unwrap();
    assert_eq!(raw.as_deref(), Some("abc.def"));
}

#[wasm_bindgen_test]
fn empty_saved_token_is_ignored() {
    let store = LocalTokenStore::new("signup_test_empty");
    store.save("").unwrap();
    assert!(existing_token(&store).is_none());
}

#[wasm_bindgen_test]
async fn opening_shows_modal_locks_scroll_and_focuses_email() {
    let (handle, root) = mount();
    sleep(SETTLE).await;

    assert!(dialog().open());
    assert_eq!(body_overflow(), "hidden");
    let active = document().active_element().map(|el| el.id());
    assert_eq!(active.as_deref(), Some("email"));

    unmount(handle, root);
}

#[wasm_bindgen_test]
async fn backdrop_click_closes_and_unlocks_scroll() {
    let (handle, root) = mount();
    sleep(SETTLE).await;
    assert!(dialog().open());

    dialog().click();
    sleep(SETTLE).await;

    assert!(!dialog().open());
    assert_eq!(body_overflow(), "auto");

    unmount(handle, root);
}

#[wasm_bindgen_test]
async fn cancel_event_closes_through_the_popup() {
    let (handle, root) = mount();
    sleep(SETTLE).await;
    assert!(dialog().open());

    let cancel = Event::new("cancel").unwrap();
    dialog().dispatch_event(&cancel).unwrap();
    sleep(SETTLE).await;

    assert!(!dialog().open());
    assert_eq!(body_overflow(), "auto");

    unmount(handle, root);
}
