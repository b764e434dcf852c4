//! Page-level side effects: scroll lock and navigation

use tracing::{info, warn};
use web_sys::HtmlElement;

fn body() -> Option<HtmlElement> {
    web_sys::window()?.document()?.body()
}

fn set_body_overflow(value: &str) {
    let Some(body) = body() else {
        return;
    };
    if let Err(e) = body.style().set_property("overflow", value) {
        warn!(error = ?e, "Failed to set body overflow");
    }
}

/// Stop the page behind the dialog from scrolling
pub fn lock_scroll() {
    set_body_overflow("hidden");
}

pub fn unlock_scroll() {
    set_body_overflow("auto");
}

/// Navigate the whole window to `url`
pub fn redirect(url: &str) {
    let Some(window) = web_sys::window() else {
        return;
    };
    info!("Redirecting to the members area");
    if let Err(e) = window.location().set_href(url) {
        warn!(error = ?e, "Redirect failed");
    }
}
