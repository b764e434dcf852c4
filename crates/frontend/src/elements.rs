//! DOM handles used by the popup
//!
//! Handles are resolved on demand from `NodeRef`s rather than cached, so a
//! re-render never leaves the controller holding a detached element.

use tracing::warn;
use web_sys::{Element, HtmlDialogElement, HtmlInputElement};
use yew::NodeRef;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PopupElements {
    pub dialog: NodeRef,
    pub email: NodeRef,
}

impl PopupElements {
    pub fn dialog(&self) -> Option<HtmlDialogElement> {
        self.dialog.cast::<HtmlDialogElement>()
    }

    /// Whether `target` is the dialog element itself, i.e. its backdrop
    pub fn is_dialog(&self, target: Option<&Element>) -> bool {
        match (target, self.dialog.cast::<Element>()) {
            (Some(target), Some(dialog)) => *target == dialog,
            _ => false,
        }
    }

    pub fn show_modal(&self) {
        let Some(dialog) = self.dialog() else {
            return;
        };
        if dialog.open() {
            return;
        }
        if let Err(e) = dialog.show_modal() {
            warn!(error = ?e, "showModal failed");
        }
    }

    pub fn close(&self) {
        if let Some(dialog) = self.dialog().filter(HtmlDialogElement::open) {
            dialog.close();
        }
    }

    pub fn focus_email(&self) {
        if let Some(input) = self.email.cast::<HtmlInputElement>()
            && let Err(e) = input.focus()
        {
            warn!(error = ?e, "Failed to focus email field");
        }
    }
}
