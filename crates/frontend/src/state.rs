//! Yew binding for the popup reducer

use signup_core::{PopupAction, PopupState};
use std::ops::Deref;
use std::rc::Rc;
use yew::prelude::*;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PopupModel(PopupState);

impl Deref for PopupModel {
    type Target = PopupState;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Reducible for PopupModel {
    type Action = PopupAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.0.apply(action);
        Rc::new(next)
    }
}

/// Handle shared by the landing page and the popup
pub type PopupHandle = UseReducerHandle<PopupModel>;
