//! Cancelable one-shot timer tied to a key

use gloo::timers::callback::Timeout;
use yew::prelude::*;

/// Call `callback(key)` once, `millis` after `key` becomes `Some`
///
/// Changing the key (including to `None`) or unmounting the component
/// drops the pending `Timeout`, which cancels it.
#[hook]
pub fn use_timeout<K, F>(key: Option<K>, millis: u32, callback: F)
where
    K: PartialEq + Clone + 'static,
    F: FnOnce(K) + 'static,
{
    use_effect_with(key, move |key| {
        let handle = key
            .clone()
            .map(|key| Timeout::new(millis, move || callback(key)));
        move || drop(handle)
    });
}
