//! Frontend configuration

use signup_core::{ConfigError, WidgetConfig};
use std::rc::Rc;
use yew::prelude::*;

/// Settings compiled into the bundle
const EMBEDDED_CONFIG: &str = include_str!("../widget.toml");

/// Load the embedded config, falling back to defaults if it is invalid
pub fn load() -> (WidgetConfig, Option<ConfigError>) {
    match WidgetConfig::from_toml_str(EMBEDDED_CONFIG) {
        Ok(config) => (config, None),
        Err(e) => (WidgetConfig::default(), Some(e)),
    }
}

/// Hook to read the widget config provided by [`crate::App`]
#[hook]
pub fn use_widget_config() -> Rc<WidgetConfig> {
    use_context::<Rc<WidgetConfig>>().unwrap_or_default()
}
