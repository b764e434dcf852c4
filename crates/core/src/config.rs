//! Widget configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use url::Url;

/// Runtime settings for the registration popup
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    /// Identity resource read with GET and written with PUT
    pub identity_url: String,
    /// localStorage key holding the session token
    pub token_storage_key: String,
    /// Page the browser is sent to, with `#token=...` appended
    pub redirect_base: String,
    /// Redirect automatically after a successful sign-up
    pub auto_redirect: bool,
    pub focus_delay_ms: u32,
    pub form_error_ms: u32,
    pub redirect_delay_ms: u32,
    /// Ignored on wasm32, where the browser owns request timeouts
    pub request_timeout_secs: Option<u64>,
    pub log_level: String,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            identity_url: "https://api.dating.com/identity".to_string(),
            token_storage_key: "dating_token".to_string(),
            redirect_base: "https://www.dating.com/people/".to_string(),
            auto_redirect: true,
            focus_delay_ms: 100,
            form_error_ms: 5_000,
            redirect_delay_ms: 2_500,
            request_timeout_secs: None,
            log_level: "info".to_string(),
        }
    }
}

impl WidgetConfig {
    /// Parse and validate a TOML document. Missing keys keep their defaults.
    pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(source)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        parse_url(&self.identity_url, "identity_url")?;
        parse_url(&self.redirect_base, "redirect_base")?;
        if self.token_storage_key.trim().is_empty() {
            return Err(ConfigError::Empty {
                field: "token_storage_key",
            });
        }
        if !matches!(
            self.log_level.to_ascii_lowercase().as_str(),
            "trace" | "debug" | "info" | "warn" | "error" | "off"
        ) {
            return Err(ConfigError::LogLevel(self.log_level.clone()));
        }
        Ok(())
    }

    /// Where to send the browser once `token` is known
    pub fn redirect_url(&self, token: &str) -> Result<Url, ConfigError> {
        let mut url = parse_url(&self.redirect_base, "redirect_base")?;
        url.set_fragment(Some(&format!("token={token}")));
        Ok(url)
    }
}

fn parse_url(value: &str, field: &'static str) -> Result<Url, ConfigError> {
    Url::parse(value).map_err(|source| ConfigError::InvalidUrl { field, source })
}
