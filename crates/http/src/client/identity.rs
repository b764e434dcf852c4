//! Identity API client methods

use super::{ClientError, IdentityClient, TOKEN_HEADER};
use async_trait::async_trait;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use reqwest::{Method, Response};
use signup_core::{AuthResult, IdentityApi, IdentityError, RegistrationInput};
use tracing::debug;

impl IdentityClient {
    /// Look up an account matching these credentials
    ///
    /// Never fails: any transport error or non-2xx status is reported as
    /// `success: false` so the caller can fall back to registration.
    pub async fn check_auth(&self, email: &str, password: &str) -> AuthResult {
        match self.try_check_auth(email, password).await {
            Ok(result) => result,
            Err(e) => {
                debug!(error = %e, "Auth check failed");
                AuthResult::failed()
            }
        }
    }

    async fn try_check_auth(&self, email: &str, password: &str) -> Result<AuthResult, ClientError> {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, basic_auth(email, password)?);

        let response = self.request::<()>(Method::GET, headers, None).await?;
        Ok(AuthResult::succeeded(token_from(&response)))
    }

    /// Create an account; failures propagate
    pub async fn register_user(&self, input: &RegistrationInput) -> Result<AuthResult, ClientError> {
        let response = self
            .request(Method::PUT, HeaderMap::new(), Some(input))
            .await?;
        Ok(AuthResult::succeeded(token_from(&response)))
    }
}

#[async_trait(?Send)]
impl IdentityApi for IdentityClient {
    async fn check_auth(&self, input: &RegistrationInput) -> AuthResult {
        Self::check_auth(self, &input.email, &input.password).await
    }

    async fn register_user(&self, input: &RegistrationInput) -> Result<AuthResult, IdentityError> {
        Self::register_user(self, input).await.map_err(Into::into)
    }
}

fn basic_auth(email: &str, password: &str) -> Result<HeaderValue, ClientError> {
    let credentials = STANDARD.encode(format!("{email}:{password}"));
    HeaderValue::from_str(&format!("Basic {credentials}"))
        .map_err(|e| ClientError::Configuration(format!("invalid credentials header: {e}")))
}

fn token_from(response: &Response) -> Option<String> {
    response
        .headers()
        .get(TOKEN_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string)
}
