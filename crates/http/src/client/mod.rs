//! Identity endpoint client

pub mod error;
pub mod identity;

use error::ClientError;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use reqwest::{Client, ClientBuilder, Method, Response, Url};
use serde::Serialize;
use signup_core::WidgetConfig;
use std::time::Duration;

/// Response header carrying the session token
pub const TOKEN_HEADER: &str = "x-token";

/// Client for the single identity resource
#[derive(Clone, Debug)]
pub struct IdentityClient {
    client: Client,
    endpoint: Url,
}

impl IdentityClient {
    /// Create a new client with default configuration
    pub fn new(endpoint: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().endpoint(endpoint).build()
    }

    /// Create a new client builder
    pub fn builder() -> IdentityClientBuilder {
        IdentityClientBuilder::default()
    }

    /// Build a client from the widget settings
    pub fn from_config(config: &WidgetConfig) -> Result<Self, ClientError> {
        let mut builder = Self::builder().endpoint(config.identity_url.clone());
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        builder.build()
    }

    /// Send a request to the identity resource
    ///
    /// `Content-Type: application/json` is added only when there is a body;
    /// caller headers are merged over it. Non-2xx responses become
    /// [`ClientError::Status`].
    pub async fn request<B: Serialize + ?Sized>(
        &self,
        method: Method,
        headers: HeaderMap,
        body: Option<&B>,
    ) -> Result<Response, ClientError> {
        let mut merged = HeaderMap::new();
        if body.is_some() {
            merged.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        }
        merged.extend(headers);

        let mut request = self.client.request(method, self.endpoint.clone());
        if let Some(body) = body {
            request = request.body(serde_json::to_vec(body)?);
        }

        let response = request.headers(merged).send().await?;
        let status = response.status();
        if status.is_success() {
            Ok(response)
        } else {
            Err(ClientError::from_status(status))
        }
    }
}

/// Builder for IdentityClient
#[derive(Default)]
pub struct IdentityClientBuilder {
    endpoint: Option<String>,
    timeout: Option<Duration>,
}

impl IdentityClientBuilder {
    /// Set the identity resource URL
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.endpoint = Some(url.into());
        self
    }

    /// Set the request timeout (native targets only)
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<IdentityClient, ClientError> {
        let endpoint = self
            .endpoint
            .ok_or_else(|| ClientError::Configuration("endpoint is required".into()))?;
        let endpoint = Url::parse(&endpoint)
            .map_err(|e| ClientError::Configuration(format!("invalid endpoint '{endpoint}': {e}")))?;

        #[allow(unused_mut)]
        let mut client_builder = ClientBuilder::new();

        #[cfg(not(target_arch = "wasm32"))]
        if let Some(timeout) = self.timeout {
            client_builder = client_builder.timeout(timeout);
        }

        let client = client_builder.build()?;

        Ok(IdentityClient { client, endpoint })
    }
}
