//! Client configuration
//!
//! `ClientOptions` is everything a [`Client`](crate::Client) needs. Every field
//! is optional; unset fields fall back to the defaults below when the client
//! is constructed.

use std::time::Duration;

/// Production base URL of the Gumroad API
pub const DEFAULT_ENDPOINT: &str = "https://api.gumroad.com";

/// Timeout of the transport built when none is supplied
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(3);

/// Path prefix of every API resource
pub const API_VERSION_PREFIX: &str = "/v2";

/// Options for constructing a client
#[derive(Debug, Clone, Default)]
pub struct ClientOptions {
    /// Token sent as `access_token` with every request
    pub access_token: String,
    /// Base URL, without the `/v2` prefix
    pub endpoint: Option<String>,
    /// Transport to use instead of the default one
    pub http_client: Option<reqwest::Client>,
    /// Per-request timeout
    ///
    /// When unset, the default transport gets [`DEFAULT_TIMEOUT`] and a
    /// caller-supplied transport keeps its own settings.
    pub timeout: Option<Duration>,
}

impl ClientOptions {
    /// Create a new options builder
    pub fn builder() -> ClientOptionsBuilder {
        ClientOptionsBuilder::default()
    }
}

/// Builder for client options
#[derive(Default)]
pub struct ClientOptionsBuilder {
    options: ClientOptions,
}

impl ClientOptionsBuilder {
    /// Set the access token
    pub fn access_token(mut self, token: impl Into<String>) -> Self {
        self.options.access_token = token.into();
        self
    }

    /// Set the base URL
    pub fn endpoint(mut self, url: impl Into<String>) -> Self {
        self.options.endpoint = Some(url.into());
        self
    }

    /// Use an existing transport
    pub fn http_client(mut self, client: reqwest::Client) -> Self {
        self.options.http_client = Some(client);
        self
    }

    /// Set the request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.options.timeout = Some(timeout);
        self
    }

    /// Build the options
    pub fn build(self) -> ClientOptions {
        self.options
    }
}

/// Apply the default endpoint and strip a trailing slash
pub(crate) fn normalize_endpoint(endpoint: Option<&str>) -> String {
    let endpoint = match endpoint {
        Some(e) if !e.is_empty() => e,
        _ => DEFAULT_ENDPOINT,
    };
    endpoint.strip_suffix('/').unwrap_or(endpoint).to_string()
}
