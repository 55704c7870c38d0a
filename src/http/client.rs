//! Gumroad API client
//!
//! Every endpoint goes through one private executor that:
//! - Sends a `GET` to `endpoint + "/v2" + path`
//! - Puts the arguments and the access token in a form-encoded body
//! - Treats any status above 299 as an error
//! - Decodes the JSON body into the caller's response type

use crate::config::{normalize_endpoint, ClientOptions, API_VERSION_PREFIX, DEFAULT_TIMEOUT};
use crate::error::{Error, Result};
use crate::types::{GetProductsResponse, GetResourceSubscriptionsResponse, ResourceSubscription};
use reqwest::Response;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use url::Url;

/// Client for the Gumroad API
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Clone)]
pub struct Client {
    access_token: String,
    endpoint: String,
    http: reqwest::Client,
    timeout: Option<Duration>,
}

impl Client {
    /// Create a client with default options and no access token
    pub fn new() -> Self {
        Self::with_options(ClientOptions::default())
    }

    /// Create a client from options, filling in defaults for unset fields
    pub fn with_options(options: ClientOptions) -> Self {
        let ClientOptions {
            access_token,
            endpoint,
            http_client,
            timeout,
        } = options;

        let (http, timeout) = match http_client {
            Some(http) => (http, timeout),
            None => {
                let timeout = timeout.unwrap_or(DEFAULT_TIMEOUT);
                (default_transport(timeout), Some(timeout))
            }
        };

        Self {
            access_token,
            endpoint: normalize_endpoint(endpoint.as_deref()),
            http,
            timeout,
        }
    }

    /// Base URL requests are sent to, without a trailing slash
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Timeout applied to each request, if the client manages one
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// List the products of the authenticated user
    pub async fn get_products(&self, cancel: &CancellationToken) -> Result<GetProductsResponse> {
        self.get(cancel, "/products", &[]).await
    }

    /// List the webhook subscriptions registered for one event category
    ///
    /// `name` must be one of the [`ResourceSubscription`] tags. Anything else
    /// fails before a request is sent.
    pub async fn get_resource_subscriptions(
        &self,
        cancel: &CancellationToken,
        name: impl AsRef<str>,
    ) -> Result<GetResourceSubscriptionsResponse> {
        let name = ResourceSubscription::parse(name.as_ref())?;
        self.get(
            cancel,
            "/resource_subscriptions",
            &[("resource_name", name.as_str())],
        )
        .await
    }

    /// Send a GET with `args` and the access token form-encoded in the body.
    ///
    /// The API reads parameters from the body even on GET, so they must not
    /// move to the query string.
    async fn get<T: DeserializeOwned>(
        &self,
        cancel: &CancellationToken,
        path: &str,
        args: &[(&str, &str)],
    ) -> Result<T> {
        let url = self.build_url(path)?;

        let mut form: BTreeMap<&str, &str> = args.iter().copied().collect();
        form.insert("access_token", &self.access_token);

        let mut req = self.http.get(url.clone()).form(&form);
        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }
        let request = req.build().map_err(Error::RequestBuild)?;

        debug!("Requesting GET {}", url);

        let exchange = async {
            let response = self
                .http
                .execute(request)
                .await
                .map_err(|e| self.transport_error(e))?;
            self.decode(response).await
        };

        tokio::select! {
            biased;
            () = cancel.cancelled() => {
                debug!("Request cancelled: GET {}", url);
                Err(Error::Cancelled)
            }
            result = exchange => result,
        }
    }

    /// Check the status and decode the body of a response
    async fn decode<T: DeserializeOwned>(&self, response: Response) -> Result<T> {
        let status = response.status();
        let url = response.url().clone();

        if status.as_u16() > 299 {
            let body = response.text().await.unwrap_or_default();
            warn!("GET {} failed with status {}", url, status.as_u16());
            return Err(Error::http_status(status.as_u16(), body));
        }

        debug!("Request succeeded: GET {} ({})", url, status.as_u16());

        let body = response
            .bytes()
            .await
            .map_err(|e| self.transport_error(e))?;
        serde_json::from_slice(&body).map_err(Error::Decode)
    }

    /// Build the full URL of an API resource
    fn build_url(&self, path: &str) -> Result<Url> {
        Ok(Url::parse(&format!(
            "{}{}{}",
            self.endpoint, API_VERSION_PREFIX, path
        ))?)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn transport_error(&self, e: reqwest::Error) -> Error {
        match self.timeout {
            Some(timeout) if e.is_timeout() => Error::Timeout {
                timeout_ms: timeout.as_millis() as u64,
            },
            _ if e.is_builder() => Error::RequestBuild(e),
            _ => Error::Http(e),
        }
    }
}

impl Default for Client {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("access_token", &"<redacted>")
            .field("endpoint", &self.endpoint)
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

/// Transport used when the caller doesn't supply one
fn default_transport(timeout: Duration) -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(timeout)
        .user_agent(format!("gumroad-rs/{}", env!("CARGO_PKG_VERSION")))
        .build()
        .unwrap_or_else(|e| {
            // Requests still get the per-request timeout
            warn!("Failed to build HTTP client, using defaults: {}", e);
            reqwest::Client::new()
        })
}
