//! Core client: connection configuration and authenticated requests
//!
//! [`RagflowClient`] holds the base URL and the shared HTTP client carrying
//! the bearer-token Authorization header. Every public operation in the
//! resource modules funnels through the small set of transport helpers
//! defined here:
//!
//! ```text
//! operation
//!     │
//!     ├─> build /api/v1/... URL from the normalized base
//!     │
//!     ├─> issue one HTTP request (JSON body, query string, or multipart)
//!     │
//!     ├─> non-success status → Error::Api { status, body }
//!     │
//!     └─> success → decoded serde_json::Value, unmodified
//! ```
//!
//! The client is stateless beyond this read-only configuration: no retries,
//! no timeouts, no caching, and no coordination between calls. Cloning is
//! cheap and clones share the underlying connection pool, so callers that
//! want parallelism can fan out calls freely.

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use serde::Serialize;
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::{Error, Result};

/// Client for the RAGFlow REST API.
///
/// # Example
///
/// ```rust,no_run
/// use ragflow_client::RagflowClient;
///
/// # async fn example() -> ragflow_client::Result<()> {
/// let client = RagflowClient::new("http://localhost:5000", "ragflow-abc123")?;
///
/// let datasets = client.list_datasets(Default::default()).await?;
/// println!("{datasets}");
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct RagflowClient {
    /// Shared HTTP client carrying the Authorization header.
    http: reqwest::Client,
    /// Normalized base URL (always ends with a slash).
    base_url: Url,
}

impl RagflowClient {
    /// Create a client from a base endpoint and an API key.
    ///
    /// Shorthand for `RagflowClient::builder().base_url(..).api_key(..).build()`.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Result<Self> {
        Self::builder().base_url(base_url).api_key(api_key).build()
    }

    /// Create a new client builder.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// The normalized base URL this client talks to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    // ========================================================================
    // INTERNAL TRANSPORT
    // ========================================================================

    /// Build an absolute URL for an `/api/v1/` path.
    pub(crate) fn url(&self, path: &str) -> Result<Url> {
        let path = path.trim_start_matches('/');
        self.base_url
            .join(&format!("api/v1/{path}"))
            .map_err(Error::from)
    }

    /// GET with query parameters, expecting a JSON body back.
    pub(crate) async fn get_json<Q>(&self, path: &str, query: &Q) -> Result<Value>
    where
        Q: Serialize + ?Sized,
    {
        let url = self.url(path)?;
        debug!(method = "GET", %url, "dispatching request");
        let response = self.http.get(url).query(query).send().await?;
        Self::decode_response(response).await
    }

    /// POST with a JSON body.
    pub(crate) async fn post_json<B>(&self, path: &str, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path)?;
        debug!(method = "POST", %url, "dispatching request");
        let response = self.http.post(url).json(body).send().await?;
        Self::decode_response(response).await
    }

    /// PUT with a JSON body.
    pub(crate) async fn put_json<B>(&self, path: &str, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path)?;
        debug!(method = "PUT", %url, "dispatching request");
        let response = self.http.put(url).json(body).send().await?;
        Self::decode_response(response).await
    }

    /// DELETE with a JSON body naming the targets.
    pub(crate) async fn delete_json<B>(&self, path: &str, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let url = self.url(path)?;
        debug!(method = "DELETE", %url, "dispatching request");
        let response = self.http.delete(url).json(body).send().await?;
        Self::decode_response(response).await
    }

    /// POST a multipart form. The transport sets the boundary content type;
    /// only the Authorization default header rides along.
    pub(crate) async fn post_multipart(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<Value> {
        let url = self.url(path)?;
        debug!(method = "POST", %url, "dispatching multipart request");
        let response = self.http.post(url).multipart(form).send().await?;
        Self::decode_response(response).await
    }

    /// GET expecting a byte stream. Returns the status-checked response for
    /// the caller to consume incrementally.
    pub(crate) async fn get_stream(&self, path: &str) -> Result<reqwest::Response> {
        let url = self.url(path)?;
        debug!(method = "GET", %url, "dispatching streaming request");
        let response = self.http.get(url).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::api(status.as_u16(), body));
        }
        Ok(response)
    }

    /// Single decode path for every buffered response: non-success statuses
    /// become `Error::Api` with the body text verbatim, success bodies are
    /// parsed as JSON and returned unmodified.
    async fn decode_response(response: reqwest::Response) -> Result<Value> {
        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            return Err(Error::api(status.as_u16(), body));
        }
        Ok(serde_json::from_str(&body)?)
    }
}

/// Builder for [`RagflowClient`].
#[derive(Debug, Default)]
pub struct ClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    user_agent: Option<String>,
}

impl ClientBuilder {
    /// Create a new builder with no settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base endpoint of the RAGFlow server,
    /// e.g. `http://localhost:5000`.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API key used for the bearer-token Authorization header.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set a custom User-Agent string.
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.user_agent = Some(agent.into());
        self
    }

    /// Build the client.
    ///
    /// Normalizes the base URL so path joins are stable regardless of a
    /// trailing slash, and installs the Authorization header on the shared
    /// HTTP client.
    pub fn build(self) -> Result<RagflowClient> {
        let base_url = self
            .base_url
            .ok_or_else(|| Error::config("base_url is required"))?;
        let api_key = self
            .api_key
            .ok_or_else(|| Error::config("api_key is required"))?;

        let mut base_url = Url::parse(&base_url)?;
        if !base_url.path().ends_with('/') {
            base_url.set_path(&format!("{}/", base_url.path()));
        }

        let mut headers = HeaderMap::new();
        let value = HeaderValue::from_str(&format!("Bearer {api_key}"))
            .map_err(|_| Error::config("API key contains invalid header characters"))?;
        headers.insert(AUTHORIZATION, value);

        let user_agent = self
            .user_agent
            .unwrap_or_else(|| format!("ragflow-client/{}", env!("CARGO_PKG_VERSION")));

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(user_agent)
            .build()?;

        Ok(RagflowClient { http, base_url })
    }
}
