//! Main QB Reader API client implementation.

use crate::api::*;
use crate::config::ClientConfig;
use qbreader_core::{QbError, Result};
use reqwest::Client as HttpClient;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, instrument, warn};
use url::Url;

/// Main QB Reader API client
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Clone)]
pub struct QbReaderClient {
    inner: Arc<ClientInner>,
}

struct ClientInner {
    http: HttpClient,
    base_url: String,
}

impl std::fmt::Debug for QbReaderClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QbReaderClient")
            .field("base_url", &self.inner.base_url)
            .finish_non_exhaustive()
    }
}

impl QbReaderClient {
    /// Create a client for the public QB Reader API using default settings
    pub fn new() -> Result<Self> {
        QbReaderClientBuilder::new().build()
    }

    /// Create a builder for custom configuration
    #[must_use]
    pub fn builder() -> QbReaderClientBuilder {
        QbReaderClientBuilder::new()
    }

    /// Base URL requests are sent to
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.base_url
    }

    /// Search the question database
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let results = client
    ///     .query("mitochondria")
    ///     .question_type(QuestionType::Tossup)
    ///     .categories([Category::Science])
    ///     .send()
    ///     .await?;
    /// println!("{} tossups matched", results.tossup_count);
    /// ```
    #[must_use]
    pub fn query(&self, query: impl Into<String>) -> QueryRequestBuilder<'_> {
        QueryRequestBuilder::new(self, query.into())
    }

    /// Access random question and set name endpoints
    #[must_use]
    pub fn random(&self) -> RandomApi<'_> {
        RandomApi::new(self)
    }

    /// Access packet endpoints
    #[must_use]
    pub fn packets(&self) -> PacketApi<'_> {
        PacketApi::new(self)
    }

    /// Access set listing endpoints
    #[must_use]
    pub fn sets(&self) -> SetApi<'_> {
        SetApi::new(self)
    }

    /// Access multiplayer room endpoints
    #[must_use]
    pub fn rooms(&self) -> RoomApi<'_> {
        RoomApi::new(self)
    }

    /// Access question reporting endpoints
    #[must_use]
    pub fn report(&self) -> ReportApi<'_> {
        ReportApi::new(self)
    }

    /// Perform a GET request
    pub(crate) async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        self.get_with_query(path, &[]).await
    }

    /// Perform a GET request with query parameters
    #[instrument(skip(self), level = "debug")]
    pub(crate) async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, String)],
    ) -> Result<T> {
        let url = self.build_url(path, params)?;
        debug!(url = %url, "GET request");

        let response = self
            .inner
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| QbError::Http(e.to_string()))?;

        self.handle_response(response).await
    }

    /// Perform a POST request with a JSON body, ignoring the response body
    #[instrument(skip(self, body), level = "debug")]
    pub(crate) async fn post_json<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let url = self.build_url(path, &[])?;
        debug!(url = %url, "POST request");

        let response = self
            .inner
            .http
            .post(url)
            .json(body)
            .send()
            .await
            .map_err(|e| QbError::Http(e.to_string()))?;

        self.handle_empty_response(response).await
    }

    /// Build a URL from the base, an endpoint path and query parameters
    fn build_url(&self, path: &str, params: &[(&str, String)]) -> Result<Url> {
        let mut url = Url::parse(&format!("{}{}", self.inner.base_url, path))
            .map_err(|e| QbError::InvalidUrl(e.to_string()))?;

        if !params.is_empty() {
            url.query_pairs_mut()
                .extend_pairs(params.iter().map(|(key, value)| (*key, value.as_str())));
        }

        Ok(url)
    }

    /// Handle an API response that returns JSON
    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            let body = response
                .text()
                .await
                .map_err(|e| QbError::Http(e.to_string()))?;
            serde_json::from_str(&body).map_err(QbError::Json)
        } else {
            self.handle_error(status.as_u16(), response).await
        }
    }

    /// Handle an API response that returns no body
    async fn handle_empty_response(&self, response: reqwest::Response) -> Result<()> {
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            self.handle_error(status.as_u16(), response).await
        }
    }

    /// Convert an error response to a `QbError`
    async fn handle_error<T>(&self, status: u16, response: reqwest::Response) -> Result<T> {
        let path = response.url().path().to_string();
        let body = response.text().await.unwrap_or_default();

        // The API reports errors either as JSON `{ "error": ... }` or as plain text
        let message = serde_json::from_str::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(String::from))
            .unwrap_or(body);

        match status {
            404 => Err(QbError::NotFound {
                resource: if message.is_empty() { path } else { message },
            }),
            429 => {
                warn!("Rate limited by QB Reader API");
                Err(QbError::RateLimited)
            }
            _ => Err(QbError::Api {
                code: status,
                message,
            }),
        }
    }
}

/// Builder for configuring a [`QbReaderClient`]
#[derive(Debug, Clone, Default)]
pub struct QbReaderClientBuilder {
    config: ClientConfig,
}

impl QbReaderClientBuilder {
    /// Create a new builder with default settings
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration, e.g. [`ClientConfig::from_env`]
    #[must_use]
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the base URL (useful for testing)
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.config = self.config.base_url(url);
        self
    }

    /// Set the request timeout
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config = self.config.timeout(timeout);
        self
    }

    /// Set the User-Agent header
    #[must_use]
    pub fn user_agent(mut self, agent: impl Into<String>) -> Self {
        self.config = self.config.user_agent(agent);
        self
    }

    /// Build the client
    pub fn build(self) -> Result<QbReaderClient> {
        Url::parse(&self.config.base_url).map_err(|e| QbError::InvalidUrl(e.to_string()))?;

        let http = HttpClient::builder()
            .timeout(self.config.timeout)
            .user_agent(&self.config.user_agent)
            .gzip(true)
            .build()
            .map_err(|e| QbError::Config(format!("failed to build HTTP client: {e}")))?;

        Ok(QbReaderClient {
            inner: Arc::new(ClientInner {
                http,
                base_url: self.config.base_url,
            }),
        })
    }
}
