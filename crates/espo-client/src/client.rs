//! Core HTTP client: one request in, one checked response out.

use bytes::Bytes;
use tracing::{debug, instrument};

use crate::config::ClientConfig;
use crate::error::{Error, ErrorKind, Result};
use crate::request::RequestBuilder;
use crate::response::Response;

/// HTTP client for the EspoCRM API.
///
/// Sends each request exactly once. No retries, no caching.
#[derive(Debug, Clone)]
pub struct EspoHttpClient {
    inner: reqwest::Client,
    config: ClientConfig,
}

impl EspoHttpClient {
    /// Create a new HTTP client with the given configuration.
    pub fn new(config: ClientConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder().user_agent(&config.user_agent);

        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(timeout) = config.connect_timeout {
            builder = builder.connect_timeout(timeout);
        }

        let inner = builder
            .build()
            .map_err(|e| Error::with_source(ErrorKind::Config(e.to_string()), e))?;

        Ok(Self { inner, config })
    }

    /// Create a new HTTP client with default configuration.
    pub fn default_client() -> Result<Self> {
        Self::new(ClientConfig::default())
    }

    /// Get the client configuration.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a request and return the raw response without checking its status.
    pub async fn send(&self, request: RequestBuilder) -> Result<Response> {
        let mut req = self
            .inner
            .request(request.method.to_reqwest(), request.url.clone());

        for (name, value) in &request.headers {
            req = req.header(name.as_str(), value.as_str());
        }

        if let Some(body) = request.body {
            req = req.body(body);
        }

        if self.config.enable_tracing {
            debug!(
                method = %request.method,
                url = %request.url,
                "Sending request"
            );
        }

        let response = req.send().await?;

        if self.config.enable_tracing {
            debug!(
                status = response.status().as_u16(),
                content_length = response.content_length(),
                "Response received"
            );
        }

        Ok(Response::new(response))
    }

    /// Send a request and return the body of a 200 response unchanged.
    ///
    /// Any other status becomes [`ErrorKind::Http`] carrying the
    /// `X-Status-Reason` header; the body of that response is dropped.
    #[instrument(skip(self, request), fields(method = %request.method, url = %request.url))]
    pub async fn execute(&self, request: RequestBuilder) -> Result<Bytes> {
        let response = self.send(request).await?.error_for_status()?;
        response.bytes().await
    }
}
