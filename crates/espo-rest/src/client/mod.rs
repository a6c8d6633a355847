//! EspoCRM REST API client.
//!
//! Each operation comes in two forms: `build_*` assembles the authenticated
//! [`RequestBuilder`] without touching the network, and the plain method
//! builds and sends it, returning the raw response body.

use bytes::Bytes;
use url::Url;

use espocrm_auth::{require_credentials, Credentials};
use espocrm_client::{ClientConfig, EspoHttpClient, RequestBuilder, RequestMethod, API_PATH};

use crate::error::{Error, ErrorKind, Result};

mod crud;
mod relationships;

/// Environment variable holding the server address.
pub const ENV_URL: &str = "ESPOCRM_URL";

/// EspoCRM REST API client.
///
/// Holds only immutable configuration: the base URL (server address plus
/// `/api/v1`), the credentials and the HTTP client. Every call derives its
/// own URL from a copy of the base, so one instance can be shared freely
/// across tasks.
///
/// # Example
///
/// ```rust,ignore
/// use espocrm_rest::EspoRestClient;
///
/// let client = EspoRestClient::builder("https://crm.example.com")
///     .basic_auth("admin", "secret")
///     .build()?;
///
/// let contact = client.read("Contact", "5f1a...").await?;
/// client.update("Contact", "5f1a...", r#"{"lastName":"Smith"}"#).await?;
/// client.delete("Contact", "5f1a...").await?;
/// ```
#[derive(Debug, Clone)]
pub struct EspoRestClient {
    http: EspoHttpClient,
    base_url: Url,
    credentials: Option<Credentials>,
}

impl EspoRestClient {
    /// Create a new REST client with the given server address and credentials.
    pub fn new(url: impl Into<String>, credentials: Credentials) -> Result<Self> {
        Self::builder(url).credentials(credentials).build()
    }

    /// Start configuring a client for the given server address.
    pub fn builder(url: impl Into<String>) -> EspoRestClientBuilder {
        EspoRestClientBuilder::new(url)
    }

    /// Create a client from `ESPOCRM_URL` plus the credential variables read
    /// by [`Credentials::from_env`].
    pub fn from_env() -> Result<Self> {
        let url = std::env::var(ENV_URL).map_err(|_| {
            Error::from(espocrm_auth::Error::new(espocrm_auth::ErrorKind::EnvVar(
                ENV_URL.to_string(),
            )))
        })?;
        Self::new(url, Credentials::from_env()?)
    }

    /// The base URL every request path is appended to.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// The configured credentials, if any.
    pub fn credentials(&self) -> Option<&Credentials> {
        self.credentials.as_ref()
    }

    /// Get the underlying HTTP client.
    pub fn http(&self) -> &EspoHttpClient {
        &self.http
    }

    /// Base URL extended with the given path segments.
    ///
    /// Segments are percent-encoded individually, so a `/` inside an id
    /// stays inside that segment.
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        if let Some(empty) = segments.iter().position(|s| s.is_empty()) {
            return Err(Error::new(ErrorKind::InvalidInput(format!(
                "path segment {empty} is empty"
            ))));
        }

        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| {
                Error::new(ErrorKind::InvalidInput(format!(
                    "cannot append a path to {}",
                    self.base_url
                )))
            })?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// Authenticated JSON request for the given path.
    ///
    /// Missing credentials are reported before the path is validated.
    fn request(&self, method: RequestMethod, segments: &[&str]) -> Result<RequestBuilder> {
        let credentials = require_credentials(self.credentials.as_ref())?;
        let request = RequestBuilder::new(method, self.endpoint(segments)?)
            .header("Content-Type", "application/json");
        Ok(credentials.authorize(request))
    }

    async fn execute(&self, request: RequestBuilder) -> Result<Bytes> {
        self.http.execute(request).await.map_err(Into::into)
    }
}

/// Builder for [`EspoRestClient`].
///
/// Authentication options are mutually exclusive; the last one applied wins.
#[derive(Debug)]
pub struct EspoRestClientBuilder {
    url: String,
    credentials: Option<Credentials>,
    config: ClientConfig,
}

impl EspoRestClientBuilder {
    fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            credentials: None,
            config: ClientConfig::default(),
        }
    }

    /// Authenticate with an API key.
    pub fn api_key(self, key: impl Into<String>) -> Self {
        self.credentials(Credentials::api_key(key))
    }

    /// Authenticate with a username and password.
    pub fn basic_auth(self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials(Credentials::basic(username, password))
    }

    /// Use the given credentials.
    pub fn credentials(mut self, credentials: Credentials) -> Self {
        self.credentials = Some(credentials);
        self
    }

    /// Use a custom HTTP configuration.
    pub fn config(mut self, config: ClientConfig) -> Self {
        self.config = config;
        self
    }

    /// Validate the server address and build the client.
    ///
    /// Missing credentials are not an error here; they surface on the first
    /// call instead.
    pub fn build(self) -> Result<EspoRestClient> {
        let root = self.url.trim_end_matches('/');
        let base_url = Url::parse(&format!("{root}{API_PATH}"))
            .map_err(espocrm_client::Error::from)?;

        if base_url.cannot_be_a_base() {
            return Err(Error::new(ErrorKind::InvalidInput(format!(
                "not a base URL: {}",
                self.url
            ))));
        }

        let http = EspoHttpClient::new(self.config)?;
        Ok(EspoRestClient {
            http,
            base_url,
            credentials: self.credentials,
        })
    }
}
