//! Credentials and request authentication.
//!
//! All credential types implement custom Debug to redact sensitive data.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use espocrm_client::{ErrorKind as ClientErrorKind, RequestBuilder};
use tracing::debug;

use crate::error::{Error, ErrorKind, Result};
use crate::{API_KEY_HEADER, AUTHORIZATION_HEADER, ENV_API_KEY, ENV_PASSWORD, ENV_USERNAME};

/// Credentials for the EspoCRM API.
///
/// Exactly one strategy is active. A client without credentials holds
/// `Option::<Credentials>::None` and fails at send time.
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    /// API-key authentication (`X-Api-Key` header).
    ApiKey(String),
    /// Basic authentication (`Authorization: Basic ...` header).
    Basic { username: String, password: String },
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::ApiKey(_) => f.debug_tuple("ApiKey").field(&"[REDACTED]").finish(),
            Credentials::Basic { username, .. } => f
                .debug_struct("Basic")
                .field("username", username)
                .field("password", &"[REDACTED]")
                .finish(),
        }
    }
}

impl Credentials {
    /// API-key credentials.
    pub fn api_key(key: impl Into<String>) -> Self {
        Credentials::ApiKey(key.into())
    }

    /// Basic (username + password) credentials.
    pub fn basic(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials::Basic {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Load credentials from environment variables.
    ///
    /// Checked in order:
    /// - `ESPOCRM_API_KEY`
    /// - `ESPOCRM_USERNAME` and `ESPOCRM_PASSWORD`
    ///
    /// A variable that is set but empty is rejected.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load credentials through an arbitrary variable lookup.
    ///
    /// Same rules as [`Credentials::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |name: &str| -> Result<Option<String>> {
            match lookup(name) {
                Some(value) if value.is_empty() => Err(Error::new(
                    ErrorKind::InvalidCredentials(format!("{name} is empty")),
                )),
                other => Ok(other),
            }
        };

        if let Some(key) = non_empty(ENV_API_KEY)? {
            debug!(strategy = "api_key", "Loaded credentials");
            return Ok(Self::api_key(key));
        }

        let username = non_empty(ENV_USERNAME)?
            .ok_or_else(|| {
                Error::new(ErrorKind::EnvVar(format!("{ENV_API_KEY} or {ENV_USERNAME}")))
            })?;
        let password = non_empty(ENV_PASSWORD)?
            .ok_or_else(|| Error::new(ErrorKind::EnvVar(ENV_PASSWORD.to_string())))?;

        debug!(strategy = "basic", "Loaded credentials");
        Ok(Self::basic(username, password))
    }

    /// Returns true for API-key credentials.
    pub fn is_api_key(&self) -> bool {
        matches!(self, Credentials::ApiKey(_))
    }

    /// The header name and value these credentials produce.
    pub fn header(&self) -> (&'static str, String) {
        match self {
            Credentials::ApiKey(key) => (API_KEY_HEADER, key.clone()),
            Credentials::Basic { username, password } => {
                let encoded = STANDARD.encode(format!("{username}:{password}"));
                (AUTHORIZATION_HEADER, format!("Basic {encoded}"))
            }
        }
    }

    /// Attach the authentication header to a request.
    pub fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        let (name, value) = self.header();
        request.header(name, value)
    }
}

/// The configured credentials, or the missing-credentials error.
///
/// Callers check this before building anything else, so a client without
/// credentials reports that first and never reaches the network.
pub fn require_credentials(
    credentials: Option<&Credentials>,
) -> espocrm_client::Result<&Credentials> {
    credentials.ok_or_else(|| espocrm_client::Error::new(ClientErrorKind::MissingCredentials))
}
