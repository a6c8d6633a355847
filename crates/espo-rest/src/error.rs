//! Error types for espocrm-rest.

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
#[error("{kind}")]
pub struct Error {
    pub kind: ErrorKind,
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl Error {
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind, source: None }
    }

    /// The underlying client error, if this error came from the HTTP layer.
    pub fn client_error(&self) -> Option<&espocrm_client::Error> {
        self.source.as_deref()?.downcast_ref()
    }

    /// HTTP status of a non-200 response.
    pub fn status(&self) -> Option<u16> {
        self.client_error()?.status()
    }

    /// Returns true if the server answered 404.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }

    /// Returns true if the server rejected the credentials (401 or 403).
    pub fn is_auth_error(&self) -> bool {
        self.client_error()
            .is_some_and(espocrm_client::Error::is_auth_error)
    }

    /// Returns true if the client had no credentials to send.
    pub fn is_missing_credentials(&self) -> bool {
        self.client_error()
            .is_some_and(espocrm_client::Error::is_missing_credentials)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ErrorKind {
    #[error("Client error: {0}")]
    Client(String),
    #[error("Auth error: {0}")]
    Auth(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl From<espocrm_client::Error> for Error {
    fn from(err: espocrm_client::Error) -> Self {
        Error { kind: ErrorKind::Client(err.to_string()), source: Some(Box::new(err)) }
    }
}

impl From<espocrm_auth::Error> for Error {
    fn from(err: espocrm_auth::Error) -> Self {
        Error { kind: ErrorKind::Auth(err.to_string()), source: Some(Box::new(err)) }
    }
}
