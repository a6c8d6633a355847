//! HTTP response handling.

use std::borrow::Cow;

use bytes::Bytes;

use crate::error::{Error, Result};
use crate::STATUS_REASON_HEADER;

/// Wrapper around an HTTP response.
#[derive(Debug)]
pub struct Response {
    inner: reqwest::Response,
}

impl Response {
    pub(crate) fn new(inner: reqwest::Response) -> Self {
        Self { inner }
    }

    /// Get the HTTP status code.
    pub fn status(&self) -> u16 {
        self.inner.status().as_u16()
    }

    /// Returns true only for 200 OK.
    ///
    /// Other 2xx codes (201, 204) count as failures. The API documents 200 for
    /// every CRUD call and callers rely on that.
    pub fn is_ok(&self) -> bool {
        self.status() == 200
    }

    /// Get a header value.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.inner.headers().get(name)?.to_str().ok()
    }

    /// Get the `X-Status-Reason` header value.
    ///
    /// Decoded lossily, so a reason with non-ASCII bytes is kept.
    pub fn status_reason(&self) -> Option<Cow<'_, str>> {
        let value = self.inner.headers().get(STATUS_REASON_HEADER)?;
        Some(String::from_utf8_lossy(value.as_bytes()))
    }

    /// Turn a non-200 response into an error, discarding its body.
    pub fn error_for_status(self) -> Result<Self> {
        if self.is_ok() {
            return Ok(self);
        }
        let reason = self
            .status_reason()
            .map(Cow::into_owned)
            .unwrap_or_default();
        Err(Error::http(self.status(), reason))
    }

    /// Get the response body as bytes.
    pub async fn bytes(self) -> Result<Bytes> {
        self.inner.bytes().await.map_err(Into::into)
    }
}
