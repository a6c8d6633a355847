//! HTTP request descriptors.

use bytes::Bytes;
use serde::Serialize;
use url::Url;

use crate::error::Result;

/// HTTP request method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl RequestMethod {
    /// Convert to reqwest::Method.
    pub fn to_reqwest(&self) -> reqwest::Method {
        match self {
            RequestMethod::Get => reqwest::Method::GET,
            RequestMethod::Post => reqwest::Method::POST,
            RequestMethod::Put => reqwest::Method::PUT,
            RequestMethod::Delete => reqwest::Method::DELETE,
        }
    }

    /// The method as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            RequestMethod::Get => "GET",
            RequestMethod::Post => "POST",
            RequestMethod::Put => "PUT",
            RequestMethod::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for RequestMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully described, single-use HTTP request.
///
/// Holds everything the transport needs: method, target URL (query included),
/// headers and an optional raw body. Building one performs no I/O.
#[derive(Debug, Clone)]
pub struct RequestBuilder {
    pub(crate) method: RequestMethod,
    pub(crate) url: Url,
    pub(crate) headers: Vec<(String, String)>,
    pub(crate) body: Option<Bytes>,
}

impl RequestBuilder {
    /// Create a new request builder.
    pub fn new(method: RequestMethod, url: Url) -> Self {
        Self {
            method,
            url,
            headers: Vec::new(),
            body: None,
        }
    }

    /// Set a header, replacing any previous value with the same name.
    ///
    /// Header names compare case-insensitively.
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        match self
            .headers
            .iter_mut()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(&name))
        {
            Some(slot) => slot.1 = value,
            None => self.headers.push((name, value)),
        }
        self
    }

    /// Append query pairs to the URL, percent-encoding each key and value.
    ///
    /// An empty iterator leaves the URL untouched (no dangling `?`).
    pub fn query_pairs<I, K, V>(mut self, pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut pairs = pairs.into_iter().peekable();
        if pairs.peek().is_some() {
            self.url.query_pairs_mut().extend_pairs(pairs);
        }
        self
    }

    /// Set a raw body, sent exactly as given.
    pub fn body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = Some(body.into());
        self
    }

    /// Serialize `body` as JSON and set it as the request body.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self> {
        let bytes = serde_json::to_vec(body)?;
        self.body = Some(Bytes::from(bytes));
        Ok(self.header("Content-Type", "application/json"))
    }

    /// The request method.
    pub fn method(&self) -> RequestMethod {
        self.method
    }

    /// The full target URL, query included.
    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Look up a header value by case-insensitive name.
    pub fn header_value(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// All headers in insertion order.
    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// The raw body, if any.
    pub fn body_bytes(&self) -> Option<&Bytes> {
        self.body.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url() -> Url {
        Url::parse("https://crm.example.com/api/v1/Contact").unwrap()
    }

    #[test]
    fn test_request_builder() {
        let req = RequestBuilder::new(RequestMethod::Get, url())
            .header("X-Api-Key", "abc123")
            .header("Content-Type", "application/json");

        assert_eq!(req.method(), RequestMethod::Get);
        assert_eq!(req.url().as_str(), "https://crm.example.com/api/v1/Contact");
        assert_eq!(req.header_value("x-api-key"), Some("abc123"));
        assert_eq!(req.headers().len(), 2);
        assert!(req.body_bytes().is_none());
    }

    #[test]
    fn test_header_replaces_case_insensitively() {
        let req = RequestBuilder::new(RequestMethod::Get, url())
            .header("content-type", "text/plain")
            .header("Content-Type", "application/json");

        assert_eq!(req.headers().len(), 1);
        assert_eq!(req.header_value("Content-Type"), Some("application/json"));
    }

    #[test]
    fn test_empty_query_pairs_leave_url_alone() {
        let req = RequestBuilder::new(RequestMethod::Get, url())
            .query_pairs(Vec::<(String, String)>::new());
        assert_eq!(req.url().query(), None);
        assert!(!req.url().as_str().ends_with('?'));
    }

    #[test]
    fn test_query_pairs_are_percent_encoded() {
        let req = RequestBuilder::new(RequestMethod::Get, url())
            .query_pairs([("where[0][value]", "a b&c"), ("maxSize", "10")]);
        assert_eq!(
            req.url().query(),
            Some("where%5B0%5D%5Bvalue%5D=a+b%26c&maxSize=10")
        );
    }

    #[test]
    fn test_json_body() {
        let req = RequestBuilder::new(RequestMethod::Post, url())
            .json(&serde_json::json!({"ids": ["2", "3"]}))
            .unwrap();

        assert_eq!(req.body_bytes().unwrap().as_ref(), br#"{"ids":["2","3"]}"#);
        assert_eq!(req.header_value("Content-Type"), Some("application/json"));
    }

    #[test]
    fn test_raw_body_is_untouched() {
        let payload = "{ \"name\":   \"Alice\" }";
        let req = RequestBuilder::new(RequestMethod::Put, url()).body(payload);
        assert_eq!(req.body_bytes().unwrap().as_ref(), payload.as_bytes());
    }

    #[test]
    fn test_method_strings() {
        assert_eq!(RequestMethod::Get.to_string(), "GET");
        assert_eq!(RequestMethod::Post.as_str(), "POST");
        assert_eq!(RequestMethod::Put.to_reqwest(), reqwest::Method::PUT);
        assert_eq!(RequestMethod::Delete.to_reqwest(), reqwest::Method::DELETE);
    }
}
