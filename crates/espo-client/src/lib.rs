//! # espocrm-client
//!
//! Core HTTP client infrastructure for the EspoCRM REST API.
//!
//! This crate provides the foundational pieces every API surface builds on:
//! - Request descriptors with headers, query pairs and raw bodies
//! - A thin `reqwest` transport that sends exactly one request per call
//! - Status checking with the server's `X-Status-Reason` text
//! - Request/response tracing
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    Application Layer                        │
//! │  (espocrm-rest: read, list, create, link, ...)              │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    RequestBuilder                           │
//! │  - Method, URL, headers, body                               │
//! │  - Authenticated by espocrm-auth                            │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │                    EspoHttpClient                           │
//! │  - Raw HTTP round trip                                      │
//! │  - 200-only success check                                   │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust,ignore
//! use espocrm_client::{ClientConfig, EspoHttpClient, RequestBuilder, RequestMethod};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), espocrm_client::Error> {
//!     let http = EspoHttpClient::new(ClientConfig::default())?;
//!
//!     let url = url::Url::parse("https://crm.example.com/api/v1/Contact/1")?;
//!     let request = RequestBuilder::new(RequestMethod::Get, url)
//!         .header("X-Api-Key", "abc123");
//!
//!     let body = http.execute(request).await?;
//!     println!("{}", String::from_utf8_lossy(&body));
//!     Ok(())
//! }
//! ```

mod client;
mod config;
mod error;
mod request;
mod response;

pub use client::EspoHttpClient;
pub use config::{ClientConfig, ClientConfigBuilder};
pub use error::{Error, ErrorKind, Result};
pub use request::{RequestBuilder, RequestMethod};
pub use response::Response;

/// Versioned API root appended to every server address.
pub const API_PATH: &str = "/api/v1";

/// Header carrying the server's human-readable failure reason.
pub const STATUS_REASON_HEADER: &str = "X-Status-Reason";

/// User-Agent string for the client
pub const USER_AGENT: &str = concat!("espocrm-api/", env!("CARGO_PKG_VERSION"));
