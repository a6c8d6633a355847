//! # espocrm-api
//!
//! An EspoCRM REST API client library for Rust.
//!
//! Maps record operations (read, list, create, update, delete, link, unlink,
//! list related) onto the EspoCRM REST API, attaching API-key or basic
//! authentication and encoding filter, sort and pagination options into the
//! query string.
//!
//! ## Security
//!
//! - API keys and passwords are redacted in Debug output
//! - Tracing spans skip credentials and payloads
//! - Error messages carry only the status code and the server's reason header
//!
//! ## Crates
//!
//! - **espocrm-client** - Core HTTP client: request builder, response status handling, errors
//! - **espocrm-auth** - Authentication: API key and basic credentials, env loading
//! - **espocrm-rest** - REST API: CRUD, list queries, relationships
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use espocrm_api::{EspoRestClient, FilterType, Order, Parameters, Where};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = EspoRestClient::builder("https://crm.example.com")
//!         .api_key("your-api-key")
//!         .build()?;
//!
//!     let params = Parameters::new()
//!         .max_size(10)
//!         .order_by("createdAt")
//!         .order(Order::Descending)
//!         .where_condition(Where::new(FilterType::Equals, "status", "New"));
//!
//!     let body = client.list("Lead", Some(&params)).await?;
//!     let leads: serde_json::Value = serde_json::from_slice(&body)?;
//!     println!("{}", leads["total"]);
//!
//!     Ok(())
//! }
//! ```

#[cfg(feature = "auth")]
pub use espocrm_auth as auth;
#[cfg(feature = "client")]
pub use espocrm_client as client;
#[cfg(feature = "rest")]
pub use espocrm_rest as rest;

#[cfg(feature = "auth")]
pub use espocrm_auth::Credentials;
#[cfg(feature = "client")]
pub use espocrm_client::{ClientConfig, EspoHttpClient};
#[cfg(feature = "rest")]
pub use espocrm_rest::{EspoRestClient, FilterType, Order, Parameters, Where};
