//! # espocrm-rest
//!
//! EspoCRM REST API client with CRUD, list queries and relationship support.
//!
//! ## Features
//!
//! - **Record CRUD** - Create, Read, Update, Delete individual records
//! - **List** - Filtered, sorted and paginated listing via [`Parameters`]
//! - **Relationships** - List related records, link and unlink
//!
//! Every operation returns the raw response body. Decoding is left to the
//! caller.
//!
//! ## Example
//!
//! ```rust,ignore
//! use espocrm_rest::{EspoRestClient, FilterType, Order, Parameters, Where};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), espocrm_rest::Error> {
//!     let client = EspoRestClient::builder("https://crm.example.com")
//!         .api_key("abc123")
//!         .build()?;
//!
//!     // List
//!     let params = Parameters::new()
//!         .max_size(10)
//!         .order_by("createdAt")
//!         .order(Order::Descending)
//!         .where_condition(Where::new(FilterType::Equals, "lastName", "Smith"));
//!     let contacts = client.list("Contact", Some(&params)).await?;
//!
//!     // Create
//!     let created = client.create("Contact", r#"{"firstName":"Alice"}"#).await?;
//!
//!     // Link
//!     client.link("Contact", "1", "opportunities", &["2", "3"]).await?;
//!
//!     Ok(())
//! }
//! ```

mod client;
mod error;
mod filter;
mod parameters;

// Main client
pub use client::{EspoRestClient, EspoRestClientBuilder, ENV_URL};

// Error types
pub use error::{Error, ErrorKind, Result};

// Query parameters
pub use filter::{FilterType, Where};
pub use parameters::{encode_query, Order, Parameters};

// Re-export espocrm-client / espocrm-auth types that users might need
pub use espocrm_auth::Credentials;
pub use espocrm_client::{ClientConfig, ClientConfigBuilder, RequestBuilder, RequestMethod};
