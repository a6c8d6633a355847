//! # espocrm-auth
//!
//! Authentication for the EspoCRM REST API.
//!
//! ## Security
//!
//! - API keys and passwords are redacted in Debug output
//! - Tracing/logging never records credential values
//! - Error messages name missing variables, never their contents
//!
//! ## Supported Authentication Methods
//!
//! - **API key** - sent as the `X-Api-Key` header
//! - **Basic** - `username:password`, base64-encoded into `Authorization: Basic ...`
//!
//! ## Example
//!
//! ```rust,ignore
//! use espocrm_auth::Credentials;
//!
//! fn main() -> Result<(), espocrm_auth::Error> {
//!     // Explicit
//!     let creds = Credentials::api_key("abc123");
//!
//!     // From ESPOCRM_API_KEY, or ESPOCRM_USERNAME + ESPOCRM_PASSWORD
//!     let creds = Credentials::from_env()?;
//!
//!     Ok(())
//! }
//! ```

mod credentials;
mod error;

pub use credentials::{require_credentials, Credentials};
pub use error::{Error, ErrorKind, Result};

/// Header used for API-key authentication.
pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Header used for basic authentication.
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// Environment variable holding an API key.
pub const ENV_API_KEY: &str = "ESPOCRM_API_KEY";

/// Environment variable holding a basic-auth username.
pub const ENV_USERNAME: &str = "ESPOCRM_USERNAME";

/// Environment variable holding a basic-auth password.
pub const ENV_PASSWORD: &str = "ESPOCRM_PASSWORD";
