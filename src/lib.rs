//! # IEX Client
//!
//! A typed async client for the IEX Cloud REST API.
//!
//! Every endpoint is a free async function in [`application::services`] that
//! takes a [`model::http::Transport`] and explicit
//! [`model::requests::RequestOptions`] (token, version, filter). The same
//! endpoints are available as methods on [`application::client::Client`],
//! which supplies its configured token and version.
//!
//! The request core ([`model::http::get_json`]) builds
//! `<base>/<version>/<path>?token=<token>[&filter=<filter>]`, performs one GET
//! and decodes the JSON body. Non-2xx statuses fail with
//! [`error::AppError::Request`]. There is no retry, rate limiting or caching.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use iex_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AppError> {
//!     let client = Client::new(Config::with_token("pk_test"))?;
//!     let tickers = client.symbols_list().await?;
//!     let deep = client.deep("AAPL".into(), None).await?;
//!     println!("{} symbols, {}", tickers.len(), deep);
//!     Ok(())
//! }
//! ```

/// Client, configuration, service traits and endpoint functions
pub mod application;
/// Library constants
pub mod constants;
/// Error types
pub mod error;
/// Request and response models and the HTTP request core
pub mod model;
/// Commonly used types and traits
pub mod prelude;
/// Environment, logging and validation helpers
pub mod utils;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
