/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! # M-Pesa Client
//!
//! An authenticated client for the Safaricom M-Pesa (Daraja) API.
//!
//! The crate owns three pieces of recurring logic:
//! - an OAuth bearer token cache that reuses a token until it expires,
//! - the `SecurityCredential` encryptor used by initiator-privileged operations,
//! - a request dispatcher that attaches auth headers and returns the raw response body.
//!
//! Every payment operation (STK push, C2B, B2C, B2B, reversals, balance, QR,
//! Ratiba standing orders, Bill Manager, tax remittance) is a typed payload
//! builder on top of that dispatcher.
//!
//! ## Example
//! ```ignore
//! use mpesa_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! let body = client.express_payment(100, "254712345678", None, None, None).await?;
//! ```

/// Application layer: configuration, authentication, client and service interfaces
pub mod application;
/// Global constants: endpoint paths, defaults and environment variable names
pub mod constants;
/// Error types
pub mod error;
/// Installer that publishes a default `.env` template into a host project
pub mod install;
/// Request and response models
pub mod model;
/// Convenience re-exports
pub mod prelude;
/// Utilities: env helpers, logging, ids, phone numbers and clocks
pub mod utils;

/// Re-export of the configuration module at the crate root
pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
