/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! Authenticated client for the M-Pesa API
//!
//! The client owns the configuration, the token cache and the HTTP
//! transport. Every payment operation (see [`crate::application::interfaces`])
//! builds a typed payload and hands it to [`Client::send`].
//!
//! # Example
//! ```ignore
//! use mpesa_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//!
//! // Authentication is handled on the first request
//! let body = client.account_balance("Balance check").await?;
//! ```

use crate::application::auth::Auth;
use crate::application::config::Config;
use crate::application::security::SecurityCredential;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::model::http::{build_url, make_http_request, parse_method};
use crate::model::requests::stk_password;
use crate::utils::time::{Clock, SystemClock, mpesa_timestamp};
use reqwest::Client as HttpClient;
use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

/// Shortcode, password and timestamp shared by STK push and STK query
#[derive(Debug, Clone)]
pub(crate) struct StkAuth {
    pub shortcode: String,
    pub password: String,
    pub timestamp: String,
}

/// Client for the M-Pesa API with automatic authentication
///
/// One instance owns one token cache. Share it across tasks with
/// `Arc<Client>`; concurrent refreshes are serialised by the cache.
pub struct Client {
    auth: Arc<Auth>,
    http_client: HttpClient,
    config: Arc<Config>,
    clock: Arc<dyn Clock>,
}

impl Client {
    /// Creates a new client. No network call is made until the first request.
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and API settings
    ///
    /// # Returns
    /// * `Ok(Client)` - Client ready to use
    /// * `Err(AppError)` - If the HTTP transport cannot be built
    pub fn new(config: Config) -> Result<Self, AppError> {
        Self::with_clock(config, Arc::new(SystemClock))
    }

    /// Creates a new client reading time from `clock`
    ///
    /// The clock drives token expiry and the STK push `Timestamp`.
    pub fn with_clock(config: Config, clock: Arc<dyn Clock>) -> Result<Self, AppError> {
        let config = Arc::new(config);

        let mut builder = HttpClient::builder().user_agent(USER_AGENT);
        if let Some(secs) = config.rest_api.timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let http_client = builder.build()?;

        let auth = Arc::new(Auth::new(
            config.clone(),
            http_client.clone(),
            clock.clone(),
        ));

        Ok(Self {
            auth,
            http_client,
            config,
            clock,
        })
    }

    /// Configuration this client was built with
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Gets Auth reference
    pub fn auth(&self) -> &Auth {
        &self.auth
    }

    /// Returns a valid bearer token, fetching one if the cache is empty or expired
    pub async fn get_token(&self) -> Result<String, AppError> {
        self.auth.get_token().await
    }

    /// Sends `body` as JSON to `{base_url}{path}` with bearer authentication
    ///
    /// # Arguments
    /// * `path` - API path relative to the base URL
    /// * `method` - HTTP verb, e.g. `"POST"`
    /// * `body` - Request body to serialize as JSON
    ///
    /// # Returns
    /// * `Ok(String)` - Response body, verbatim, whatever the status
    /// * `Err(AppError::InvalidRequest)` - Missing HTTP verb; nothing was sent
    /// * `Err(AppError::AuthenticationFailure)` - No token could be obtained
    /// * `Err(AppError::Http)` - Transport failure
    pub async fn send<B: Serialize + ?Sized>(
        &self,
        path: &str,
        method: &str,
        body: &B,
    ) -> Result<String, AppError> {
        let method = parse_method(method)?;
        let token = self.auth.get_token().await?;

        let url = build_url(&self.config.rest_api.base_url, path);
        let authorization = format!("Bearer {token}");
        let headers = vec![
            ("Authorization", authorization.as_str()),
            ("Content-Type", "application/json"),
            ("Accept", "application/json"),
        ];

        make_http_request(&self.http_client, method, &url, headers, Some(body)).await
    }

    /// Encrypts the configured initiator password for the configured environment
    ///
    /// Computed on every call; never cached.
    pub fn security_credential(&self) -> Result<SecurityCredential, AppError> {
        let password = self.config.initiator_password()?;
        debug!(
            "Encrypting initiator password for {} environment",
            self.config.environment
        );
        SecurityCredential::generate(password, &self.config.certificate_source())
    }

    /// Current `YYYYMMDDHHmmss` timestamp, East Africa Time
    pub fn timestamp(&self) -> String {
        mpesa_timestamp(self.clock.now())
    }

    /// Shortcode, password and timestamp for STK push requests
    pub(crate) fn stk_auth(&self) -> Result<StkAuth, AppError> {
        let shortcode = self.config.lipa_na_mpesa_shortcode()?;
        let passkey = self.config.lipa_na_mpesa_passkey()?;
        let timestamp = self.timestamp();
        Ok(StkAuth {
            shortcode: shortcode.to_string(),
            password: stk_password(shortcode, passkey, &timestamp),
            timestamp,
        })
    }
}
