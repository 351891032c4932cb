/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! Authentication module for the M-Pesa API
//!
//! This module provides the bearer token cache:
//! - OAuth client-credentials exchange with HTTP Basic authentication
//! - Reuse of the cached token until its expiry instant
//! - Single-flight refresh: concurrent callers share one exchange

use crate::application::config::Config;
use crate::constants::OAUTH_PATH;
use crate::error::AppError;
use crate::model::auth::TokenResponse;
use crate::model::http::build_url;
use crate::utils::time::Clock;
use chrono::{DateTime, Duration, Utc};
use reqwest::{Client, StatusCode};
use std::sync::Arc;
use tokio::sync::Mutex;
use tracing::{debug, error, info};

/// Bearer token with its absolute expiry instant
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken {
    token: String,
    expires_at: DateTime<Utc>,
}

impl AccessToken {
    /// Creates a token valid until `expires_at`
    #[must_use]
    pub fn new(token: String, expires_at: DateTime<Utc>) -> Self {
        Self { token, expires_at }
    }

    /// Creates a token from an OAuth response received at `now`
    #[must_use]
    pub fn from_response(response: TokenResponse, now: DateTime<Utc>) -> Self {
        let expires_in = i64::try_from(response.expires_in).unwrap_or(i64::MAX);
        let expires_at = Duration::try_seconds(expires_in)
            .and_then(|d| now.checked_add_signed(d))
            .unwrap_or(DateTime::<Utc>::MAX_UTC);
        Self::new(response.access_token, expires_at)
    }

    /// Bearer token string
    #[must_use]
    pub fn token(&self) -> &str {
        &self.token
    }

    /// Instant from which the token must no longer be used
    #[must_use]
    pub fn expires_at(&self) -> DateTime<Utc> {
        self.expires_at
    }

    /// A token is usable only while `now < expires_at`
    #[must_use]
    pub fn is_valid_at(&self, now: DateTime<Utc>) -> bool {
        now < self.expires_at
    }
}

impl std::fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .finish()
    }
}

/// State of the token cache
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TokenState {
    /// No token has been fetched yet, or it was invalidated
    #[default]
    Empty,
    /// Token usable until its expiry
    Valid(AccessToken),
    /// Token past its expiry; must be re-fetched
    Expired(AccessToken),
}

impl TokenState {
    /// Moves a `Valid` token past its expiry to `Expired` and returns the
    /// token only if it is still usable at `now`
    pub fn ensure_valid(&mut self, now: DateTime<Utc>) -> Option<&AccessToken> {
        let expired = matches!(self, TokenState::Valid(token) if !token.is_valid_at(now));
        if expired {
            if let TokenState::Valid(token) = std::mem::take(self) {
                debug!("Access token expired at {}", token.expires_at());
                *self = TokenState::Expired(token);
            }
        }

        match self {
            TokenState::Valid(token) => Some(token),
            TokenState::Empty | TokenState::Expired(_) => None,
        }
    }
}

/// Authentication manager for the M-Pesa API
///
/// Owns the token cache of one client instance. The cache lock is held across
/// the check-then-fetch sequence, so a cold or expired cache triggers exactly
/// one OAuth exchange no matter how many tasks ask for a token at once.
pub struct Auth {
    config: Arc<Config>,
    client: Client,
    clock: Arc<dyn Clock>,
    state: Mutex<TokenState>,
}

impl Auth {
    /// Creates a new Auth instance
    ///
    /// # Arguments
    /// * `config` - Configuration containing credentials and base URL
    /// * `client` - HTTP client used for the OAuth exchange
    /// * `clock` - Time source for expiry checks
    pub fn new(config: Arc<Config>, client: Client, clock: Arc<dyn Clock>) -> Self {
        Self {
            config,
            client,
            clock,
            state: Mutex::new(TokenState::Empty),
        }
    }

    /// Returns a bearer token, reusing the cached one while it is valid
    ///
    /// # Returns
    /// * `Ok(String)` - Valid bearer token
    /// * `Err(AppError::AuthenticationFailure)` - OAuth endpoint did not return 200;
    ///   the caller must abort the enclosing operation
    pub async fn get_token(&self) -> Result<String, AppError> {
        let mut state = self.state.lock().await;

        if let Some(token) = state.ensure_valid(self.clock.now()) {
            debug!("Using cached access token");
            return Ok(token.token().to_string());
        }

        let token = self.fetch_token().await?;
        let value = token.token().to_string();
        *state = TokenState::Valid(token);
        Ok(value)
    }

    /// Snapshot of the cached token, if any
    pub async fn cached_token(&self) -> Option<AccessToken> {
        match &*self.state.lock().await {
            TokenState::Valid(token) | TokenState::Expired(token) => Some(token.clone()),
            TokenState::Empty => None,
        }
    }

    /// Current cache state
    pub async fn state(&self) -> TokenState {
        self.state.lock().await.clone()
    }

    /// Drops the cached token so the next request fetches a new one
    pub async fn invalidate(&self) {
        let mut state = self.state.lock().await;
        *state = TokenState::Empty;
        debug!("Access token cache cleared");
    }

    /// Performs the OAuth client-credentials exchange
    async fn fetch_token(&self) -> Result<AccessToken, AppError> {
        let url = build_url(&self.config.rest_api.base_url, OAUTH_PATH);

        info!("Requesting new access token");
        debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .basic_auth(
                &self.config.credentials.consumer_key,
                Some(self.config.credentials.consumer_secret.expose()),
            )
            .send()
            .await?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            error!("Access token request failed with status {}: {}", status, body);
            return Err(AppError::AuthenticationFailure { status, body });
        }

        let body = response.text().await?;
        let json: TokenResponse = match serde_json::from_str(&body) {
            Ok(json) => json,
            Err(e) => {
                error!("Access token response could not be decoded: {}", e);
                return Err(AppError::AuthenticationFailure { status, body });
            }
        };
        let token = AccessToken::from_response(json, self.clock.now());

        info!("✓ Access token obtained, expires at {}", token.expires_at());
        Ok(token)
    }
}
