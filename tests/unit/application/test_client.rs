use chrono::{TimeZone, Utc};
use mpesa_client::application::auth::TokenState;
use mpesa_client::application::client::Client;
use mpesa_client::config::Config;
use mpesa_client::error::AppError;
use mpesa_client::utils::time::ManualClock;
use serde_json::json;
use std::sync::Arc;
use tokio_test::block_on;

// Nothing listens here; any request that reaches the network fails with AppError::Http
const UNREACHABLE: &str = "http://127.0.0.1:9";

fn client_at(config: Config) -> Client {
    let clock = Arc::new(ManualClock::new(
        Utc.with_ymd_and_hms(2024, 2, 29, 21, 30, 15).unwrap(),
    ));
    Client::with_clock(config, clock).unwrap()
}

#[test]
fn test_client_new_makes_no_request() {
    let client = Client::new(Config::minimal("key", "secret", UNREACHABLE));
    assert!(client.is_ok());
}

#[test]
fn test_timestamp_uses_client_clock() {
    let client = client_at(Config::minimal("key", "secret", UNREACHABLE));
    assert_eq!(client.timestamp(), "20240301003015");
}

#[tokio::test]
async fn test_send_without_method_is_invalid_request() {
    let client = client_at(Config::minimal("key", "secret", UNREACHABLE));
    let result = client.send("/mpesa/c2b/v1/simulate", "", &json!({})).await;
    assert!(matches!(result, Err(AppError::InvalidRequest(_))));
}

#[test]
fn test_security_credential_requires_password() {
    let client = client_at(Config::minimal("key", "secret", UNREACHABLE));
    let err = client.security_credential().unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
}

#[test]
fn test_cache_starts_empty() {
    let client = client_at(Config::minimal("key", "secret", UNREACHABLE));
    assert!(block_on(client.auth().cached_token()).is_none());
    assert_eq!(block_on(client.auth().state()), TokenState::Empty);
}
