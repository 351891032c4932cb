// Common utilities for integration tests

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::{DateTime, TimeZone, Utc};
use mockito::{Matcher, Mock, ServerGuard};
use mpesa_client::prelude::*;
use rsa::pkcs8::DecodePrivateKey;
use rsa::{Pkcs1v15Encrypt, RsaPrivateKey};
use std::path::PathBuf;

pub const TOKEN: &str = "test-access-token";
pub const PASSKEY: &str = "bfb279f9aa9bdbcf158e97dd71a467cd2e0c893059b10f78e6b72ada1ed2c919";
pub const INITIATOR_PASSWORD: &str = "Safaricom999!*!";

pub fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// Fixed instant the test clock starts at
pub fn start_time() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 20, 7, 15, 0).unwrap()
}

/// Configuration with every optional value filled in, pointing at `server_url`
pub fn full_config(server_url: &str) -> Config {
    let mut config = Config::minimal("test-key", "test-secret", server_url);
    config.paybill_number = Some("600999".to_string());
    config.lipa_na_mpesa.shortcode = Some("174379".to_string());
    config.lipa_na_mpesa.passkey = Some(PASSKEY.into());
    config.lipa_na_mpesa.callback_url = Some("https://example.com/stk".to_string());
    config.initiator.username = Some("testapi".to_string());
    config.initiator.password = Some(INITIATOR_PASSWORD.into());
    config.callbacks.callback_url = Some("https://example.com/callback".to_string());
    config.callbacks.confirmation_url = Some("https://example.com/confirm".to_string());
    config.callbacks.validation_url = Some("https://example.com/validate".to_string());
    config.callbacks.queue_timeout_url = Some("https://example.com/timeout".to_string());
    config.callbacks.result_url = Some("https://example.com/result".to_string());
    config.certificates.sandbox_path = fixture("test_initiator_cert.cer");
    config
}

/// Creates a test client reading time from a manual clock
pub fn create_test_client(config: Config) -> (Client, Arc<ManualClock>) {
    setup_logger();
    let clock = Arc::new(ManualClock::new(start_time()));
    let client = Client::with_clock(config, clock.clone()).expect("client builds");
    (client, clock)
}

/// Mocks the OAuth endpoint, expecting `hits` calls with the test credentials
pub async fn mock_oauth(server: &mut ServerGuard, hits: usize) -> Mock {
    server
        .mock("GET", "/oauth/v1/generate")
        .match_query(Matcher::UrlEncoded(
            "grant_type".into(),
            "client_credentials".into(),
        ))
        .match_header(
            "authorization",
            format!("Basic {}", STANDARD.encode("test-key:test-secret")).as_str(),
        )
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(format!(
            r#"{{"access_token":"{TOKEN}","expires_in":"3599"}}"#
        ))
        .expect(hits)
        .create_async()
        .await
}

/// Mocks `path` so the response body is the request body, letting a test
/// inspect the payload the client built
pub async fn mock_echo(server: &mut ServerGuard, path: &str) -> Mock {
    server
        .mock("POST", path)
        .match_header("authorization", format!("Bearer {TOKEN}").as_str())
        .match_header("content-type", "application/json")
        .with_status(200)
        .with_body_from_request(|request| request.body().cloned().unwrap_or_default())
        .create_async()
        .await
}

/// Decrypts a `SecurityCredential` with the test private key
pub fn decrypt_credential(credential: &str) -> String {
    let pem = std::fs::read_to_string(fixture("test_initiator_key.pem")).unwrap();
    let private_key = RsaPrivateKey::from_pkcs8_pem(&pem).unwrap();
    let ciphertext = STANDARD.decode(credential).unwrap();
    String::from_utf8(private_key.decrypt(Pkcs1v15Encrypt, &ciphertext).unwrap()).unwrap()
}
