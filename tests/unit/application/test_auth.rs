use chrono::{Duration, TimeZone, Utc};
use mpesa_client::application::auth::{AccessToken, TokenState};
use mpesa_client::model::auth::TokenResponse;

#[test]
fn test_access_token_expiry_from_response() {
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
    let token = AccessToken::from_response(
        TokenResponse {
            access_token: "abc".to_string(),
            expires_in: 3599,
        },
        now,
    );

    assert_eq!(token.token(), "abc");
    assert_eq!(token.expires_at(), now + Duration::seconds(3599));
}

#[test]
fn test_access_token_invalid_at_expiry_instant() {
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
    let token = AccessToken::new("abc".to_string(), now + Duration::seconds(10));

    assert!(token.is_valid_at(now));
    assert!(token.is_valid_at(now + Duration::seconds(9)));
    assert!(!token.is_valid_at(now + Duration::seconds(10)));
}

#[test]
fn test_token_state_empty_has_no_token() {
    let mut state = TokenState::default();
    assert_eq!(state, TokenState::Empty);
    assert!(state.ensure_valid(Utc::now()).is_none());
}

#[test]
fn test_token_state_valid_returns_token() {
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
    let token = AccessToken::new("abc".to_string(), now + Duration::hours(1));
    let mut state = TokenState::Valid(token.clone());

    assert_eq!(state.ensure_valid(now), Some(&token));
    assert_eq!(state, TokenState::Valid(token));
}

#[test]
fn test_token_state_moves_to_expired() {
    let now = Utc.with_ymd_and_hms(2024, 1, 1, 8, 0, 0).unwrap();
    let token = AccessToken::new("abc".to_string(), now + Duration::hours(1));
    let mut state = TokenState::Valid(token.clone());

    assert!(state.ensure_valid(now + Duration::hours(2)).is_none());
    assert_eq!(state, TokenState::Expired(token));
}

#[test]
fn test_access_token_debug_is_redacted() {
    let token = AccessToken::new("super-secret".to_string(), Utc::now());
    let debug = format!("{token:?}");
    assert!(!debug.contains("super-secret"));
}
