use crate::common::{TOKEN, create_test_client, mock_oauth, start_time};
use chrono::Duration;
use mockito::Server;
use mpesa_client::prelude::*;
use reqwest::StatusCode;

#[tokio::test]
async fn test_token_is_reused_while_valid() {
    let mut server = Server::new_async().await;
    let oauth = mock_oauth(&mut server, 1).await;
    let (client, clock) = create_test_client(Config::minimal(
        "test-key",
        "test-secret",
        &server.url(),
    ));

    let first = client.get_token().await.unwrap();
    clock.advance(Duration::seconds(3598));
    let second = client.get_token().await.unwrap();

    assert_eq!(first, TOKEN);
    assert_eq!(second, TOKEN);
    oauth.assert_async().await;
}

#[tokio::test]
async fn test_expired_token_is_fetched_again() {
    let mut server = Server::new_async().await;
    let oauth = mock_oauth(&mut server, 2).await;
    let (client, clock) = create_test_client(Config::minimal(
        "test-key",
        "test-secret",
        &server.url(),
    ));

    client.get_token().await.unwrap();
    let token = client.auth().cached_token().await.unwrap();
    assert_eq!(token.expires_at(), start_time() + Duration::seconds(3599));

    clock.advance(Duration::seconds(3599));
    client.get_token().await.unwrap();

    let token = client.auth().cached_token().await.unwrap();
    assert_eq!(
        token.expires_at(),
        start_time() + Duration::seconds(3599 * 2)
    );
    assert!(matches!(client.auth().state().await, TokenState::Valid(_)));
    oauth.assert_async().await;
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_callers_share_one_fetch() {
    let mut server = Server::new_async().await;
    let oauth = mock_oauth(&mut server, 1).await;
    let (client, _clock) = create_test_client(Config::minimal(
        "test-key",
        "test-secret",
        &server.url(),
    ));
    let client = Arc::new(client);

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let client = client.clone();
            tokio::spawn(async move { client.get_token().await })
        })
        .collect();

    for handle in handles {
        assert_eq!(handle.await.unwrap().unwrap(), TOKEN);
    }
    oauth.assert_async().await;
}

#[tokio::test]
async fn test_oauth_rejection_is_authentication_failure() {
    let mut server = Server::new_async().await;
    let oauth = server
        .mock("GET", "/oauth/v1/generate")
        .match_query(mockito::Matcher::Any)
        .with_status(400)
        .with_body(r#"{"errorCode":"400.008.01","errorMessage":"Invalid Authentication passed"}"#)
        .expect(1)
        .create_async()
        .await;
    let business = server
        .mock("POST", "/mpesa/accountbalance/v1/query")
        .expect(0)
        .create_async()
        .await;
    let (client, _clock) = create_test_client(crate::common::full_config(&server.url()));

    let err = client.account_balance("Balance").await.unwrap_err();

    match err {
        AppError::AuthenticationFailure { status, body } => {
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert!(body.contains("Invalid Authentication passed"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(client.auth().cached_token().await.is_none());
    oauth.assert_async().await;
    business.assert_async().await;
}

#[tokio::test]
async fn test_invalidate_forces_new_fetch() {
    let mut server = Server::new_async().await;
    let oauth = mock_oauth(&mut server, 2).await;
    let (client, _clock) = create_test_client(Config::minimal(
        "test-key",
        "test-secret",
        &server.url(),
    ));

    client.get_token().await.unwrap();
    client.auth().invalidate().await;
    assert_eq!(client.auth().state().await, TokenState::Empty);
    client.get_token().await.unwrap();

    oauth.assert_async().await;
}

#[tokio::test]
async fn test_undecodable_token_response_is_authentication_failure() {
    let mut server = Server::new_async().await;
    let raw = r#"{"access_token":"abc","expires_in":"soon"}"#;
    let oauth = server
        .mock("GET", "/oauth/v1/generate")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(raw)
        .expect(1)
        .create_async()
        .await;
    let (client, _clock) = create_test_client(Config::minimal(
        "test-key",
        "test-secret",
        &server.url(),
    ));

    match client.get_token().await.unwrap_err() {
        AppError::AuthenticationFailure { status, body } => {
            assert_eq!(status, StatusCode::OK);
            assert_eq!(body, raw);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert_eq!(client.auth().state().await, TokenState::Empty);
    oauth.assert_async().await;
}

#[tokio::test]
async fn test_token_response_without_access_token_is_authentication_failure() {
    let mut server = Server::new_async().await;
    let _oauth = server
        .mock("GET", "/oauth/v1/generate")
        .match_query(mockito::Matcher::Any)
        .with_status(200)
        .with_body(r#"{"expires_in":"3599"}"#)
        .create_async()
        .await;
    let (client, _clock) = create_test_client(Config::minimal(
        "test-key",
        "test-secret",
        &server.url(),
    ));

    let err = client.get_token().await.unwrap_err();
    assert!(matches!(err, AppError::AuthenticationFailure { .. }));
}
