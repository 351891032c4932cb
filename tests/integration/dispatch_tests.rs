use crate::common::{TOKEN, create_test_client, full_config, mock_oauth};
use mockito::{Matcher, Server};
use mpesa_client::prelude::*;
use serde_json::json;

#[tokio::test]
async fn test_send_attaches_bearer_and_returns_body() {
    let mut server = Server::new_async().await;
    let oauth = mock_oauth(&mut server, 1).await;
    let endpoint = server
        .mock("POST", "/mpesa/c2b/v1/simulate")
        .match_header("authorization", format!("Bearer {TOKEN}").as_str())
        .match_header("content-type", "application/json")
        .match_header("accept", "application/json")
        .match_body(Matcher::Json(json!({"ShortCode": "600999"})))
        .with_status(200)
        .with_body(r#"{"ResponseCode":"0"}"#)
        .expect(2)
        .create_async()
        .await;
    let (client, _clock) = create_test_client(full_config(&server.url()));

    let body = json!({"ShortCode": "600999"});
    let first = client
        .send("/mpesa/c2b/v1/simulate", "POST", &body)
        .await
        .unwrap();
    let second = client
        .send("/mpesa/c2b/v1/simulate", "post", &body)
        .await
        .unwrap();

    assert_eq!(first, r#"{"ResponseCode":"0"}"#);
    assert_eq!(second, first);
    oauth.assert_async().await;
    endpoint.assert_async().await;
}

#[tokio::test]
async fn test_error_status_body_is_returned_verbatim() {
    let mut server = Server::new_async().await;
    let _oauth = mock_oauth(&mut server, 1).await;
    let raw = r#"{"requestId":"1234","errorCode":"400.002.02","errorMessage":"Bad Request - Invalid Amount"}"#;
    let _endpoint = server
        .mock("POST", "/mpesa/b2c/v1/paymentrequest")
        .with_status(400)
        .with_body(raw)
        .create_async()
        .await;
    let (client, _clock) = create_test_client(full_config(&server.url()));

    let body = client
        .b2c_payment(0, "0712345678", B2cCommandId::BusinessPayment, "Refund", None)
        .await
        .unwrap();

    assert_eq!(body, raw);
}

#[tokio::test]
async fn test_missing_method_makes_no_request() {
    let mut server = Server::new_async().await;
    let oauth = mock_oauth(&mut server, 0).await;
    let (client, _clock) = create_test_client(full_config(&server.url()));

    let err = client
        .send("/mpesa/c2b/v1/simulate", "", &json!({}))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::InvalidRequest(_)));
    oauth.assert_async().await;
}

#[tokio::test]
async fn test_transport_failure_is_http_error() {
    // Port 9 (discard) is not expected to accept connections
    let (client, _clock) = create_test_client(Config::minimal("k", "s", "http://127.0.0.1:9"));

    let err = client.get_token().await.unwrap_err();
    assert!(matches!(err, AppError::Http(_)));
}
