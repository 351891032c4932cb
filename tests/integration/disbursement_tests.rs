use crate::common::{
    INITIATOR_PASSWORD, create_test_client, decrypt_credential, full_config, mock_echo, mock_oauth,
};
use mockito::Server;
use mpesa_client::prelude::*;
use serde_json::Value;

fn parse(body: &str) -> Value {
    serde_json::from_str(body).unwrap()
}

fn assert_initiator(body: &Value) {
    let credential = body["SecurityCredential"].as_str().unwrap();
    assert_eq!(decrypt_credential(credential), INITIATOR_PASSWORD);
    assert_eq!(body["QueueTimeOutURL"], "https://example.com/timeout");
    assert_eq!(body["ResultURL"], "https://example.com/result");
}

#[tokio::test]
async fn test_b2c_payment_payload() {
    let mut server = Server::new_async().await;
    let _oauth = mock_oauth(&mut server, 1).await;
    let _endpoint = mock_echo(&mut server, "/mpesa/b2c/v1/paymentrequest").await;
    let (client, _clock) = create_test_client(full_config(&server.url()));

    let body = parse(
        &client
            .b2c_payment(
                1200,
                "0712345678",
                B2cCommandId::SalaryPayment,
                "May salary",
                Some("Payroll"),
            )
            .await
            .unwrap(),
    );

    assert_initiator(&body);
    assert_eq!(body["InitiatorName"], "testapi");
    assert_eq!(body["CommandID"], "SalaryPayment");
    assert_eq!(body["Amount"], 1200);
    assert_eq!(body["PartyA"], "600999");
    assert_eq!(body["PartyB"], "254712345678");
    assert_eq!(body["Remarks"], "May salary");
    assert_eq!(body["Occassion"], "Payroll");
    assert_eq!(body["OriginatorConversationID"].as_str().unwrap().len(), 30);
}

#[tokio::test]
async fn test_privileged_operation_without_password_makes_no_request() {
    let mut server = Server::new_async().await;
    let oauth = mock_oauth(&mut server, 0).await;
    let mut config = full_config(&server.url());
    config.initiator.password = None;
    let (client, _clock) = create_test_client(config);

    let err = client.account_balance("Balance").await.unwrap_err();
    assert!(matches!(err, AppError::Config(_)));

    let err = client
        .tax_remittance(100, "PRN1234", "Tax")
        .await
        .unwrap_err();
    assert!(matches!(err, AppError::Config(_)));

    oauth.assert_async().await;
}

#[tokio::test]
async fn test_unreadable_certificate_makes_no_request() {
    let mut server = Server::new_async().await;
    let oauth = mock_oauth(&mut server, 0).await;
    let mut config = full_config(&server.url());
    config.environment = Environment::Production;
    config.certificates.production_path = crate::common::fixture("missing.cer");
    let (client, _clock) = create_test_client(config);

    let err = client
        .reversal("OEI2AK4Q16", 100, "600999", "Wrong number", None)
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Encryption(_)));
    oauth.assert_async().await;
}

#[tokio::test]
async fn test_b2b_payment_omits_missing_requester() {
    let mut server = Server::new_async().await;
    let _oauth = mock_oauth(&mut server, 1).await;
    let _endpoint = mock_echo(&mut server, "/mpesa/b2b/v1/paymentrequest").await;
    let (client, _clock) = create_test_client(full_config(&server.url()));

    let body = parse(
        &client
            .b2b_payment(
                B2bCommandId::BusinessBuyGoods,
                5000,
                "000001",
                "STOCK-9",
                None,
                "Restock",
            )
            .await
            .unwrap(),
    );

    assert_initiator(&body);
    assert_eq!(body["Initiator"], "testapi");
    assert_eq!(body["CommandID"], "BusinessBuyGoods");
    assert_eq!(body["SenderIdentifierType"], "4");
    assert_eq!(body["RecieverIdentifierType"], "4");
    assert_eq!(body["PartyA"], "600999");
    assert_eq!(body["PartyB"], "000001");
    assert_eq!(body["AccountReference"], "STOCK-9");
    assert!(body.get("Requester").is_none());
}

#[tokio::test]
async fn test_b2c_account_top_up_payload() {
    let mut server = Server::new_async().await;
    let _oauth = mock_oauth(&mut server, 1).await;
    let _endpoint = mock_echo(&mut server, "/mpesa/b2b/v1/paymentrequest").await;
    let (client, _clock) = create_test_client(full_config(&server.url()));

    let body = parse(
        &client
            .b2c_account_top_up(10_000, "600000", "FLOAT", Some("0712345678"), "Top up")
            .await
            .unwrap(),
    );

    assert_eq!(body["CommandID"], "BusinessPayToBulk");
    assert_eq!(body["Requester"], "254712345678");
    assert_eq!(body["PartyB"], "600000");
}

#[tokio::test]
async fn test_tax_remittance_payload() {
    let mut server = Server::new_async().await;
    let _oauth = mock_oauth(&mut server, 1).await;
    let _endpoint = mock_echo(&mut server, "/mpesa/b2b/v1/remittax").await;
    let (client, _clock) = create_test_client(full_config(&server.url()));

    let body = parse(
        &client
            .tax_remittance(2390, "PRN1234XN", "VAT May")
            .await
            .unwrap(),
    );

    assert_initiator(&body);
    assert_eq!(body["CommandID"], "PayTaxToKRA");
    assert_eq!(body["PartyB"], "572572");
    assert_eq!(body["AccountReference"], "PRN1234XN");
    assert_eq!(body["Amount"], 2390);
}

#[tokio::test]
async fn test_account_balance_payload() {
    let mut server = Server::new_async().await;
    let _oauth = mock_oauth(&mut server, 1).await;
    let _endpoint = mock_echo(&mut server, "/mpesa/accountbalance/v1/query").await;
    let (client, _clock) = create_test_client(full_config(&server.url()));

    let body = parse(&client.account_balance("Month end").await.unwrap());

    assert_initiator(&body);
    assert_eq!(body["CommandID"], "AccountBalance");
    assert_eq!(body["PartyA"], "600999");
    assert_eq!(body["IdentifierType"], "4");
    assert_eq!(body["Remarks"], "Month end");
}

#[tokio::test]
async fn test_transaction_status_payload() {
    let mut server = Server::new_async().await;
    let _oauth = mock_oauth(&mut server, 1).await;
    let _endpoint = mock_echo(&mut server, "/mpesa/transactionstatus/v1/query").await;
    let (client, _clock) = create_test_client(full_config(&server.url()));

    let body = parse(
        &client
            .transaction_status("OEI2AK4Q16", "Check", None, Some("AG_20240520_0001"))
            .await
            .unwrap(),
    );

    assert_initiator(&body);
    assert_eq!(body["CommandID"], "TransactionStatusQuery");
    assert_eq!(body["TransactionID"], "OEI2AK4Q16");
    assert_eq!(body["OriginalConversationID"], "AG_20240520_0001");
    assert_eq!(body["Occasion"], "");
}

#[tokio::test]
async fn test_reversal_payload() {
    let mut server = Server::new_async().await;
    let _oauth = mock_oauth(&mut server, 1).await;
    let _endpoint = mock_echo(&mut server, "/mpesa/reversal/v1/request").await;
    let (client, _clock) = create_test_client(full_config(&server.url()));

    let body = parse(
        &client
            .reversal("OEI2AK4Q16", 100, "600999", "Wrong number", Some("Refund"))
            .await
            .unwrap(),
    );

    assert_initiator(&body);
    assert_eq!(body["CommandID"], "TransactionReversal");
    assert_eq!(body["ReceiverParty"], "600999");
    assert_eq!(body["RecieverIdentifierType"], "11");
    assert_eq!(body["Amount"], 100);
    assert_eq!(body["Occasion"], "Refund");
}
