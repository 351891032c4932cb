use mpesa_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let client = Client::new(Config::new())?;

    for trx_code in QrTransactionType::ALL.iter().copied() {
        let body = client
            .generate_dynamic_qr("Demo Shop", "QR-001", 100, trx_code, "373132", None)
            .await?;
        let response: serde_json::Value = serde_json::from_str(&body)?;
        info!(
            "{} QR code: {}",
            trx_code,
            response["ResponseDescription"].as_str().unwrap_or("no description")
        );
    }

    Ok(())
}
