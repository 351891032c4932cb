use mpesa_client::application::client::Client;
use mpesa_client::application::interfaces::express::ExpressService;
use mpesa_client::config::Config;
use mpesa_client::utils::setup_logger;
use tracing::info;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    setup_logger();

    info!("Starting STK push example");

    // Authentication happens on the first request
    let client = Client::new(Config::new())?;

    let body = client
        .express_payment(1, "0712345678", Some("INV-001"), Some("Test payment"), None)
        .await?;

    let response: serde_json::Value = serde_json::from_str(&body)?;
    info!("STK push response: {:#}", response);

    if let Some(checkout_request_id) = response["CheckoutRequestID"].as_str() {
        let status = client.express_payment_query(checkout_request_id).await?;
        info!("STK push status: {}", status);
    }

    Ok(())
}
