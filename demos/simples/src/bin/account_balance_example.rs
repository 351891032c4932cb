use mpesa_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();

    let client = Client::new(Config::new())?;
    info!("Requesting balance for {}", client.config().paybill_number()?);

    // The balance itself is posted to MPESA_RESULT_URL
    let body = client.account_balance("Balance check").await?;
    info!("Account balance acknowledgement: {}", body);

    Ok(())
}
