use crate::error::AppError;
use crate::model::enums::StkTransactionType;
use async_trait::async_trait;

/// Interface for Lipa Na M-Pesa Online (STK push) operations
///
/// Every method returns the raw JSON body of the M-Pesa response.
#[async_trait]
pub trait ExpressService: Send + Sync {
    /// Sends an STK push prompting `phone_number` to pay `amount`
    ///
    /// # Arguments
    /// * `amount` - Amount in KES
    /// * `phone_number` - Customer phone number, any Kenyan format
    /// * `account_reference` - Account number shown to the customer (default `Payment`)
    /// * `description` - Transaction description (default `Payment`)
    /// * `transaction_type` - Paybill or buy goods (default paybill)
    async fn express_payment(
        &self,
        amount: u64,
        phone_number: &str,
        account_reference: Option<&str>,
        description: Option<&str>,
        transaction_type: Option<StkTransactionType>,
    ) -> Result<String, AppError>;

    /// Queries the status of an STK push
    async fn express_payment_query(&self, checkout_request_id: &str) -> Result<String, AppError>;

    /// Sends a USSD push to the owner of the configured till, asking it to pay `receiver_shortcode`
    ///
    /// # Arguments
    /// * `receiver_shortcode` - Paybill or till receiving the payment
    /// * `amount` - Amount in KES
    /// * `payment_ref` - Reference shown to the payer
    /// * `partner_name` - Vendor name shown on the prompt
    async fn b2b_express_checkout(
        &self,
        receiver_shortcode: &str,
        amount: u64,
        payment_ref: &str,
        partner_name: &str,
    ) -> Result<String, AppError>;
}
