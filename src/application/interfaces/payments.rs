use crate::error::AppError;
use crate::model::enums::{C2bCommandId, C2bResponseType, QrTransactionType};
use crate::model::requests::StandingOrder;
use async_trait::async_trait;

/// Interface for customer-initiated payment operations
#[async_trait]
pub trait PaymentService: Send + Sync {
    /// Registers the configured confirmation and validation URLs for the paybill
    async fn c2b_register_urls(&self, response_type: C2bResponseType)
    -> Result<String, AppError>;

    /// Simulates a customer paying the paybill (sandbox only)
    async fn c2b_simulate(
        &self,
        amount: u64,
        phone_number: &str,
        bill_ref_number: &str,
        command_id: C2bCommandId,
    ) -> Result<String, AppError>;

    /// Generates a dynamic QR code
    ///
    /// # Arguments
    /// * `merchant_name` - Name shown to the payer
    /// * `ref_no` - Transaction reference
    /// * `amount` - Amount in KES
    /// * `trx_code` - One of `BG`, `WA`, `PB`, `SM`, `SB`
    /// * `cpi` - Credit party identifier
    /// * `size` - Image size in pixels (default 300)
    async fn generate_dynamic_qr(
        &self,
        merchant_name: &str,
        ref_no: &str,
        amount: u64,
        trx_code: QrTransactionType,
        cpi: &str,
        size: Option<u32>,
    ) -> Result<String, AppError>;

    /// Creates an M-Pesa Ratiba standing order paying the Lipa Na M-Pesa shortcode
    async fn create_ratiba_standing_order(
        &self,
        order: &StandingOrder,
    ) -> Result<String, AppError>;
}
