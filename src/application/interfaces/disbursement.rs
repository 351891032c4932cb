use crate::error::AppError;
use crate::model::enums::{B2bCommandId, B2cCommandId};
use async_trait::async_trait;

/// Interface for business-initiated payouts
///
/// All methods are initiator-privileged: each call encrypts a fresh
/// `SecurityCredential` before dispatch.
#[async_trait]
pub trait DisbursementService: Send + Sync {
    /// Pays `amount` from the paybill to `phone_number`
    async fn b2c_payment(
        &self,
        amount: u64,
        phone_number: &str,
        command_id: B2cCommandId,
        remarks: &str,
        occasion: Option<&str>,
    ) -> Result<String, AppError>;

    /// Loads funds into a B2C utility account (`BusinessPayToBulk`)
    async fn b2c_account_top_up(
        &self,
        amount: u64,
        receiver_shortcode: &str,
        account_reference: &str,
        requester: Option<&str>,
        remarks: &str,
    ) -> Result<String, AppError>;

    /// Pays another business from the paybill
    ///
    /// # Arguments
    /// * `command_id` - Pay bill, buy goods or pay to bulk
    /// * `amount` - Amount in KES
    /// * `receiver_shortcode` - Receiving paybill or till
    /// * `account_reference` - Account number at the receiver
    /// * `requester` - Consumer phone number the payment is made for, if any
    /// * `remarks` - Free text remarks
    async fn b2b_payment(
        &self,
        command_id: B2bCommandId,
        amount: u64,
        receiver_shortcode: &str,
        account_reference: &str,
        requester: Option<&str>,
        remarks: &str,
    ) -> Result<String, AppError>;

    /// Remits tax to KRA against the payment registration number `prn`
    async fn tax_remittance(&self, amount: u64, prn: &str, remarks: &str)
    -> Result<String, AppError>;
}
