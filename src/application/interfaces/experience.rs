use crate::error::AppError;
use async_trait::async_trait;

/// Interface for account queries and reversals
#[async_trait]
pub trait ExperienceService: Send + Sync {
    /// Requests the paybill balance; the result is posted to the result URL
    async fn account_balance(&self, remarks: &str) -> Result<String, AppError>;

    /// Queries the status of a transaction
    ///
    /// # Arguments
    /// * `transaction_id` - M-Pesa receipt number
    /// * `remarks` - Free text remarks
    /// * `occasion` - Optional occasion
    /// * `original_conversation_id` - Conversation id of the original request
    async fn transaction_status(
        &self,
        transaction_id: &str,
        remarks: &str,
        occasion: Option<&str>,
        original_conversation_id: Option<&str>,
    ) -> Result<String, AppError>;

    /// Reverses a transaction received by `receiver_party`
    async fn reversal(
        &self,
        transaction_id: &str,
        amount: u64,
        receiver_party: &str,
        remarks: &str,
        occasion: Option<&str>,
    ) -> Result<String, AppError>;
}
