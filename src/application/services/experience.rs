/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::application::client::Client;
use crate::application::interfaces::experience::ExperienceService;
use crate::constants::{
    ACCOUNT_BALANCE_PATH, REVERSAL_PATH, REVERSAL_RECEIVER_IDENTIFIER_TYPE,
    SHORTCODE_IDENTIFIER_TYPE, TRANSACTION_STATUS_PATH,
};
use crate::error::AppError;
use crate::model::requests::{AccountBalanceRequest, ReversalRequest, TransactionStatusRequest};
use async_trait::async_trait;
use tracing::info;

#[async_trait]
impl ExperienceService for Client {
    async fn account_balance(&self, remarks: &str) -> Result<String, AppError> {
        let config = self.config();
        let request = AccountBalanceRequest {
            initiator: config.initiator_username()?.to_string(),
            party_a: config.paybill_number()?.to_string(),
            queue_timeout_url: config.queue_timeout_url()?.to_string(),
            result_url: config.result_url()?.to_string(),
            security_credential: self.security_credential()?.into_inner(),
            command_id: "AccountBalance".to_string(),
            identifier_type: SHORTCODE_IDENTIFIER_TYPE.to_string(),
            remarks: remarks.to_string(),
        };

        info!("Querying balance of {}", request.party_a);
        self.send(ACCOUNT_BALANCE_PATH, "POST", &request).await
    }

    async fn transaction_status(
        &self,
        transaction_id: &str,
        remarks: &str,
        occasion: Option<&str>,
        original_conversation_id: Option<&str>,
    ) -> Result<String, AppError> {
        let config = self.config();
        let request = TransactionStatusRequest {
            initiator: config.initiator_username()?.to_string(),
            party_a: config.paybill_number()?.to_string(),
            result_url: config.result_url()?.to_string(),
            queue_timeout_url: config.queue_timeout_url()?.to_string(),
            security_credential: self.security_credential()?.into_inner(),
            command_id: "TransactionStatusQuery".to_string(),
            transaction_id: transaction_id.to_string(),
            original_conversation_id: original_conversation_id.map(str::to_string),
            identifier_type: SHORTCODE_IDENTIFIER_TYPE.to_string(),
            remarks: remarks.to_string(),
            occasion: occasion.unwrap_or_default().to_string(),
        };

        info!("Querying status of transaction {}", transaction_id);
        self.send(TRANSACTION_STATUS_PATH, "POST", &request).await
    }

    async fn reversal(
        &self,
        transaction_id: &str,
        amount: u64,
        receiver_party: &str,
        remarks: &str,
        occasion: Option<&str>,
    ) -> Result<String, AppError> {
        let config = self.config();
        let request = ReversalRequest {
            initiator: config.initiator_username()?.to_string(),
            result_url: config.result_url()?.to_string(),
            queue_timeout_url: config.queue_timeout_url()?.to_string(),
            security_credential: self.security_credential()?.into_inner(),
            command_id: "TransactionReversal".to_string(),
            transaction_id: transaction_id.to_string(),
            amount,
            receiver_party: receiver_party.to_string(),
            receiver_identifier_type: REVERSAL_RECEIVER_IDENTIFIER_TYPE.to_string(),
            remarks: remarks.to_string(),
            occasion: occasion.unwrap_or_default().to_string(),
        };

        info!("Reversing transaction {} ({})", transaction_id, amount);
        self.send(REVERSAL_PATH, "POST", &request).await
    }
}
