/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::application::client::Client;
use crate::application::interfaces::disbursement::DisbursementService;
use crate::constants::{
    B2B_PAYMENT_PATH, B2C_PAYMENT_PATH, KRA_SHORTCODE, SHORTCODE_IDENTIFIER_TYPE,
    TAX_REMITTANCE_PATH,
};
use crate::error::AppError;
use crate::model::enums::{B2bCommandId, B2cCommandId};
use crate::model::requests::{B2bPaymentRequest, B2cPaymentRequest};
use crate::utils::id::get_id;
use crate::utils::phone::normalize_msisdn;
use async_trait::async_trait;
use tracing::info;

const PAY_TAX_TO_KRA: &str = "PayTaxToKRA";

/// Fields of a business to business transfer that vary per operation
struct B2bTransfer<'a> {
    command_id: &'a str,
    amount: u64,
    receiver_shortcode: &'a str,
    account_reference: &'a str,
    requester: Option<String>,
    remarks: &'a str,
}

impl Client {
    fn b2b_request(&self, transfer: B2bTransfer<'_>) -> Result<B2bPaymentRequest, AppError> {
        let config = self.config();
        let initiator = config.initiator_username()?.to_string();
        let party_a = config.paybill_number()?.to_string();
        let queue_timeout_url = config.queue_timeout_url()?.to_string();
        let result_url = config.result_url()?.to_string();
        let security_credential = self.security_credential()?.into_inner();

        Ok(B2bPaymentRequest {
            initiator,
            security_credential,
            command_id: transfer.command_id.to_string(),
            sender_identifier_type: SHORTCODE_IDENTIFIER_TYPE.to_string(),
            receiver_identifier_type: SHORTCODE_IDENTIFIER_TYPE.to_string(),
            amount: transfer.amount,
            party_a,
            party_b: transfer.receiver_shortcode.to_string(),
            account_reference: transfer.account_reference.to_string(),
            requester: transfer.requester,
            remarks: transfer.remarks.to_string(),
            queue_timeout_url,
            result_url,
        })
    }
}

#[async_trait]
impl DisbursementService for Client {
    async fn b2c_payment(
        &self,
        amount: u64,
        phone_number: &str,
        command_id: B2cCommandId,
        remarks: &str,
        occasion: Option<&str>,
    ) -> Result<String, AppError> {
        let party_b = normalize_msisdn(phone_number)?;
        let config = self.config();
        let initiator_name = config.initiator_username()?.to_string();
        let party_a = config.paybill_number()?.to_string();
        let queue_timeout_url = config.queue_timeout_url()?.to_string();
        let result_url = config.result_url()?.to_string();
        let security_credential = self.security_credential()?.into_inner();

        let request = B2cPaymentRequest {
            originator_conversation_id: get_id(),
            initiator_name,
            security_credential,
            command_id,
            amount,
            party_a,
            party_b,
            remarks: remarks.to_string(),
            queue_timeout_url,
            result_url,
            occasion: occasion.unwrap_or_default().to_string(),
        };

        info!(
            "Sending {} B2C payment {} of {}",
            command_id, request.originator_conversation_id, amount
        );
        self.send(B2C_PAYMENT_PATH, "POST", &request).await
    }

    async fn b2c_account_top_up(
        &self,
        amount: u64,
        receiver_shortcode: &str,
        account_reference: &str,
        requester: Option<&str>,
        remarks: &str,
    ) -> Result<String, AppError> {
        let requester = requester.map(normalize_msisdn).transpose()?;
        let request = self.b2b_request(B2bTransfer {
            command_id: B2bCommandId::BusinessPayToBulk.as_str(),
            amount,
            receiver_shortcode,
            account_reference,
            requester,
            remarks,
        })?;

        info!("Topping up B2C account {} with {}", receiver_shortcode, amount);
        self.send(B2B_PAYMENT_PATH, "POST", &request).await
    }

    async fn b2b_payment(
        &self,
        command_id: B2bCommandId,
        amount: u64,
        receiver_shortcode: &str,
        account_reference: &str,
        requester: Option<&str>,
        remarks: &str,
    ) -> Result<String, AppError> {
        let requester = requester.map(normalize_msisdn).transpose()?;
        let request = self.b2b_request(B2bTransfer {
            command_id: command_id.as_str(),
            amount,
            receiver_shortcode,
            account_reference,
            requester,
            remarks,
        })?;

        info!(
            "Sending {} B2B payment of {} to {}",
            command_id, amount, receiver_shortcode
        );
        self.send(B2B_PAYMENT_PATH, "POST", &request).await
    }

    async fn tax_remittance(
        &self,
        amount: u64,
        prn: &str,
        remarks: &str,
    ) -> Result<String, AppError> {
        let request = self.b2b_request(B2bTransfer {
            command_id: PAY_TAX_TO_KRA,
            amount,
            receiver_shortcode: KRA_SHORTCODE,
            account_reference: prn,
            requester: None,
            remarks,
        })?;

        info!("Remitting {} to KRA against PRN {}", amount, prn);
        self.send(TAX_REMITTANCE_PATH, "POST", &request).await
    }
}
