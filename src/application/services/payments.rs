/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::application::client::Client;
use crate::application::interfaces::payments::PaymentService;
use crate::constants::{
    C2B_REGISTER_URL_PATH, C2B_SIMULATE_PATH, DEFAULT_QR_SIZE, DYNAMIC_QR_PATH, RATIBA_PATH,
};
use crate::error::AppError;
use crate::model::enums::{C2bCommandId, C2bResponseType, QrTransactionType};
use crate::model::requests::{
    C2bRegisterUrlRequest, C2bSimulateRequest, DynamicQrRequest, StandingOrder,
    StandingOrderRequest,
};
use crate::utils::phone::normalize_msisdn;
use async_trait::async_trait;
use tracing::{debug, info};

const RATIBA_DATE_FORMAT: &str = "%Y%m%d";

#[async_trait]
impl PaymentService for Client {
    async fn c2b_register_urls(
        &self,
        response_type: C2bResponseType,
    ) -> Result<String, AppError> {
        let config = self.config();
        let request = C2bRegisterUrlRequest {
            short_code: config.paybill_number()?.to_string(),
            response_type,
            confirmation_url: config.confirmation_url()?.to_string(),
            validation_url: config.validation_url()?.to_string(),
        };

        info!("Registering C2B URLs for {}", request.short_code);
        self.send(C2B_REGISTER_URL_PATH, "POST", &request).await
    }

    async fn c2b_simulate(
        &self,
        amount: u64,
        phone_number: &str,
        bill_ref_number: &str,
        command_id: C2bCommandId,
    ) -> Result<String, AppError> {
        let request = C2bSimulateRequest {
            short_code: self.config().paybill_number()?.to_string(),
            command_id,
            amount,
            msisdn: normalize_msisdn(phone_number)?,
            bill_ref_number: bill_ref_number.to_string(),
        };

        info!("Simulating C2B payment of {}", amount);
        self.send(C2B_SIMULATE_PATH, "POST", &request).await
    }

    async fn generate_dynamic_qr(
        &self,
        merchant_name: &str,
        ref_no: &str,
        amount: u64,
        trx_code: QrTransactionType,
        cpi: &str,
        size: Option<u32>,
    ) -> Result<String, AppError> {
        let request = DynamicQrRequest {
            merchant_name: merchant_name.to_string(),
            ref_no: ref_no.to_string(),
            amount,
            trx_code,
            cpi: cpi.to_string(),
            size: size.unwrap_or(DEFAULT_QR_SIZE).to_string(),
        };

        debug!("Generating {} QR code for {}", trx_code, cpi);
        self.send(DYNAMIC_QR_PATH, "POST", &request).await
    }

    async fn create_ratiba_standing_order(
        &self,
        order: &StandingOrder,
    ) -> Result<String, AppError> {
        if order.end_date < order.start_date {
            return Err(AppError::invalid_argument(
                "end_date",
                order.end_date.to_string(),
                [format!("on or after {}", order.start_date)],
            ));
        }

        let config = self.config();
        let request = StandingOrderRequest {
            standing_order_name: order.name.clone(),
            start_date: order.start_date.format(RATIBA_DATE_FORMAT).to_string(),
            end_date: order.end_date.format(RATIBA_DATE_FORMAT).to_string(),
            business_short_code: config.lipa_na_mpesa_shortcode()?.to_string(),
            transaction_type: order
                .receiver_identifier_type
                .standing_order_transaction_type()
                .to_string(),
            receiver_party_identifier_type: order.receiver_identifier_type,
            amount: order.amount.to_string(),
            party_a: normalize_msisdn(&order.phone_number)?,
            callback_url: config.callback_url()?.to_string(),
            account_reference: order.account_reference.clone(),
            transaction_desc: order.description.clone(),
            frequency: order.frequency,
        };

        info!(
            "Creating standing order {} ({} payments)",
            request.standing_order_name, order.frequency
        );
        self.send(RATIBA_PATH, "POST", &request).await
    }
}
