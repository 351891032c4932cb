/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::application::client::Client;
use crate::application::interfaces::express::ExpressService;
use crate::constants::{B2B_EXPRESS_CHECKOUT_PATH, STK_PUSH_PATH, STK_PUSH_QUERY_PATH};
use crate::error::AppError;
use crate::model::enums::StkTransactionType;
use crate::model::requests::{
    B2bExpressCheckoutRequest, ExpressPaymentRequest, ExpressQueryRequest,
};
use crate::utils::id::get_id;
use crate::utils::phone::normalize_msisdn;
use async_trait::async_trait;
use tracing::info;

const DEFAULT_ACCOUNT_REFERENCE: &str = "Payment";
const DEFAULT_DESCRIPTION: &str = "Payment";

#[async_trait]
impl ExpressService for Client {
    async fn express_payment(
        &self,
        amount: u64,
        phone_number: &str,
        account_reference: Option<&str>,
        description: Option<&str>,
        transaction_type: Option<StkTransactionType>,
    ) -> Result<String, AppError> {
        let phone = normalize_msisdn(phone_number)?;
        let callback_url = self.config().lipa_na_mpesa_callback_url()?;
        let stk = self.stk_auth()?;

        let request = ExpressPaymentRequest {
            business_short_code: stk.shortcode.clone(),
            password: stk.password,
            timestamp: stk.timestamp,
            transaction_type: transaction_type.unwrap_or_default(),
            amount,
            party_a: phone.clone(),
            party_b: stk.shortcode,
            phone_number: phone,
            callback_url: callback_url.to_string(),
            account_reference: account_reference
                .unwrap_or(DEFAULT_ACCOUNT_REFERENCE)
                .to_string(),
            transaction_desc: description.unwrap_or(DEFAULT_DESCRIPTION).to_string(),
        };

        info!("Sending STK push of {} to {}", amount, request.phone_number);
        self.send(STK_PUSH_PATH, "POST", &request).await
    }

    async fn express_payment_query(&self, checkout_request_id: &str) -> Result<String, AppError> {
        let stk = self.stk_auth()?;

        let request = ExpressQueryRequest {
            business_short_code: stk.shortcode,
            password: stk.password,
            timestamp: stk.timestamp,
            checkout_request_id: checkout_request_id.to_string(),
        };

        info!("Querying STK push {}", checkout_request_id);
        self.send(STK_PUSH_QUERY_PATH, "POST", &request).await
    }

    async fn b2b_express_checkout(
        &self,
        receiver_shortcode: &str,
        amount: u64,
        payment_ref: &str,
        partner_name: &str,
    ) -> Result<String, AppError> {
        let request = B2bExpressCheckoutRequest {
            primary_short_code: self.config().lipa_na_mpesa_shortcode()?.to_string(),
            receiver_short_code: receiver_shortcode.to_string(),
            amount: amount.to_string(),
            payment_ref: payment_ref.to_string(),
            callback_url: self.config().callback_url()?.to_string(),
            partner_name: partner_name.to_string(),
            request_ref_id: get_id(),
        };

        info!(
            "Sending B2B express checkout {} to {}",
            request.request_ref_id, receiver_shortcode
        );
        self.send(B2B_EXPRESS_CHECKOUT_PATH, "POST", &request).await
    }
}
