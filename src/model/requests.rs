/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::model::enums::{
    B2cCommandId, C2bCommandId, C2bResponseType, QrTransactionType, ReceiverIdentifierType,
    StandingOrderFrequency, StkTransactionType,
};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use chrono::NaiveDate;
use pretty_simple_display::DisplaySimple;
use serde::{Deserialize, Serialize};

/// Builds the STK push `Password`: `base64(shortcode + passkey + timestamp)`
#[must_use]
pub fn stk_password(shortcode: &str, passkey: &str, timestamp: &str) -> String {
    STANDARD.encode(format!("{shortcode}{passkey}{timestamp}"))
}

/// Lipa Na M-Pesa Online (STK push) request
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ExpressPaymentRequest {
    /// Shortcode receiving the payment
    pub business_short_code: String,
    /// `base64(shortcode + passkey + timestamp)`
    pub password: String,
    /// `YYYYMMDDHHmmss`, East Africa Time
    pub timestamp: String,
    /// Paybill or buy goods
    pub transaction_type: StkTransactionType,
    /// Amount in KES
    pub amount: u64,
    /// Paying phone number
    pub party_a: String,
    /// Receiving shortcode
    pub party_b: String,
    /// Phone number receiving the prompt
    pub phone_number: String,
    /// URL receiving the result
    #[serde(rename = "CallBackURL")]
    pub callback_url: String,
    /// Account number shown to the customer
    pub account_reference: String,
    /// Free text description
    pub transaction_desc: String,
}

/// STK push status query
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ExpressQueryRequest {
    /// Shortcode the STK push was sent for
    pub business_short_code: String,
    /// `base64(shortcode + passkey + timestamp)`
    pub password: String,
    /// `YYYYMMDDHHmmss`, East Africa Time
    pub timestamp: String,
    /// Identifier returned by the STK push
    #[serde(rename = "CheckoutRequestID")]
    pub checkout_request_id: String,
}

/// C2B URL registration
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct C2bRegisterUrlRequest {
    /// Shortcode whose URLs are registered
    pub short_code: String,
    /// Action when the validation URL is unreachable
    pub response_type: C2bResponseType,
    /// Confirmation URL
    #[serde(rename = "ConfirmationURL")]
    pub confirmation_url: String,
    /// Validation URL
    #[serde(rename = "ValidationURL")]
    pub validation_url: String,
}

/// C2B payment simulation
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct C2bSimulateRequest {
    /// Receiving shortcode
    pub short_code: String,
    /// Paybill or buy goods
    #[serde(rename = "CommandID")]
    pub command_id: C2bCommandId,
    /// Amount in KES
    pub amount: u64,
    /// Paying phone number
    pub msisdn: String,
    /// Account number
    pub bill_ref_number: String,
}

/// B2C payment request
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct B2cPaymentRequest {
    /// Unique id of this request
    #[serde(rename = "OriginatorConversationID")]
    pub originator_conversation_id: String,
    /// Initiator username
    pub initiator_name: String,
    /// Encrypted initiator password
    pub security_credential: String,
    /// Salary, business or promotion payment
    #[serde(rename = "CommandID")]
    pub command_id: B2cCommandId,
    /// Amount in KES
    pub amount: u64,
    /// Paying shortcode
    pub party_a: String,
    /// Receiving phone number
    pub party_b: String,
    /// Free text remarks
    pub remarks: String,
    /// Queue timeout URL
    #[serde(rename = "QueueTimeOutURL")]
    pub queue_timeout_url: String,
    /// Result URL
    #[serde(rename = "ResultURL")]
    pub result_url: String,
    /// Optional occasion. The API spells the key `Occassion`.
    #[serde(rename = "Occassion")]
    pub occasion: String,
}

/// Transaction status query
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct TransactionStatusRequest {
    /// Initiator username
    pub initiator: String,
    /// Encrypted initiator password
    pub security_credential: String,
    /// Always `TransactionStatusQuery`
    #[serde(rename = "CommandID")]
    pub command_id: String,
    /// M-Pesa receipt number
    #[serde(rename = "TransactionID")]
    pub transaction_id: String,
    /// Conversation id of the original request, when the receipt is unknown
    #[serde(
        rename = "OriginalConversationID",
        skip_serializing_if = "Option::is_none"
    )]
    pub original_conversation_id: Option<String>,
    /// Shortcode that processed the transaction
    pub party_a: String,
    /// Shortcode identifier type
    pub identifier_type: String,
    /// Result URL
    #[serde(rename = "ResultURL")]
    pub result_url: String,
    /// Queue timeout URL
    #[serde(rename = "QueueTimeOutURL")]
    pub queue_timeout_url: String,
    /// Free text remarks
    pub remarks: String,
    /// Optional occasion
    pub occasion: String,
}

/// Account balance query
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct AccountBalanceRequest {
    /// Initiator username
    pub initiator: String,
    /// Encrypted initiator password
    pub security_credential: String,
    /// Always `AccountBalance`
    #[serde(rename = "CommandID")]
    pub command_id: String,
    /// Shortcode whose balance is queried
    pub party_a: String,
    /// Shortcode identifier type
    pub identifier_type: String,
    /// Free text remarks
    pub remarks: String,
    /// Queue timeout URL
    #[serde(rename = "QueueTimeOutURL")]
    pub queue_timeout_url: String,
    /// Result URL
    #[serde(rename = "ResultURL")]
    pub result_url: String,
}

/// Transaction reversal
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct ReversalRequest {
    /// Initiator username
    pub initiator: String,
    /// Encrypted initiator password
    pub security_credential: String,
    /// Always `TransactionReversal`
    #[serde(rename = "CommandID")]
    pub command_id: String,
    /// Receipt number of the transaction to reverse
    #[serde(rename = "TransactionID")]
    pub transaction_id: String,
    /// Amount to reverse
    pub amount: u64,
    /// Shortcode that received the original payment
    pub receiver_party: String,
    /// Receiver identifier type. The API spells the key `RecieverIdentifierType`.
    #[serde(rename = "RecieverIdentifierType")]
    pub receiver_identifier_type: String,
    /// Result URL
    #[serde(rename = "ResultURL")]
    pub result_url: String,
    /// Queue timeout URL
    #[serde(rename = "QueueTimeOutURL")]
    pub queue_timeout_url: String,
    /// Free text remarks
    pub remarks: String,
    /// Optional occasion
    pub occasion: String,
}

/// B2B payment, account top up and tax remittance
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct B2bPaymentRequest {
    /// Initiator username
    pub initiator: String,
    /// Encrypted initiator password
    pub security_credential: String,
    /// `BusinessPayBill`, `BusinessBuyGoods`, `BusinessPayToBulk` or `PayTaxToKRA`
    #[serde(rename = "CommandID")]
    pub command_id: String,
    /// Sender identifier type
    pub sender_identifier_type: String,
    /// Receiver identifier type. The API spells the key `RecieverIdentifierType`.
    #[serde(rename = "RecieverIdentifierType")]
    pub receiver_identifier_type: String,
    /// Amount in KES
    pub amount: u64,
    /// Paying shortcode
    pub party_a: String,
    /// Receiving shortcode
    pub party_b: String,
    /// Account number at the receiver (PRN for tax remittance)
    pub account_reference: String,
    /// Consumer phone number on whose behalf the payment is made
    #[serde(skip_serializing_if = "Option::is_none")]
    pub requester: Option<String>,
    /// Free text remarks
    pub remarks: String,
    /// Queue timeout URL
    #[serde(rename = "QueueTimeOutURL")]
    pub queue_timeout_url: String,
    /// Result URL
    #[serde(rename = "ResultURL")]
    pub result_url: String,
}

/// Dynamic QR code generation
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct DynamicQrRequest {
    /// Name shown to the payer
    pub merchant_name: String,
    /// Transaction reference
    pub ref_no: String,
    /// Amount in KES
    pub amount: u64,
    /// Kind of transaction the QR code triggers
    pub trx_code: QrTransactionType,
    /// Credit party identifier: till, paybill, agent till, phone number
    #[serde(rename = "CPI")]
    pub cpi: String,
    /// Image size in pixels
    pub size: String,
}

/// Caller-provided description of a Ratiba standing order
#[derive(Debug, Clone, PartialEq)]
pub struct StandingOrder {
    /// Unique name of the standing order per customer
    pub name: String,
    /// First payment date
    pub start_date: NaiveDate,
    /// Last payment date
    pub end_date: NaiveDate,
    /// Amount in KES per payment
    pub amount: u64,
    /// Paying phone number
    pub phone_number: String,
    /// Account number at the receiver
    pub account_reference: String,
    /// Free text description
    pub description: String,
    /// Payment frequency
    pub frequency: StandingOrderFrequency,
    /// Till or paybill receiver
    pub receiver_identifier_type: ReceiverIdentifierType,
}

/// M-Pesa Ratiba standing order creation
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct StandingOrderRequest {
    /// Unique name of the standing order per customer
    pub standing_order_name: String,
    /// `YYYYMMDD`
    pub start_date: String,
    /// `YYYYMMDD`
    pub end_date: String,
    /// Receiving shortcode
    pub business_short_code: String,
    /// Derived from the receiver identifier type
    pub transaction_type: String,
    /// Till or paybill
    pub receiver_party_identifier_type: ReceiverIdentifierType,
    /// Amount in KES
    pub amount: String,
    /// Paying phone number
    pub party_a: String,
    /// URL receiving standing order results
    #[serde(rename = "CallBackURL")]
    pub callback_url: String,
    /// Account number at the receiver
    pub account_reference: String,
    /// Free text description
    pub transaction_desc: String,
    /// Payment frequency
    pub frequency: StandingOrderFrequency,
}

/// Bill Manager opt in and opt in details update
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BillManagerOptInRequest {
    /// Shortcode being onboarded
    pub shortcode: String,
    /// Official contact email
    pub email: String,
    /// Official contact phone number
    pub official_contact: String,
    /// `"1"` to send payment reminders, `"0"` otherwise
    pub send_reminders: String,
    /// Logo image URL shown on invoices
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
    /// URL receiving payment notifications
    #[serde(rename = "callbackurl")]
    pub callback_url: String,
}

/// Line item of a Bill Manager invoice
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceItem {
    /// Item name
    pub item_name: String,
    /// Item amount
    pub amount: String,
}

/// Bill Manager invoice
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// Unique invoice reference on the biller side
    pub external_reference: String,
    /// Customer name
    pub billed_full_name: String,
    /// Customer phone number
    pub billed_phone_number: String,
    /// Billing period, e.g. `August 2021`
    pub billed_period: String,
    /// Descriptive invoice name
    pub invoice_name: String,
    /// Due date, `YYYY-MM-DD HH:MM:SS.mmm`
    pub due_date: String,
    /// Customer account number
    pub account_reference: String,
    /// Total invoice amount
    pub amount: String,
    /// Optional breakdown
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub invoice_items: Vec<InvoiceItem>,
}

/// Bill Manager payment reconciliation
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ReconciliationRequest {
    /// M-Pesa receipt number
    pub transaction_id: String,
    /// Amount paid
    pub paid_amount: String,
    /// Paying phone number
    pub msisdn: String,
    /// Payment date, `YYYY-MM-DD`
    pub date_created: String,
    /// Customer account number
    pub account_reference: String,
    /// Receiving shortcode
    pub short_code: String,
}

/// Bill Manager invoice cancellation
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CancelInvoiceRequest {
    /// Reference of the invoice to cancel
    pub external_reference: String,
}

/// B2B express checkout (USSD push to a till owner)
#[derive(Debug, Clone, DisplaySimple, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct B2bExpressCheckoutRequest {
    /// Paying merchant till
    pub primary_short_code: String,
    /// Receiving paybill or till
    pub receiver_short_code: String,
    /// Amount in KES
    pub amount: String,
    /// Payment reference
    pub payment_ref: String,
    /// URL receiving the result
    pub callback_url: String,
    /// Vendor name shown on the USSD prompt
    pub partner_name: String,
    /// Unique id of this request
    #[serde(rename = "RequestRefID")]
    pub request_ref_id: String,
}
