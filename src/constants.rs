/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

/// User agent string sent with every request
pub const USER_AGENT: &str = concat!("mpesa-client/", env!("CARGO_PKG_VERSION"));
/// Default M-Pesa API host (sandbox)
pub const DEFAULT_BASE_URL: &str = "https://sandbox.safaricom.co.ke";
/// Format of the `Timestamp` field expected by the API
pub const TIMESTAMP_FORMAT: &str = "%Y%m%d%H%M%S";
/// Offset of East Africa Time from UTC, in seconds. M-Pesa timestamps are local to Nairobi.
pub const EAT_OFFSET_SECONDS: i32 = 3 * 3600;
/// KRA paybill that receives tax remittances
pub const KRA_SHORTCODE: &str = "572572";
/// Default size in pixels of generated QR codes
pub const DEFAULT_QR_SIZE: u32 = 300;
/// Identifier type for an organisation shortcode
pub const SHORTCODE_IDENTIFIER_TYPE: &str = "4";
/// Receiver identifier type used by reversals
pub const REVERSAL_RECEIVER_IDENTIFIER_TYPE: &str = "11";
/// Default location of the sandbox public key certificate
pub const DEFAULT_SANDBOX_CERT_PATH: &str = "certs/SandboxCertificate.cer";
/// Default location of the production public key certificate
pub const DEFAULT_PRODUCTION_CERT_PATH: &str = "certs/ProductionCertificate.cer";

/// OAuth token endpoint (GET, HTTP Basic)
pub const OAUTH_PATH: &str = "/oauth/v1/generate?grant_type=client_credentials";
/// Lipa Na M-Pesa Online (STK push)
pub const STK_PUSH_PATH: &str = "/mpesa/stkpush/v1/processrequest";
/// STK push status query
pub const STK_PUSH_QUERY_PATH: &str = "/mpesa/stkpushquery/v1/query";
/// C2B URL registration
pub const C2B_REGISTER_URL_PATH: &str = "/mpesa/c2b/v1/registerurl";
/// C2B payment simulation (sandbox only)
pub const C2B_SIMULATE_PATH: &str = "/mpesa/c2b/v1/simulate";
/// B2C payment request
pub const B2C_PAYMENT_PATH: &str = "/mpesa/b2c/v1/paymentrequest";
/// Transaction status query
pub const TRANSACTION_STATUS_PATH: &str = "/mpesa/transactionstatus/v1/query";
/// Account balance query
pub const ACCOUNT_BALANCE_PATH: &str = "/mpesa/accountbalance/v1/query";
/// Transaction reversal
pub const REVERSAL_PATH: &str = "/mpesa/reversal/v1/request";
/// B2B payment request (pay bill, buy goods, account top up)
pub const B2B_PAYMENT_PATH: &str = "/mpesa/b2b/v1/paymentrequest";
/// Tax remittance to KRA
pub const TAX_REMITTANCE_PATH: &str = "/mpesa/b2b/v1/remittax";
/// Dynamic QR generation
pub const DYNAMIC_QR_PATH: &str = "/mpesa/qrcode/v1/generate";
/// M-Pesa Ratiba standing order creation
pub const RATIBA_PATH: &str = "/standingorder/v1/createStandingOrderExternal";
/// B2B express checkout (USSD push to till)
pub const B2B_EXPRESS_CHECKOUT_PATH: &str = "/v1/ussdpush/get-msisdn";
/// Bill Manager opt in
pub const BILL_MANAGER_OPT_IN_PATH: &str = "/v1/billmanager-invoice/optin";
/// Bill Manager single invoice
pub const BILL_MANAGER_SINGLE_INVOICE_PATH: &str = "/v1/billmanager-invoice/single-invoicing";
/// Bill Manager bulk invoicing
pub const BILL_MANAGER_BULK_INVOICE_PATH: &str = "/v1/billmanager-invoice/bulk-invoicing";
/// Bill Manager payment reconciliation
pub const BILL_MANAGER_RECONCILIATION_PATH: &str = "/v1/billmanager-invoice/reconciliation";
/// Bill Manager single invoice cancellation
pub const BILL_MANAGER_CANCEL_INVOICE_PATH: &str = "/v1/billmanager-invoice/cancel-single-invoice";
/// Bill Manager bulk invoice cancellation
pub const BILL_MANAGER_CANCEL_BULK_INVOICES_PATH: &str =
    "/v1/billmanager-invoice/cancel-bulk-invoices";
/// Bill Manager opt in details update
pub const BILL_MANAGER_UPDATE_OPT_IN_PATH: &str = "/v1/billmanager-invoice/change-optin-details";

/// Environment variable names read by [`crate::config::Config::new`]
pub mod env {
    /// Consumer key of the app on developer.safaricom.co.ke
    pub const CONSUMER_KEY: &str = "MPESA_CONSUMER_KEY";
    /// Consumer secret of the app on developer.safaricom.co.ke
    pub const CONSUMER_SECRET: &str = "MPESA_CONSUMER_SECRET";
    /// Generic callback URL
    pub const CALLBACK_URL: &str = "MPESA_CALLBACK_URL";
    /// API base URL
    pub const BASE_URL: &str = "MPESA_BASE_URL";
    /// Paybill number
    pub const PAYBILL_NUMBER: &str = "MPESA_PAYBILL_NUMBER";
    /// Lipa Na M-Pesa shortcode (paybill or till)
    pub const LIPA_NA_MPESA_SHORTCODE: &str = "LIPA_NA_MPESA_SHORTCODE";
    /// Lipa Na M-Pesa callback URL
    pub const LIPA_NA_MPESA_CALLBACK_URL: &str = "LIPA_NA_MPESA_CALLBACK_URL";
    /// Lipa Na M-Pesa passkey
    pub const LIPA_NA_MPESA_PASSKEY: &str = "LIPA_NA_MPESA_PASSKEY";
    /// C2B confirmation URL
    pub const CONFIRMATION_URL: &str = "MPESA_CONFIRMATION_URL";
    /// C2B validation URL
    pub const VALIDATION_URL: &str = "MPESA_VALIDATION_URL";
    /// Initiator username
    pub const INITIATOR_USERNAME: &str = "MPESA_INITIATOR_USERNAME";
    /// Initiator password
    pub const INITIATOR_PASSWORD: &str = "MPESA_INITIATOR_PASSWORD";
    /// `sandbox` or `production`
    pub const ENVIRONMENT: &str = "MPESA_ENVIRONMENT";
    /// Queue timeout URL
    pub const QUEUE_TIMEOUT_URL: &str = "MPESA_QUEUE_TIMEOUT_URL";
    /// Result URL
    pub const RESULT_URL: &str = "MPESA_RESULT_URL";
    /// Path of the sandbox certificate
    pub const SANDBOX_CERT_PATH: &str = "MPESA_SANDBOX_CERT_PATH";
    /// Path of the production certificate
    pub const PRODUCTION_CERT_PATH: &str = "MPESA_PRODUCTION_CERT_PATH";
    /// Optional HTTP timeout in seconds
    pub const HTTP_TIMEOUT: &str = "MPESA_HTTP_TIMEOUT";
}
