/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::application::client::Client;
use crate::application::interfaces::bill_manager::BillManagerService;
use crate::constants::{
    BILL_MANAGER_BULK_INVOICE_PATH, BILL_MANAGER_CANCEL_BULK_INVOICES_PATH,
    BILL_MANAGER_CANCEL_INVOICE_PATH, BILL_MANAGER_OPT_IN_PATH, BILL_MANAGER_RECONCILIATION_PATH,
    BILL_MANAGER_SINGLE_INVOICE_PATH, BILL_MANAGER_UPDATE_OPT_IN_PATH,
};
use crate::error::AppError;
use crate::model::requests::{
    BillManagerOptInRequest, CancelInvoiceRequest, Invoice, ReconciliationRequest,
};
use async_trait::async_trait;
use tracing::{debug, info};

impl Client {
    fn opt_in_request(
        &self,
        email: &str,
        official_contact: &str,
        send_reminders: bool,
        logo: Option<&str>,
    ) -> Result<BillManagerOptInRequest, AppError> {
        let config = self.config();
        Ok(BillManagerOptInRequest {
            shortcode: config.paybill_number()?.to_string(),
            email: email.to_string(),
            official_contact: official_contact.to_string(),
            send_reminders: if send_reminders { "1" } else { "0" }.to_string(),
            logo: logo.map(str::to_string),
            callback_url: config.callback_url()?.to_string(),
        })
    }
}

#[async_trait]
impl BillManagerService for Client {
    async fn bill_manager_opt_in(
        &self,
        email: &str,
        official_contact: &str,
        send_reminders: bool,
        logo: Option<&str>,
    ) -> Result<String, AppError> {
        let request = self.opt_in_request(email, official_contact, send_reminders, logo)?;
        info!("Opting {} into Bill Manager", request.shortcode);
        self.send(BILL_MANAGER_OPT_IN_PATH, "POST", &request).await
    }

    async fn bill_manager_update_opt_in(
        &self,
        email: &str,
        official_contact: &str,
        send_reminders: bool,
        logo: Option<&str>,
    ) -> Result<String, AppError> {
        let request = self.opt_in_request(email, official_contact, send_reminders, logo)?;
        info!("Updating Bill Manager details of {}", request.shortcode);
        self.send(BILL_MANAGER_UPDATE_OPT_IN_PATH, "POST", &request)
            .await
    }

    async fn bill_manager_single_invoice(&self, invoice: &Invoice) -> Result<String, AppError> {
        debug!("Sending invoice {}", invoice.external_reference);
        self.send(BILL_MANAGER_SINGLE_INVOICE_PATH, "POST", invoice)
            .await
    }

    async fn bill_manager_bulk_invoice(&self, invoices: &[Invoice]) -> Result<String, AppError> {
        info!("Sending {} invoices", invoices.len());
        self.send(BILL_MANAGER_BULK_INVOICE_PATH, "POST", invoices)
            .await
    }

    async fn bill_manager_reconciliation(
        &self,
        reconciliation: &ReconciliationRequest,
    ) -> Result<String, AppError> {
        debug!(
            "Reconciling payment {} for {}",
            reconciliation.transaction_id, reconciliation.account_reference
        );
        self.send(BILL_MANAGER_RECONCILIATION_PATH, "POST", reconciliation)
            .await
    }

    async fn bill_manager_cancel_invoice(
        &self,
        external_reference: &str,
    ) -> Result<String, AppError> {
        let request = CancelInvoiceRequest {
            external_reference: external_reference.to_string(),
        };
        info!("Cancelling invoice {}", external_reference);
        self.send(BILL_MANAGER_CANCEL_INVOICE_PATH, "POST", &request)
            .await
    }

    async fn bill_manager_cancel_bulk_invoices(
        &self,
        external_references: &[&str],
    ) -> Result<String, AppError> {
        let requests: Vec<CancelInvoiceRequest> = external_references
            .iter()
            .map(|reference| CancelInvoiceRequest {
                external_reference: reference.to_string(),
            })
            .collect();
        info!("Cancelling {} invoices", requests.len());
        self.send(BILL_MANAGER_CANCEL_BULK_INVOICES_PATH, "POST", &requests)
            .await
    }
}
