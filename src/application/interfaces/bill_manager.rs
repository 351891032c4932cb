use crate::error::AppError;
use crate::model::requests::{Invoice, ReconciliationRequest};
use async_trait::async_trait;

/// Interface for Bill Manager invoicing
#[async_trait]
pub trait BillManagerService: Send + Sync {
    /// Onboards the paybill onto Bill Manager
    ///
    /// # Arguments
    /// * `email` - Official contact email
    /// * `official_contact` - Official contact phone number
    /// * `send_reminders` - Whether customers get payment reminders
    /// * `logo` - Optional logo image URL
    async fn bill_manager_opt_in(
        &self,
        email: &str,
        official_contact: &str,
        send_reminders: bool,
        logo: Option<&str>,
    ) -> Result<String, AppError>;

    /// Updates the opt in details of the paybill
    async fn bill_manager_update_opt_in(
        &self,
        email: &str,
        official_contact: &str,
        send_reminders: bool,
        logo: Option<&str>,
    ) -> Result<String, AppError>;

    /// Sends one invoice
    async fn bill_manager_single_invoice(&self, invoice: &Invoice) -> Result<String, AppError>;

    /// Sends several invoices in one request
    async fn bill_manager_bulk_invoice(&self, invoices: &[Invoice]) -> Result<String, AppError>;

    /// Acknowledges a payment against an invoice
    async fn bill_manager_reconciliation(
        &self,
        reconciliation: &ReconciliationRequest,
    ) -> Result<String, AppError>;

    /// Cancels one invoice
    async fn bill_manager_cancel_invoice(
        &self,
        external_reference: &str,
    ) -> Result<String, AppError>;

    /// Cancels several invoices in one request
    async fn bill_manager_cancel_bulk_invoices(
        &self,
        external_references: &[&str],
    ) -> Result<String, AppError>;
}
