/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! # M-Pesa Client Prelude
//!
//! Imports the types and traits needed for most M-Pesa API interactions.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use mpesa_client::prelude::*;
//!
//! let client = Client::new(Config::new())?;
//! let body = client.account_balance("Month end").await?;
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

/// Configuration for the M-Pesa API client
pub use crate::config::{Config, Environment, Secret};

/// Library version information
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

/// Main error type for the library
pub use crate::error::AppError;

// ============================================================================
// CLIENT, AUTHENTICATION AND SECURITY
// ============================================================================

/// Authenticated client
pub use crate::application::client::Client;

/// Token cache
pub use crate::application::auth::{AccessToken, Auth, TokenState};

/// Initiator security credential
pub use crate::application::security::{CertificateSource, SecurityCredential};

// ============================================================================
// SERVICES (TRAITS)
// ============================================================================

pub use crate::application::interfaces::bill_manager::BillManagerService;
pub use crate::application::interfaces::disbursement::DisbursementService;
pub use crate::application::interfaces::experience::ExperienceService;
pub use crate::application::interfaces::express::ExpressService;
pub use crate::application::interfaces::payments::PaymentService;

// ============================================================================
// MODELS
// ============================================================================

/// Enum-constrained request parameters
pub use crate::model::enums::{
    B2bCommandId, B2cCommandId, C2bCommandId, C2bResponseType, QrTransactionType,
    ReceiverIdentifierType, StandingOrderFrequency, StkTransactionType,
};

/// Caller-built request models
pub use crate::model::requests::{Invoice, InvoiceItem, ReconciliationRequest, StandingOrder};

// ============================================================================
// UTILITIES
// ============================================================================

/// Logging utilities
pub use crate::utils::logger::setup_logger;

/// Clocks
pub use crate::utils::time::{Clock, ManualClock, SystemClock};

// ============================================================================
// RE-EXPORTS FROM EXTERNAL CRATES
// ============================================================================

pub use async_trait::async_trait;
pub use std::sync::Arc;
pub use tracing::{debug, error, info, warn};

/// Re-export chrono for date/time handling
pub use chrono::{DateTime, NaiveDate, Utc};
