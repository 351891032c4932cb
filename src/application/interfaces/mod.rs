/// Bill Manager service interface
pub mod bill_manager;
/// Disbursement (B2C, B2B, tax) service interface
pub mod disbursement;
/// Account query and reversal service interface
pub mod experience;
/// STK push service interface
pub mod express;
/// Customer payment service interface
pub mod payments;
