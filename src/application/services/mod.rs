/// Bill Manager operations
pub mod bill_manager;
/// B2C, B2B and tax remittance operations
pub mod disbursement;
/// Balance, status and reversal operations
pub mod experience;
/// STK push and B2B express checkout operations
pub mod express;
/// C2B, dynamic QR and Ratiba operations
pub mod payments;

pub use crate::application::interfaces::bill_manager::*;
pub use crate::application::interfaces::disbursement::*;
pub use crate::application::interfaces::experience::*;
pub use crate::application::interfaces::express::*;
pub use crate::application::interfaces::payments::*;
