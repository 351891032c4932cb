/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
/// OAuth response model
pub mod auth;
/// Enum-constrained request parameters
pub mod enums;
/// HTTP request dispatch
pub mod http;
/// Request payloads for API calls
pub mod requests;
