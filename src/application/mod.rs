/// OAuth token cache
pub mod auth;
/// Authenticated M-Pesa client
pub mod client;
/// Application configuration module
pub mod config;
/// Service traits, one per API product family
pub mod interfaces;
/// Initiator security credential
pub mod security;
/// Service implementations on the client
pub mod services;
