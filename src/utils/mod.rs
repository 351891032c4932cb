/// Module containing environment variable helpers
pub mod config;
/// Module containing utilities for handling unique identifiers
pub mod id;
/// Module containing logging utilities
pub mod logger;
/// Module containing phone number normalisation
pub mod phone;
/// Module containing clocks and timestamp formatting
pub mod time;

pub use id::*;
pub use logger::*;
pub use phone::*;
pub use time::*;
