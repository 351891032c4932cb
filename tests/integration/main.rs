mod auth_tests;
mod common;
mod dispatch_tests;
mod disbursement_tests;
