/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use reqwest::StatusCode;
use thiserror::Error;

/// Main error type for the library
#[derive(Debug, Error)]
pub enum AppError {
    /// The OAuth client-credentials exchange did not return 200.
    /// The enclosing operation must be aborted.
    #[error("authentication failure: oauth endpoint returned {status}: {body}")]
    AuthenticationFailure {
        /// Status returned by the OAuth endpoint
        status: StatusCode,
        /// Raw response body
        body: String,
    },

    /// The request could not be dispatched (missing or malformed HTTP verb)
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// An enum-constrained parameter was outside its allowed set
    #[error("invalid argument {field}: {value:?} is not one of [{}]", .allowed.join(", "))]
    InvalidArgument {
        /// Name of the offending parameter
        field: &'static str,
        /// Value that was supplied
        value: String,
        /// Values that would have been accepted
        allowed: Vec<String>,
    },

    /// Reading the certificate or encrypting the initiator password failed
    #[error("encryption error: {0}")]
    Encryption(String),

    /// A configuration value required by the operation is absent
    #[error("missing configuration: {0}")]
    Config(String),

    /// Transport-level failure from the HTTP client
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON (de)serialization failure
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// Filesystem failure
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// Builds an [`AppError::InvalidArgument`] from any displayable allowed set
    pub fn invalid_argument<I, S>(field: &'static str, value: impl Into<String>, allowed: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        AppError::InvalidArgument {
            field,
            value: value.into(),
            allowed: allowed.into_iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Builds an [`AppError::Config`] naming the environment variable that should be set
    pub fn missing_config(env_var: &str) -> Self {
        AppError::Config(format!("{env_var} is not set"))
    }
}
