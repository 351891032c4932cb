/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::application::security::CertificateSource;
use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_PRODUCTION_CERT_PATH, DEFAULT_SANDBOX_CERT_PATH, env as vars,
};
use crate::error::AppError;
use crate::utils::config::{get_env_non_empty, get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, error};

/// Target M-Pesa environment.
///
/// Selects which public key certificate encrypts the initiator password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// developer sandbox
    #[default]
    Sandbox,
    /// live
    Production,
}

impl Environment {
    /// Lowercase name as used in configuration
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Sandbox => "sandbox",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sandbox" => Ok(Environment::Sandbox),
            "production" => Ok(Environment::Production),
            _ => Err(AppError::invalid_argument(
                "environment",
                s,
                ["sandbox", "production"],
            )),
        }
    }
}

/// Configuration value that must never reach logs
///
/// `Debug`, `Display` and `Serialize` all print `[REDACTED]`; the value is
/// only reachable through [`Secret::expose`]. Deserializes from a plain string.
#[derive(Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(transparent)]
pub struct Secret(String);

const REDACTED: &str = "[REDACTED]";

impl Secret {
    /// The secret in plain text
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }

    /// Whether the secret is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<String> for Secret {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for Secret {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Debug for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl fmt::Display for Secret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl Serialize for Secret {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(REDACTED)
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// App credentials from developer.safaricom.co.ke
pub struct Credentials {
    /// Consumer key of the app
    pub consumer_key: String,
    /// Consumer secret of the app
    pub consumer_secret: Secret,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for the REST API
pub struct RestApiConfig {
    /// Base URL for M-Pesa API calls
    pub base_url: String,
    /// Request timeout in seconds. `None` keeps the transport default.
    pub timeout: Option<u64>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Lipa Na M-Pesa Online (STK push) settings
pub struct LipaNaMpesaConfig {
    /// Paybill or till number receiving STK payments
    pub shortcode: Option<String>,
    /// Passkey issued for the shortcode
    pub passkey: Option<Secret>,
    /// URL receiving STK push results
    pub callback_url: Option<String>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Initiator used by privileged operations
pub struct InitiatorConfig {
    /// Initiator username
    pub username: Option<String>,
    /// Initiator password, encrypted into the `SecurityCredential` on every call
    pub password: Option<Secret>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone, Default)]
/// Callback URLs M-Pesa posts results to
pub struct CallbackConfig {
    /// Generic callback URL (Ratiba, Bill Manager, B2B express checkout)
    pub callback_url: Option<String>,
    /// C2B confirmation URL
    pub confirmation_url: Option<String>,
    /// C2B validation URL
    pub validation_url: Option<String>,
    /// URL notified when a request times out in the queue
    pub queue_timeout_url: Option<String>,
    /// URL receiving asynchronous results
    pub result_url: Option<String>,
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Locations of the M-Pesa public key certificates
pub struct CertificateConfig {
    /// Sandbox certificate
    pub sandbox_path: PathBuf,
    /// Production certificate
    pub production_path: PathBuf,
}

impl Default for CertificateConfig {
    fn default() -> Self {
        Self {
            sandbox_path: PathBuf::from(DEFAULT_SANDBOX_CERT_PATH),
            production_path: PathBuf::from(DEFAULT_PRODUCTION_CERT_PATH),
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Main configuration for the M-Pesa API client
///
/// Loaded once and handed to [`crate::application::client::Client`], which
/// never mutates it.
pub struct Config {
    /// App credentials
    pub credentials: Credentials,
    /// REST API configuration
    pub rest_api: RestApiConfig,
    /// Sandbox or production
    pub environment: Environment,
    /// Paybill used as `PartyA` / `ShortCode` by C2B, B2C, B2B and queries
    pub paybill_number: Option<String>,
    /// STK push settings
    pub lipa_na_mpesa: LipaNaMpesaConfig,
    /// Initiator settings
    pub initiator: InitiatorConfig,
    /// Callback URLs
    pub callbacks: CallbackConfig,
    /// Public key certificates
    pub certificates: CertificateConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// Creates a new configuration from the process environment and an optional `.env` file
    pub fn new() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let consumer_key = get_env_or_default(vars::CONSUMER_KEY, String::new());
        let consumer_secret =
            Secret::from(get_env_or_default(vars::CONSUMER_SECRET, String::new()));

        if consumer_key.is_empty() {
            error!("{} not found in environment variables or .env file", vars::CONSUMER_KEY);
        }
        if consumer_secret.is_empty() {
            error!("{} not found in environment variables or .env file", vars::CONSUMER_SECRET);
        }

        let environment = match get_env_non_empty(vars::ENVIRONMENT) {
            Some(raw) => raw.parse().unwrap_or_else(|e| {
                error!("{e}, using sandbox");
                Environment::Sandbox
            }),
            None => Environment::Sandbox,
        };

        Config {
            credentials: Credentials {
                consumer_key,
                consumer_secret,
            },
            rest_api: RestApiConfig {
                base_url: get_env_non_empty(vars::BASE_URL)
                    .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
                timeout: get_env_or_none(vars::HTTP_TIMEOUT),
            },
            environment,
            paybill_number: get_env_non_empty(vars::PAYBILL_NUMBER),
            lipa_na_mpesa: LipaNaMpesaConfig {
                shortcode: get_env_non_empty(vars::LIPA_NA_MPESA_SHORTCODE),
                passkey: get_env_non_empty(vars::LIPA_NA_MPESA_PASSKEY).map(Secret::from),
                callback_url: get_env_non_empty(vars::LIPA_NA_MPESA_CALLBACK_URL),
            },
            initiator: InitiatorConfig {
                username: get_env_non_empty(vars::INITIATOR_USERNAME),
                password: get_env_non_empty(vars::INITIATOR_PASSWORD).map(Secret::from),
            },
            callbacks: CallbackConfig {
                callback_url: get_env_non_empty(vars::CALLBACK_URL),
                confirmation_url: get_env_non_empty(vars::CONFIRMATION_URL),
                validation_url: get_env_non_empty(vars::VALIDATION_URL),
                queue_timeout_url: get_env_non_empty(vars::QUEUE_TIMEOUT_URL),
                result_url: get_env_non_empty(vars::RESULT_URL),
            },
            certificates: CertificateConfig {
                sandbox_path: get_env_non_empty(vars::SANDBOX_CERT_PATH)
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_SANDBOX_CERT_PATH)),
                production_path: get_env_non_empty(vars::PRODUCTION_CERT_PATH)
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from(DEFAULT_PRODUCTION_CERT_PATH)),
            },
        }
    }

    /// Creates a sandbox configuration with only credentials and base URL set
    ///
    /// Every other field is left empty; operations needing them fail with
    /// [`AppError::Config`].
    pub fn minimal(consumer_key: &str, consumer_secret: &str, base_url: &str) -> Self {
        Config {
            credentials: Credentials {
                consumer_key: consumer_key.to_string(),
                consumer_secret: Secret::from(consumer_secret),
            },
            rest_api: RestApiConfig {
                base_url: base_url.to_string(),
                timeout: None,
            },
            environment: Environment::Sandbox,
            paybill_number: None,
            lipa_na_mpesa: LipaNaMpesaConfig::default(),
            initiator: InitiatorConfig::default(),
            callbacks: CallbackConfig::default(),
            certificates: CertificateConfig::default(),
        }
    }

    /// Certificate used to encrypt the initiator password in the configured environment
    #[must_use]
    pub fn certificate_source(&self) -> CertificateSource {
        match self.environment {
            Environment::Sandbox => CertificateSource::Path(self.certificates.sandbox_path.clone()),
            Environment::Production => {
                CertificateSource::Path(self.certificates.production_path.clone())
            }
        }
    }

    /// Paybill number, or an error naming the missing variable
    pub fn paybill_number(&self) -> Result<&str, AppError> {
        require(&self.paybill_number, vars::PAYBILL_NUMBER)
    }

    /// Lipa Na M-Pesa shortcode
    pub fn lipa_na_mpesa_shortcode(&self) -> Result<&str, AppError> {
        require(&self.lipa_na_mpesa.shortcode, vars::LIPA_NA_MPESA_SHORTCODE)
    }

    /// Lipa Na M-Pesa passkey
    pub fn lipa_na_mpesa_passkey(&self) -> Result<&str, AppError> {
        require_secret(&self.lipa_na_mpesa.passkey, vars::LIPA_NA_MPESA_PASSKEY)
    }

    /// Lipa Na M-Pesa callback URL
    pub fn lipa_na_mpesa_callback_url(&self) -> Result<&str, AppError> {
        require(&self.lipa_na_mpesa.callback_url, vars::LIPA_NA_MPESA_CALLBACK_URL)
    }

    /// Initiator username
    pub fn initiator_username(&self) -> Result<&str, AppError> {
        require(&self.initiator.username, vars::INITIATOR_USERNAME)
    }

    /// Initiator password
    pub fn initiator_password(&self) -> Result<&str, AppError> {
        require_secret(&self.initiator.password, vars::INITIATOR_PASSWORD)
    }

    /// Generic callback URL
    pub fn callback_url(&self) -> Result<&str, AppError> {
        require(&self.callbacks.callback_url, vars::CALLBACK_URL)
    }

    /// C2B confirmation URL
    pub fn confirmation_url(&self) -> Result<&str, AppError> {
        require(&self.callbacks.confirmation_url, vars::CONFIRMATION_URL)
    }

    /// C2B validation URL
    pub fn validation_url(&self) -> Result<&str, AppError> {
        require(&self.callbacks.validation_url, vars::VALIDATION_URL)
    }

    /// Queue timeout URL
    pub fn queue_timeout_url(&self) -> Result<&str, AppError> {
        require(&self.callbacks.queue_timeout_url, vars::QUEUE_TIMEOUT_URL)
    }

    /// Result URL
    pub fn result_url(&self) -> Result<&str, AppError> {
        require(&self.callbacks.result_url, vars::RESULT_URL)
    }
}

fn require<'a>(value: &'a Option<String>, env_var: &str) -> Result<&'a str, AppError> {
    value
        .as_deref()
        .ok_or_else(|| AppError::missing_config(env_var))
}

fn require_secret<'a>(value: &'a Option<Secret>, env_var: &str) -> Result<&'a str, AppError> {
    value
        .as_ref()
        .map(Secret::expose)
        .ok_or_else(|| AppError::missing_config(env_var))
}
