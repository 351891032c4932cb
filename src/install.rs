/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! Publishes a default `.env` template into a host project
//!
//! The template lists every variable [`crate::config::Config::new`] reads,
//! with the defaults it falls back to. An existing file is only replaced
//! when the caller forces it or the confirmation callback agrees.

use crate::constants::{
    DEFAULT_BASE_URL, DEFAULT_PRODUCTION_CERT_PATH, DEFAULT_SANDBOX_CERT_PATH, env,
};
use crate::error::AppError;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Question asked when the target file already exists
pub const OVERWRITE_PROMPT: &str = "Config file already exists. Do you want to overwrite it?";

/// What [`publish_env_template`] did with the target file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    /// The file did not exist and was written
    Created,
    /// The file existed and was replaced
    Overwritten,
    /// The file existed and was left untouched
    Skipped,
}

/// Command line of the installer: `[path] [--force]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallArgs {
    /// File to write, `.env` when not given
    pub target: PathBuf,
    /// Overwrite without asking
    pub force: bool,
}

impl InstallArgs {
    /// Parses the installer arguments, program name excluded
    ///
    /// Options other than `--force` and a second path are rejected, so a
    /// mistyped flag never becomes a file name.
    pub fn parse<I>(args: I) -> Result<Self, AppError>
    where
        I: IntoIterator<Item = String>,
    {
        let mut force = false;
        let mut target: Option<PathBuf> = None;

        for arg in args {
            if arg == "--force" {
                force = true;
            } else if arg.starts_with('-') {
                return Err(AppError::invalid_argument("option", arg, ["--force"]));
            } else if target.is_some() {
                return Err(AppError::invalid_argument("path", arg, ["a single target path"]));
            } else {
                target = Some(PathBuf::from(arg));
            }
        }

        Ok(Self {
            target: target.unwrap_or_else(|| PathBuf::from(".env")),
            force,
        })
    }
}

/// Returns the `.env` template
#[must_use]
pub fn env_template() -> String {
    let entries: [(&str, &str); 18] = [
        (env::CONSUMER_KEY, ""),
        (env::CONSUMER_SECRET, ""),
        (env::ENVIRONMENT, "sandbox"),
        (env::BASE_URL, DEFAULT_BASE_URL),
        (env::CALLBACK_URL, ""),
        (env::PAYBILL_NUMBER, ""),
        (env::LIPA_NA_MPESA_SHORTCODE, ""),
        (env::LIPA_NA_MPESA_CALLBACK_URL, ""),
        (env::LIPA_NA_MPESA_PASSKEY, ""),
        (env::CONFIRMATION_URL, ""),
        (env::VALIDATION_URL, ""),
        (env::INITIATOR_USERNAME, ""),
        (env::INITIATOR_PASSWORD, ""),
        (env::QUEUE_TIMEOUT_URL, ""),
        (env::RESULT_URL, ""),
        (env::SANDBOX_CERT_PATH, DEFAULT_SANDBOX_CERT_PATH),
        (env::PRODUCTION_CERT_PATH, DEFAULT_PRODUCTION_CERT_PATH),
        (env::HTTP_TIMEOUT, ""),
    ];

    let mut template = String::from("# M-Pesa (Daraja) API configuration\n");
    for (name, default) in entries {
        template.push_str(name);
        template.push('=');
        template.push_str(default);
        template.push('\n');
    }
    template
}

/// Writes [`env_template`] to `target`
///
/// # Arguments
/// * `target` - Path of the `.env` file to write
/// * `overwrite` - Replace an existing file without asking
/// * `confirm` - Asked [`OVERWRITE_PROMPT`] when the file exists and `overwrite` is false
///
/// # Returns
/// * `Ok(InstallOutcome)` - What happened to the file
/// * `Err(AppError::Io)` - If the file could not be written
pub fn publish_env_template<F>(
    target: &Path,
    overwrite: bool,
    confirm: F,
) -> Result<InstallOutcome, AppError>
where
    F: FnOnce(&str) -> bool,
{
    if !target.exists() {
        if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }
        fs::write(target, env_template())?;
        info!("Published M-Pesa configuration to {}", target.display());
        return Ok(InstallOutcome::Created);
    }

    if overwrite || confirm(OVERWRITE_PROMPT) {
        fs::write(target, env_template())?;
        info!("Overwrote M-Pesa configuration at {}", target.display());
        Ok(InstallOutcome::Overwritten)
    } else {
        info!("M-Pesa configuration was not overwritten");
        Ok(InstallOutcome::Skipped)
    }
}
