/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/

//! Security credential generation
//!
//! Privileged operations (B2C, B2B, reversal, balance, transaction status,
//! tax remittance) authenticate the initiator with a `SecurityCredential`:
//! the initiator password encrypted with the M-Pesa public key certificate
//! of the target environment (RSA, PKCS#1 v1.5 padding), base64 encoded.

use crate::error::AppError;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rsa::pkcs8::DecodePublicKey;
use rsa::rand_core::OsRng;
use rsa::{Pkcs1v15Encrypt, RsaPublicKey};
use std::fs;
use std::path::PathBuf;
use tracing::{debug, error};
use x509_cert::Certificate;
use x509_cert::der::{Decode, DecodePem, Encode};

const PEM_CERTIFICATE_TAG: &str = "-----BEGIN CERTIFICATE-----";
const PEM_PUBLIC_KEY_TAG: &str = "-----BEGIN PUBLIC KEY-----";

/// Where the public key material comes from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CertificateSource {
    /// File on disk: PEM or DER X.509 certificate, or PEM public key
    Path(PathBuf),
    /// In-memory material in any of the formats accepted for `Path`,
    /// e.g. a certificate embedded with `include_bytes!`
    Pem(Vec<u8>),
}

impl CertificateSource {
    fn read(&self) -> Result<Vec<u8>, AppError> {
        match self {
            CertificateSource::Path(path) => fs::read(path).map_err(|e| {
                error!("Failed to read certificate {}: {}", path.display(), e);
                AppError::Encryption(format!(
                    "cannot read certificate {}: {e}",
                    path.display()
                ))
            }),
            CertificateSource::Pem(bytes) => Ok(bytes.clone()),
        }
    }

    /// Loads the RSA public key held by this source
    ///
    /// # Errors
    /// [`AppError::Encryption`] when the material is unreadable or not an RSA key
    pub fn public_key(&self) -> Result<RsaPublicKey, AppError> {
        let bytes = self.read()?;
        parse_public_key(&bytes)
    }
}

fn parse_public_key(bytes: &[u8]) -> Result<RsaPublicKey, AppError> {
    let text = std::str::from_utf8(bytes).ok();

    let spki_der = match text {
        Some(pem) if pem.contains(PEM_PUBLIC_KEY_TAG) => {
            return RsaPublicKey::from_public_key_pem(pem.trim())
                .map_err(|e| AppError::Encryption(format!("invalid public key: {e}")));
        }
        Some(pem) if pem.contains(PEM_CERTIFICATE_TAG) => {
            let cert = Certificate::from_pem(pem.trim().as_bytes())
                .map_err(|e| AppError::Encryption(format!("invalid certificate: {e}")))?;
            spki_of(&cert)?
        }
        _ => {
            let cert = Certificate::from_der(bytes)
                .map_err(|e| AppError::Encryption(format!("invalid certificate: {e}")))?;
            spki_of(&cert)?
        }
    };

    RsaPublicKey::from_public_key_der(&spki_der)
        .map_err(|e| AppError::Encryption(format!("certificate does not hold an RSA key: {e}")))
}

fn spki_of(cert: &Certificate) -> Result<Vec<u8>, AppError> {
    cert.tbs_certificate
        .subject_public_key_info
        .to_der()
        .map_err(|e| AppError::Encryption(format!("invalid subject public key info: {e}")))
}

/// Encrypted initiator password sent as `SecurityCredential`.
///
/// Derived fresh on every privileged call and never cached.
#[derive(Clone, PartialEq, Eq)]
pub struct SecurityCredential(String);

impl SecurityCredential {
    /// Encrypts `password` with the public key from `source`
    ///
    /// # Errors
    /// [`AppError::Encryption`] if the certificate cannot be read or encryption fails
    pub fn generate(password: &str, source: &CertificateSource) -> Result<Self, AppError> {
        let public_key = source.public_key()?;
        Self::with_key(password, &public_key)
    }

    /// Encrypts `password` with an already loaded key
    pub fn with_key(password: &str, public_key: &RsaPublicKey) -> Result<Self, AppError> {
        let ciphertext = public_key
            .encrypt(&mut OsRng, Pkcs1v15Encrypt, password.as_bytes())
            .map_err(|e| AppError::Encryption(format!("rsa encryption failed: {e}")))?;
        debug!("Security credential generated");
        Ok(Self(STANDARD.encode(ciphertext)))
    }

    /// Base64 ciphertext
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consumes the credential, returning the base64 ciphertext
    #[must_use]
    pub fn into_inner(self) -> String {
        self.0
    }
}

impl std::fmt::Debug for SecurityCredential {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SecurityCredential([REDACTED])")
    }
}
