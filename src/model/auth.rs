/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use serde::{Deserialize, Deserializer, Serialize};

/// Response from the OAuth client-credentials endpoint
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TokenResponse {
    /// Bearer token
    pub access_token: String,
    /// Seconds until the token expires (delta, not absolute).
    /// The API sends it as a string, e.g. `"3599"`.
    #[serde(deserialize_with = "string_or_number_as_u64")]
    pub expires_in: u64,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StringOrNumber {
    String(String),
    Number(u64),
}

fn string_or_number_as_u64<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    match StringOrNumber::deserialize(deserializer)? {
        StringOrNumber::Number(n) => Ok(n),
        StringOrNumber::String(s) => s.trim().parse::<u64>().map_err(serde::de::Error::custom),
    }
}
