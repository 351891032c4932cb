/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::error::AppError;
use once_cell::sync::Lazy;
use regex::Regex;

/// Kenyan mobile number in any of the forms customers type it:
/// `0712345678`, `712345678`, `+254712345678`, `254712345678`.
static MSISDN_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:\+?254|0)?([17]\d{8})$").expect("valid msisdn regex"));

/// Normalises a Kenyan phone number to the `2547XXXXXXXX` / `2541XXXXXXXX`
/// form required by `PartyA`, `PhoneNumber` and `Msisdn` fields.
///
/// Spaces and dashes are ignored.
///
/// # Errors
/// Returns [`AppError::InvalidArgument`] when the number is not a Kenyan mobile number.
///
/// # Examples
/// ```
/// use mpesa_client::utils::phone::normalize_msisdn;
/// assert_eq!(normalize_msisdn("0712 345 678").unwrap(), "254712345678");
/// assert_eq!(normalize_msisdn("+254112345678").unwrap(), "254112345678");
/// ```
pub fn normalize_msisdn(phone: &str) -> Result<String, AppError> {
    let compact: String = phone
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();

    MSISDN_RE
        .captures(&compact)
        .and_then(|caps| caps.get(1))
        .map(|subscriber| format!("254{}", subscriber.as_str()))
        .ok_or_else(|| {
            AppError::invalid_argument(
                "phone_number",
                phone,
                ["2547XXXXXXXX", "2541XXXXXXXX", "07XXXXXXXX", "01XXXXXXXX"],
            )
        })
}
