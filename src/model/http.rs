/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 15/10/26
******************************************************************************/
use crate::error::AppError;
use reqwest::{Client, Method};
use serde::Serialize;
use tracing::{debug, warn};

/// Joins a relative API path onto the configured base URL.
///
/// Absolute URLs are passed through untouched.
#[must_use]
pub fn build_url(base_url: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!(
        "{}/{}",
        base_url.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

/// Parses an HTTP verb supplied as a string.
///
/// # Errors
/// [`AppError::InvalidRequest`] when the verb is empty or not a valid method token
pub fn parse_method(method: &str) -> Result<Method, AppError> {
    let method = method.trim();
    if method.is_empty() {
        return Err(AppError::InvalidRequest(
            "an HTTP method is required".to_string(),
        ));
    }
    Method::from_bytes(method.to_ascii_uppercase().as_bytes())
        .map_err(|_| AppError::InvalidRequest(format!("{method:?} is not a valid HTTP method")))
}

/// Sends one HTTP request and returns the response body verbatim.
///
/// Non-2xx statuses are not treated as errors: the M-Pesa error payload is
/// returned to the caller, which owns its interpretation. Transport failures
/// (connection refused, TLS, timeouts configured on `client`) are surfaced as
/// [`AppError::Http`]. No retry is attempted.
///
/// # Arguments
///
/// * `client` - The HTTP client to use for the request
/// * `method` - HTTP method
/// * `url` - Full URL to request
/// * `headers` - Vector of (header_name, header_value) tuples
/// * `body` - Optional request body, serialized to JSON
///
/// # Example
///
/// ```ignore
/// let body = make_http_request(
///     &client,
///     Method::POST,
///     "https://sandbox.safaricom.co.ke/mpesa/accountbalance/v1/query",
///     vec![("Authorization", "Bearer <token>"), ("Content-Type", "application/json")],
///     Some(&payload),
/// ).await?;
/// ```
pub async fn make_http_request<B: Serialize + ?Sized>(
    client: &Client,
    method: Method,
    url: &str,
    headers: Vec<(&str, &str)>,
    body: Option<&B>,
) -> Result<String, AppError> {
    debug!("{} {}", method, url);

    let mut request = client.request(method, url);

    for (name, value) in &headers {
        request = request.header(*name, *value);
    }

    if let Some(b) = body {
        request = request.body(serde_json::to_vec(b)?);
    }

    let response = request.send().await?;
    let status = response.status();
    debug!("Response status: {}", status);

    let text = response.text().await?;
    if !status.is_success() {
        warn!("Request to {} returned status {}: {}", url, status, text);
    }
    Ok(text)
}
