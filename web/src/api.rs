//! Outbound client for the external demographics service.
//!
//! One endpoint: `POST {base_url}/demographics` with `{ "address": ... }`.
//! The response is returned verbatim as [`DemographicsResponse`]; all
//! normalization happens later in the `demographics` crate.

use demographics::{DemographicsResponse, LookupError};
use serde_json::json;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Base URL of the demographics service, from `DEMOGRAPHICS_API_URL`.
pub fn base_url_from_env() -> String {
    std::env::var("DEMOGRAPHICS_API_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string())
}

/// Looks up demographics for a street address.
///
/// # Errors
///
/// Returns [`LookupError::EmptyAddress`] for blank input (no network call
/// is made) and [`LookupError::RequestFailed`] for transport or non-2xx
/// failures, carrying the server's `detail` message when one was present.
pub async fn lookup(base_url: &str, address: &str) -> Result<DemographicsResponse, LookupError> {
    let address = address.trim();
    if address.is_empty() {
        return Err(LookupError::EmptyAddress);
    }

    let url = format!("{}/demographics", base_url.trim_end_matches('/'));
    let client = reqwest::Client::new();
    let response = client
        .post(&url)
        .json(&json!({ "address": address }))
        .send()
        .await
        .map_err(|e| LookupError::RequestFailed {
            message: format!("Unable to reach the demographics service: {e}"),
        })?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(LookupError::RequestFailed {
            message: failure_message(status.as_u16(), &body),
        });
    }

    response
        .json::<DemographicsResponse>()
        .await
        .map_err(|e| LookupError::RequestFailed {
            message: format!("Malformed response from the demographics service: {e}"),
        })
}

/// Builds the user-facing message for a non-2xx response. FastAPI-style
/// services put the reason in a `detail` field.
fn failure_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("detail").and_then(|d| d.as_str()).map(String::from))
        .unwrap_or_else(|| format!("Demographics request failed with status {status}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_message_uses_server_detail() {
        let msg = failure_message(422, r#"{"detail": "Address could not be geocoded"}"#);
        assert_eq!(msg, "Address could not be geocoded");
    }

    #[test]
    fn failure_message_falls_back_on_non_json_bodies() {
        assert_eq!(
            failure_message(502, "<html>Bad Gateway</html>"),
            "Demographics request failed with status 502"
        );
        // A JSON body without a string `detail` also falls back.
        assert_eq!(
            failure_message(500, r#"{"detail": 17}"#),
            "Demographics request failed with status 500"
        );
    }
}
