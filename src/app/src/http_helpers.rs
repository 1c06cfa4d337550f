//! HTTP helper functions for Crux Core
//!
//! Every device endpoint answers with an `{ok, error?, ...}` envelope. These
//! helpers turn raw responses into `Result<T, ApiError>` so handlers only deal
//! with typed payloads.

use crux_http::{HttpError, Response};
use serde::de::{DeserializeOwned, IgnoredAny};
use serde_json::Value;

use crate::types::ApiError;

/// Base URL for device API endpoints.
///
/// NOTE: This is a dummy prefix required because `crux_http` (v0.16.0-rc2) requires
/// absolute URLs and rejects relative paths (`RelativeUrlWithoutBase` error).
/// The shell replaces this prefix with the configured device URL before sending.
pub const BASE_URL: &str = "https://relative";

/// Constructs the full address from a given endpoint.
///
/// # Example
/// ```
/// use connectivity_console_core::http_helpers::build_url;
/// let url = build_url("/api/scan");
/// assert_eq!(url, "https://relative/api/scan");
/// ```
pub fn build_url(endpoint: &str) -> String {
    format!("{BASE_URL}{endpoint}")
}

/// Parse an envelope body into its payload.
///
/// The payload fields live next to `ok` and `error`, so `T` is read from the
/// whole object. A body that is not JSON counts as a transport failure.
pub fn parse_envelope<T: DeserializeOwned>(status: u16, body: &[u8]) -> Result<T, ApiError> {
    let envelope: Value = serde_json::from_slice(body).map_err(|e| {
        ApiError::Transport(format!("invalid response body (HTTP {status}): {e}"))
    })?;

    let ok = envelope.get("ok").and_then(Value::as_bool).unwrap_or(false);

    if !ok || !(200..300).contains(&status) {
        let error = envelope
            .get("error")
            .and_then(Value::as_str)
            .map(str::to_string);
        return Err(ApiError::Rejected { status, error });
    }

    serde_json::from_value(envelope)
        .map_err(|e| ApiError::Transport(format!("unexpected payload (HTTP {status}): {e}")))
}

/// Parse the answer of `POST /api/connect`, which only succeeds on exactly HTTP 200
pub fn parse_connect_response(status: u16, body: &[u8]) -> Result<(), ApiError> {
    let _: IgnoredAny = parse_envelope(status, body)?;

    if status == 200 {
        Ok(())
    } else {
        Err(ApiError::Rejected {
            status,
            error: None,
        })
    }
}

fn with_response<T>(
    result: crux_http::Result<Response<Vec<u8>>>,
    parse: impl FnOnce(u16, &[u8]) -> Result<T, ApiError>,
) -> Result<T, ApiError> {
    match result {
        Ok(mut response) => {
            let status = u16::from(response.status());
            let body = response.take_body().unwrap_or_default();
            parse(status, &body)
        }
        // non-2xx statuses arrive as errors but still carry the envelope
        Err(HttpError::Http {
            code,
            body: Some(body),
            ..
        }) => parse(u16::from(code), &body),
        Err(e) => Err(ApiError::Transport(e.to_string())),
    }
}

/// Process HTTP response result and parse the envelope payload
pub fn process_envelope<T: DeserializeOwned>(
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<T, ApiError> {
    with_response(result, parse_envelope)
}

/// Process HTTP response result for endpoints without payload
pub fn process_ack(result: crux_http::Result<Response<Vec<u8>>>) -> Result<(), ApiError> {
    with_response(result, |status, body| {
        parse_envelope::<IgnoredAny>(status, body).map(|_| ())
    })
}

/// Process HTTP response result of a connect request
pub fn process_connect_response(
    result: crux_http::Result<Response<Vec<u8>>>,
) -> Result<(), ApiError> {
    with_response(result, parse_connect_response)
}
