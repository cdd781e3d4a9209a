//! Failure taxonomy for the request gateway and response normalization.
//!
//! The server's error bodies are not a negotiated contract, so the message
//! extraction here is deliberately tolerant: `detail` wins over `message`,
//! and a generic status line is the last resort.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use serde_json::Value;

/// Normalized outcome of one backend call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The response body was not valid JSON. Carries the raw body text so
    /// proxy error pages still surface something readable.
    #[error("{0}")]
    MalformedResponse(String),

    /// Non-success HTTP status. The message comes from the body when the
    /// server provided one.
    #[error("{message}")]
    RequestFailed { status: u16, message: String },

    /// A 2xx body that did not match the endpoint's expected schema, or a
    /// request payload that could not be serialized.
    #[error("unexpected response shape: {0}")]
    Decode(String),

    /// Transport-level failure: network unreachable, request aborted, or a
    /// call issued outside a browser environment.
    #[error("{0}")]
    Network(String),
}

impl ApiError {
    pub(crate) fn malformed(text: &str) -> Self {
        if text.trim().is_empty() {
            Self::MalformedResponse("Invalid server response".to_owned())
        } else {
            Self::MalformedResponse(text.to_owned())
        }
    }
}

/// Normalize a raw HTTP response into the gateway's result contract.
///
/// The body arrives as text so empty bodies are tolerated: empty text parses
/// to JSON `null` and only the status check applies. Message precedence for
/// failed statuses is `detail`, then `message`, then `Request failed (<status>)`.
///
/// # Errors
///
/// `MalformedResponse` for non-JSON body text, `RequestFailed` for a
/// non-2xx status.
pub fn decode_response(status: u16, text: &str) -> Result<Value, ApiError> {
    let data = if text.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(text).map_err(|_| ApiError::malformed(text))?
    };

    if !(200..300).contains(&status) {
        return Err(ApiError::RequestFailed {
            status,
            message: failure_message(status, &data),
        });
    }

    Ok(data)
}

fn failure_message(status: u16, data: &Value) -> String {
    data.get("detail")
        .and_then(Value::as_str)
        .or_else(|| data.get("message").and_then(Value::as_str))
        .map_or_else(|| format!("Request failed ({status})"), str::to_owned)
}
