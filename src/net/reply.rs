//! Decoding of service reply bodies into typed results.
//!
//! The service answers `200` with either the success schema or
//! `{ "error": "..." }`. Framework-level rejections (e.g. a `422` validation
//! body) match neither and are treated as transport failures.

#[cfg(test)]
#[path = "reply_test.rs"]
mod reply_test;

use serde::de::DeserializeOwned;
use serde_json::Value;

use super::types::Endpoint;
use crate::error::ControllerError;

/// Decode a raw reply body for `endpoint`.
///
/// # Errors
///
/// Returns `Application` when the body carries a truthy `error` field and
/// `Transport` when the body is not JSON or does not match `T`.
pub fn decode_reply<T: DeserializeOwned>(endpoint: Endpoint, body: &str) -> Result<T, ControllerError> {
    let value: Value = serde_json::from_str(body)
        .map_err(|e| ControllerError::transport(endpoint, format!("invalid JSON reply: {e}")))?;

    if let Some(message) = error_field(&value) {
        return Err(ControllerError::Application { endpoint, message });
    }

    serde_json::from_value(value)
        .map_err(|e| ControllerError::transport(endpoint, format!("unexpected reply shape: {e}")))
}

/// Extract the service's `error` field when it is truthy.
///
/// Empty strings, `false`, `0` and `null` do not count as errors.
fn error_field(value: &Value) -> Option<String> {
    match value.get("error")? {
        Value::Null | Value::Bool(false) => None,
        Value::String(s) if s.is_empty() => None,
        Value::String(s) => Some(s.clone()),
        Value::Number(n) if n.as_f64().is_some_and(|f| f.abs() < f64::MIN_POSITIVE) => None,
        other => Some(other.to_string()),
    }
}
