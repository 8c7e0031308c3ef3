//! Response body decoding.
//!
//! The API answers with either an object keyed by country (object-of-objects)
//! or an object carrying a `message` field when it refuses the request.

use crate::model::{Country, FetchError};
use serde_json::Value;
use tracing::warn;

/// Field that marks an API-level error response.
pub const MESSAGE_FIELD: &str = "message";

/// Parse the raw body as JSON.
///
/// # Errors
///
/// Returns `FetchError::Decode` when the body is not JSON.
pub fn parse_body(body: &str) -> Result<Value, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

/// Extract the API error carried by a response, if any.
///
/// Only a truthy `message` counts: empty strings, `0`, `false` and `null`
/// are ignored. String messages are returned verbatim, other values as JSON.
pub fn api_error(value: &Value) -> Option<FetchError> {
    let message = value.as_object()?.get(MESSAGE_FIELD)?;
    if !is_truthy(message) {
        return None;
    }
    let message = match message {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    };
    Some(FetchError::Api { message })
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Flatten a response into records, keeping response order.
///
/// Objects contribute their values in key order, arrays their elements.
/// Members that are not JSON objects are skipped.
///
/// # Errors
///
/// Returns `FetchError::Decode` for any other top-level shape.
pub fn flatten_records(value: Value) -> Result<Vec<Country>, FetchError> {
    let members: Vec<(String, Value)> = match value {
        Value::Object(map) => map.into_iter().collect(),
        Value::Array(items) => items
            .into_iter()
            .enumerate()
            .map(|(idx, item)| (idx.to_string(), item))
            .collect(),
        other => {
            return Err(FetchError::Decode(format!(
                "expected an object of countries, got {}",
                json_kind(&other)
            )))
        }
    };

    let mut countries = Vec::with_capacity(members.len());
    for (key, member) in members {
        match Country::from_value(member) {
            Some(country) => countries.push(country),
            None => warn!(key = %key, "Skipping non-object member in country response"),
        }
    }
    Ok(countries)
}

/// Full decoding pipeline for a body whose transport succeeded.
///
/// # Errors
///
/// `Decode` for non-JSON or unusable shapes, `Api` for a `message` response.
pub fn decode_response(body: &str) -> Result<Vec<Country>, FetchError> {
    let value = parse_body(body)?;
    if let Some(err) = api_error(&value) {
        return Err(err);
    }
    flatten_records(value)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
