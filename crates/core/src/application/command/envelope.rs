//! RPC Envelope
//!
//! Every Copr API response is a JSON object with an `output` status field
//! next to the operation payload. [`Envelope::from_body`] is the one place
//! that status is checked; decoders only ever see envelopes that said "ok".

use serde_json::{Map, Value};

use crate::error::{CoprError, Result};

pub const OUTPUT_FIELD: &str = "output";
pub const OUTPUT_OK: &str = "ok";

/// Validated RPC envelope
#[derive(Debug, Clone)]
pub struct Envelope(Map<String, Value>);

impl Envelope {
    /// Parse a response body and check its `output` status
    ///
    /// # Errors
    /// - CoprError::Protocol if the body is not a JSON object or `output` is missing/null
    /// - CoprError::Rpc if `output` is anything other than "ok"
    pub fn from_body(body: &[u8]) -> Result<Self> {
        let value: Value = serde_json::from_slice(body)
            .map_err(|e| CoprError::protocol(format!("response is not valid JSON: {}", e)))?;

        let Value::Object(map) = value else {
            return Err(CoprError::protocol("response is not a JSON object"));
        };

        match map.get(OUTPUT_FIELD) {
            None | Some(Value::Null) => Err(CoprError::protocol(format!(
                "missing field `{}`",
                OUTPUT_FIELD
            ))),
            Some(Value::String(status)) if status == OUTPUT_OK => Ok(Self(map)),
            Some(_) => Err(CoprError::Rpc),
        }
    }

    pub fn as_object(&self) -> &Map<String, Value> {
        &self.0
    }

    pub fn str_field(&self, key: &str) -> Result<&str> {
        str_field(&self.0, key)
    }

    pub fn i64_field(&self, key: &str) -> Result<i64> {
        i64_field(&self.0, key)
    }

    pub fn object_field(&self, key: &str) -> Result<&Map<String, Value>> {
        object_field(&self.0, key)
    }

    pub fn array_field(&self, key: &str) -> Result<&Vec<Value>> {
        array_field(&self.0, key)
    }
}

fn field<'a>(object: &'a Map<String, Value>, key: &str) -> Result<&'a Value> {
    object
        .get(key)
        .ok_or_else(|| CoprError::protocol(format!("missing field `{}`", key)))
}

fn mistyped(key: &str, expected: &str) -> CoprError {
    CoprError::protocol(format!("field `{}` is not {}", key, expected))
}

pub(crate) fn str_field<'a>(object: &'a Map<String, Value>, key: &str) -> Result<&'a str> {
    field(object, key)?
        .as_str()
        .ok_or_else(|| mistyped(key, "a string"))
}

pub(crate) fn i64_field(object: &Map<String, Value>, key: &str) -> Result<i64> {
    field(object, key)?
        .as_i64()
        .ok_or_else(|| mistyped(key, "an integer"))
}

pub(crate) fn object_field<'a>(
    object: &'a Map<String, Value>,
    key: &str,
) -> Result<&'a Map<String, Value>> {
    field(object, key)?
        .as_object()
        .ok_or_else(|| mistyped(key, "an object"))
}

pub(crate) fn array_field<'a>(object: &'a Map<String, Value>, key: &str) -> Result<&'a Vec<Value>> {
    field(object, key)?
        .as_array()
        .ok_or_else(|| mistyped(key, "an array"))
}
