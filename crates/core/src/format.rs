//! JSON parsing and pretty-printing helpers.
//!
//! Output format:
//! - 2-space indentation
//! - No trailing newline
//! - Object keys and array elements kept in source order
//!   (`serde_json` with `preserve_order`)

use std::io;

use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};

use crate::error::{StringifyError, StringifyResult};

/// Serializes a JSON value with 2-space indentation.
///
/// Keys are emitted in insertion order, exactly as parsed.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json_pretty(value: &Value) -> StringifyResult<String> {
    let mut buffer = Vec::new();
    let formatter = PrettyFormatter::with_indent(b"  ");
    let mut serializer = Serializer::with_formatter(&mut buffer, formatter);
    value.serialize(&mut serializer).map_err(io::Error::from)?;

    let json = String::from_utf8(buffer)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(json)
}

/// Parses a string as a single JSON document.
///
/// Handles both pretty-printed and minified JSON; any valid document is
/// accepted, no schema is assumed.
///
/// # Errors
///
/// Returns [`StringifyError::MalformedJson`] if the input is not valid
/// JSON, with the decoder's position detail attached.
pub fn from_json_str(json: &str) -> StringifyResult<Value> {
    serde_json::from_str(json).map_err(StringifyError::MalformedJson)
}
