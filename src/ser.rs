//! Thin wrappers around `serde_json` that report failures as [`crate::error::Error`].
use std::io;

use serde::Serialize;
use serde_json::Value;

use crate::error::Result;

/// Converts any serializable `GeoJSON` structure into a [`serde_json::Value`].
///
/// # Errors
///
/// Returns an error if the value cannot be represented as JSON.
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

/// Serializes into compact JSON text, keeping the field order of the structure.
///
/// # Errors
///
/// Returns an error if the value cannot be represented as JSON.
pub fn to_string<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string(value)?)
}

/// Same as [`to_string`] but indented.
///
/// # Errors
///
/// Returns an error if the value cannot be represented as JSON.
pub fn to_string_pretty<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}

/// Writes compact JSON text to `writer`.
///
/// # Errors
///
/// Returns an error if the value cannot be represented as JSON or the writer fails.
pub fn to_writer<W: io::Write, T: Serialize + ?Sized>(writer: W, value: &T) -> Result<()> {
    Ok(serde_json::to_writer(writer, value)?)
}
