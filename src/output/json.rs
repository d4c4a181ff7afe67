//! JSON output.

use serde::Serialize;
use std::error::Error;

/// Serialize a result as pretty printed JSON.
pub fn to_json<T: Serialize>(value: &T) -> Result<String, Box<dyn Error>> {
    serde_json::to_string_pretty(value).map_err(|e| format!("Error serializing JSON: {e}").into())
}
