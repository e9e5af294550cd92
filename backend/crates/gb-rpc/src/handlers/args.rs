//! Decoding of the raw argument array the UI passes to every bound function.

use crate::{Result, RpcError};

use serde::de::DeserializeOwned;
use serde_json::Value;

/// Parse the raw argument array.
///
/// Blank input and a literal `null` both mean "no arguments". Anything that is
/// not a JSON array of `T` is a [`RpcError::MalformedArgs`].
pub fn parse_args<T: DeserializeOwned>(raw: &str) -> Result<Vec<T>> {
    if raw.trim().is_empty() {
        return Ok(Vec::new());
    }

    let parsed: Option<Vec<T>> = serde_json::from_str(raw)?;
    Ok(parsed.unwrap_or_default())
}

/// Read an identifier argument. Strings are taken verbatim, numbers and bools
/// by their JSON text, `null` or a missing slot as absent.
pub fn id_arg(args: &[Value], position: usize) -> Result<Option<String>> {
    match args.get(position) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.clone())),
        Some(value @ (Value::Number(_) | Value::Bool(_))) => Ok(Some(value.to_string())),
        Some(Value::Array(_)) => Err(RpcError::unexpected_argument(position, "array")),
        Some(Value::Object(_)) => Err(RpcError::unexpected_argument(position, "object")),
    }
}

/// Loose string view of any argument: `null` is absent, strings are verbatim,
/// everything else is rendered as JSON text.
pub fn coerce_to_string(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
