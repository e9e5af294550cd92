use std::fmt;

use serde::{Deserialize, Serialize};

/// Transport-level tag handed to the host next to the envelope JSON.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RpcResultType {
    Success,
    Error,
}

impl RpcResultType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RpcResultType::Success => "Success",
            RpcResultType::Error => "Error",
        }
    }
}

impl fmt::Display for RpcResultType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Uniform envelope returned by every RPC function.
///
/// `errorMessage` is only written for errors and `data` only for successes.
/// A not-found lookup is a success with `"notFound": true` and no `data`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcResult<T> {
    pub is_error: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub not_found: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl<T> RpcResult<T> {
    pub fn success(data: T) -> Self {
        Self {
            is_error: false,
            error_message: None,
            data: Some(data),
            not_found: false,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            is_error: true,
            error_message: Some(message.into()),
            data: None,
            not_found: false,
        }
    }

    pub fn not_found() -> Self {
        Self {
            is_error: false,
            error_message: None,
            data: None,
            not_found: true,
        }
    }

    pub fn result_type(&self) -> RpcResultType {
        if self.is_error {
            RpcResultType::Error
        } else {
            RpcResultType::Success
        }
    }
}
