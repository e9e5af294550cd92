use crate::{RpcResult, RpcResultType};

use log::error;
use serde::Serialize;

const UNEXPECTED_ERROR: &str = "An unexpected error occurred";

/// Last resort if even an error envelope can't be rendered.
const FALLBACK_ERROR_JSON: &str = r#"{"isError":true,"errorMessage":"An unexpected error occurred"}"#;

/// A rendered envelope plus the transport tag that must accompany it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub kind: RpcResultType,
    pub json: String,
}

impl Reply {
    /// Render an envelope. If serialization fails the reply becomes an error
    /// envelope carrying `serialization_error` instead.
    pub fn from_result<T: Serialize>(result: &RpcResult<T>, serialization_error: &str) -> Self {
        match serde_json::to_string(result) {
            Ok(json) => Self {
                kind: result.result_type(),
                json,
            },
            Err(e) => {
                error!("Failed to serialize envelope: {e}");
                Self::error(serialization_error)
            }
        }
    }

    /// Success envelope whose data is a status message.
    pub fn message(message: &str) -> Self {
        Self::from_result(&RpcResult::success(message), UNEXPECTED_ERROR)
    }

    pub fn error(message: &str) -> Self {
        let json = serde_json::to_string(&RpcResult::<()>::error(message)).unwrap_or_else(|e| {
            error!("Failed to serialize error envelope: {e}");
            String::from(FALLBACK_ERROR_JSON)
        });

        Self {
            kind: RpcResultType::Error,
            json,
        }
    }
}
