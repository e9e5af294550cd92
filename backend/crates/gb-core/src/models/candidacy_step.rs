use crate::models::null_default::null_as_default;

use serde::{Deserialize, Serialize};

/// A dated event in a candidacy, e.g. a phone screen or an onsite.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidacyStep {
    #[serde(rename = "type", default, deserialize_with = "null_as_default")]
    pub step_type: String,

    /// Unix timestamp, seconds.
    #[serde(default, deserialize_with = "null_as_default")]
    pub date: i64,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl CandidacyStep {
    pub fn new(step_type: impl Into<String>, date: i64, notes: Option<String>) -> Self {
        Self {
            step_type: step_type.into(),
            date,
            notes,
        }
    }
}
