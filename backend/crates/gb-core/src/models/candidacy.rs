use crate::models::null_default::null_as_default;
use crate::{CandidacyStatus, CandidacyStep, CoreError, CoreResult};

use chrono::Utc;
use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// A tracked job application.
///
/// `id` is generated when the incoming record has none. `company` and `title` are
/// required by the RPC boundary, not by storage, so they default to empty here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidacy {
    #[serde(default = "new_candidacy_id", deserialize_with = "id_or_generated")]
    pub id: String,

    #[serde(default, deserialize_with = "null_as_default")]
    pub company: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub title: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub job_description: Option<String>,

    /// Unix timestamp, seconds.
    #[serde(default, deserialize_with = "null_as_default")]
    pub date_applied: i64,

    #[serde(default, deserialize_with = "null_as_default")]
    pub status: CandidacyStatus,

    /// Insertion order is the display order.
    #[serde(default, deserialize_with = "null_as_default")]
    pub application_steps: Vec<CandidacyStep>,
}

impl Candidacy {
    pub fn new(company: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            company: company.into(),
            title: title.into(),
            date_applied: Utc::now().timestamp(),
            ..Self::default()
        }
    }

    /// Company and title must hold something other than whitespace.
    pub fn validate(&self) -> CoreResult<()> {
        if self.company.trim().is_empty() {
            return Err(CoreError::validation("company is required", Some("company")));
        }
        if self.title.trim().is_empty() {
            return Err(CoreError::validation("title is required", Some("title")));
        }
        Ok(())
    }
}

impl Default for Candidacy {
    fn default() -> Self {
        Self {
            id: new_candidacy_id(),
            company: String::new(),
            title: String::new(),
            job_link: None,
            job_description: None,
            date_applied: 0,
            status: CandidacyStatus::ToApply,
            application_steps: Vec::new(),
        }
    }
}

fn new_candidacy_id() -> String {
    Uuid::new_v4().to_string()
}

fn id_or_generated<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_else(new_candidacy_id))
}
