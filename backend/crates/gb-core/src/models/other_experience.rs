use crate::ExperienceType;
use crate::models::null_default::null_as_default;

use serde::{Deserialize, Serialize};

/// Projects, volunteer work and anything else that is not a job.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherExperience {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub experience_type: Option<ExperienceType>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_or_company_name: Option<String>,

    // Years
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<i32>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub accomplishments: Vec<String>,
}
