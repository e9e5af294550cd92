use crate::models::null_default::null_as_default;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobExperience {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    // Years
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<i32>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub accomplishments: Vec<String>,
}
