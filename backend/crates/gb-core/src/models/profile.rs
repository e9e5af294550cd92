use crate::models::null_default::null_as_default;
use crate::{Certification, Education, JobExperience, OtherExperience};

use serde::{Deserialize, Serialize};

/// The single user's résumé data. There is one per installation and it is always
/// replaced as a whole.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,

    #[serde(default, deserialize_with = "null_as_default")]
    pub skills: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub certifications: Vec<Certification>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub job_experiences: Vec<JobExperience>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub other_experiences: Vec<OtherExperience>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub education: Vec<Education>,
}
