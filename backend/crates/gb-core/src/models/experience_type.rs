use crate::{CoreError, CoreResult};

use std::str::FromStr;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Kind of a non-employment experience entry. Serialized by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExperienceType {
    Project,
    VolunteerWork,
    Other,
}

impl ExperienceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Project => "Project",
            Self::VolunteerWork => "VolunteerWork",
            Self::Other => "Other",
        }
    }
}

impl FromStr for ExperienceType {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "Project" => Ok(Self::Project),
            "VolunteerWork" => Ok(Self::VolunteerWork),
            "Other" => Ok(Self::Other),
            _ => Err(CoreError::invalid_experience_type(s)),
        }
    }
}

impl TryFrom<i64> for ExperienceType {
    type Error = CoreError;

    #[track_caller]
    fn try_from(value: i64) -> CoreResult<Self> {
        match value {
            0 => Ok(Self::Project),
            1 => Ok(Self::VolunteerWork),
            2 => Ok(Self::Other),
            _ => Err(CoreError::invalid_experience_type(value.to_string())),
        }
    }
}

impl Serialize for ExperienceType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ExperienceType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Name(String),
            Ordinal(i64),
        }

        match Wire::deserialize(deserializer)? {
            Wire::Name(name) => Self::from_str(&name).map_err(D::Error::custom),
            Wire::Ordinal(ordinal) => Self::try_from(ordinal).map_err(D::Error::custom),
        }
    }
}
