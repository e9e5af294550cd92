use crate::{CoreError, CoreResult};

use std::fmt;
use std::str::FromStr;

use serde::de::Error as DeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Pipeline column a candidacy sits in.
///
/// Inside a `Candidacy` object the status travels as its 0-based ordinal, which is
/// what the board sends. The symbolic name (`as_str`) is used by the status-only
/// update call and is also accepted when reading a record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CandidacyStatus {
    #[default]
    ToApply,
    Applied,
    PreInterview,
    PostInterview,
    Offered,
    Rejected,
    Ghosted,
    Withdrawn,
}

impl CandidacyStatus {
    /// Board order.
    pub const ALL: [CandidacyStatus; 8] = [
        Self::ToApply,
        Self::Applied,
        Self::PreInterview,
        Self::PostInterview,
        Self::Offered,
        Self::Rejected,
        Self::Ghosted,
        Self::Withdrawn,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ToApply => "ToApply",
            Self::Applied => "Applied",
            Self::PreInterview => "PreInterview",
            Self::PostInterview => "PostInterview",
            Self::Offered => "Offered",
            Self::Rejected => "Rejected",
            Self::Ghosted => "Ghosted",
            Self::Withdrawn => "Withdrawn",
        }
    }
}

impl CandidacyStatus {
    /// Exact name first, then a decimal ordinal in board range (`"1"` is `Applied`).
    #[track_caller]
    pub fn from_name_or_ordinal(s: &str) -> CoreResult<Self> {
        if let Ok(status) = Self::from_str(s) {
            return Ok(status);
        }
        s.trim()
            .parse::<i32>()
            .ok()
            .and_then(|ordinal| Self::try_from(ordinal).ok())
            .ok_or_else(|| CoreError::invalid_candidacy_status(s))
    }
}

impl fmt::Display for CandidacyStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CandidacyStatus {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        Self::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| CoreError::invalid_candidacy_status(s))
    }
}

impl From<CandidacyStatus> for i32 {
    fn from(status: CandidacyStatus) -> Self {
        match status {
            CandidacyStatus::ToApply => 0,
            CandidacyStatus::Applied => 1,
            CandidacyStatus::PreInterview => 2,
            CandidacyStatus::PostInterview => 3,
            CandidacyStatus::Offered => 4,
            CandidacyStatus::Rejected => 5,
            CandidacyStatus::Ghosted => 6,
            CandidacyStatus::Withdrawn => 7,
        }
    }
}

impl TryFrom<i32> for CandidacyStatus {
    type Error = CoreError;

    #[track_caller]
    fn try_from(value: i32) -> CoreResult<Self> {
        usize::try_from(value)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
            .ok_or_else(|| CoreError::invalid_candidacy_status(value.to_string()))
    }
}

impl Serialize for CandidacyStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(i32::from(*self))
    }
}

impl<'de> Deserialize<'de> for CandidacyStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Wire {
            Ordinal(i64),
            Name(String),
        }

        match Wire::deserialize(deserializer)? {
            Wire::Ordinal(ordinal) => i32::try_from(ordinal)
                .ok()
                .and_then(|ordinal| Self::try_from(ordinal).ok())
                .ok_or_else(|| D::Error::custom(format!("unknown candidacy status {ordinal}"))),
            Wire::Name(name) => Self::from_str(&name)
                .map_err(|_| D::Error::custom(format!("unknown candidacy status {name:?}"))),
        }
    }
}
