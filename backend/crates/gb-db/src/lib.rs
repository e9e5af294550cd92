pub mod error;
pub mod repositories;

mod json_file;

#[cfg(test)]
mod tests;

pub use error::{DbError, Result};
pub use repositories::candidacy_repository::{CandidacyRepository, JsonCandidacyRepository};
pub use repositories::profile_repository::{JsonProfileRepository, ProfileRepository};

pub const PROFILE_FILE_NAME: &str = "profile.json";
pub const CANDIDACIES_FILE_NAME: &str = "candidacies.json";
