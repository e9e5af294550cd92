pub mod error;
pub mod models;


pub use error::{CoreError, CoreResult};
pub use models::candidacy::Candidacy;
pub use models::candidacy_status::CandidacyStatus;
pub use models::candidacy_step::CandidacyStep;
pub use models::certification::Certification;
pub use models::education::Education;
pub use models::experience_type::ExperienceType;
pub use models::job_experience::JobExperience;
pub use models::other_experience::OtherExperience;
pub use models::profile::Profile;
