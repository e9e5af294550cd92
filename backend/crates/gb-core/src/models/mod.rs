pub mod candidacy;
pub mod candidacy_status;
pub mod candidacy_step;
pub mod certification;
pub mod education;
pub mod experience_type;
pub mod job_experience;
pub mod other_experience;
pub mod profile;

pub(crate) mod null_default;
