pub mod candidacy_repository;
pub mod profile_repository;
