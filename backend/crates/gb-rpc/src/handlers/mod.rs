pub mod args;
pub mod candidacy_rpc;
pub mod error_boundary;
pub mod messages;
pub mod profile_rpc;
pub mod response_builder;
