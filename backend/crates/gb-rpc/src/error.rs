use std::panic::Location;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RpcError {
    #[error("Unknown RPC function: {name} {location}")]
    UnknownFunction {
        name: String,
        location: ErrorLocation,
    },

    #[error("Malformed argument array: {source} {location}")]
    MalformedArgs {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Argument {position} has unexpected JSON type {found} {location}")]
    UnexpectedArgument {
        position: usize,
        found: &'static str,
        location: ErrorLocation,
    },
}

impl RpcError {
    #[track_caller]
    pub fn unknown_function(name: impl Into<String>) -> Self {
        Self::UnknownFunction {
            name: name.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn unexpected_argument(position: usize, found: &'static str) -> Self {
        Self::UnexpectedArgument {
            position,
            found,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for RpcError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::MalformedArgs {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = std::result::Result<T, RpcError>;
