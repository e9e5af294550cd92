use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Config error: {0}")]
    Config(#[from] gb_config::ConfigError),

    #[error("Storage error: {0}")]
    Db(#[from] gb_db::DbError),

    #[error("Logger error: {message}")]
    Logger { message: String },

    #[error("No bound function named {name}")]
    UnknownFunction { name: String },

    #[error("Function {function} returned nothing for request {request_id}")]
    NoReply {
        function: String,
        request_id: String,
    },

    #[error("Failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
