//! gb-cli library
//!
//! Headless host for the GrindBreaker RPC surface: binds every function the
//! way the desktop webview would and invokes one per process.

pub mod app;
pub mod cli;
pub mod commands;
pub mod error;
pub mod function_table;
pub mod host;
pub mod logger;


pub use app::{Outcome, run};
pub use cli::Cli;
pub use error::{CliError, Result};
pub use function_table::FunctionTable;
pub use host::CliHost;
