use crate::commands::Commands;
use crate::{Cli, CliError, CliHost, FunctionTable, Result, logger};

use gb_config::Config;
use gb_db::{JsonCandidacyRepository, JsonProfileRepository};
use gb_rpc::{FUNCTION_NAMES, RpcResultType, RpcRouter, WebviewHost};

use std::path::{Path, PathBuf};
use std::sync::Arc;

use log::{debug, info};
use serde_json::Value;

/// How a completed call should end the process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Error,
}

impl From<RpcResultType> for Outcome {
    fn from(kind: RpcResultType) -> Self {
        match kind {
            RpcResultType::Success => Outcome::Success,
            RpcResultType::Error => Outcome::Error,
        }
    }
}

pub fn run(cli: Cli) -> Result<Outcome> {
    match cli.command {
        Commands::Functions => {
            for name in FUNCTION_NAMES {
                println!("{name}");
            }
            Ok(Outcome::Success)
        }
        Commands::Call {
            function,
            args,
            request_id,
        } => {
            let data_dir = startup(cli.data_dir)?;
            let (kind, json) = call(&data_dir, &function, &request_id, &args)?;
            println!("{}", render(&json, cli.pretty)?);
            eprintln!("{kind}");
            Ok(Outcome::from(kind))
        }
    }
}

/// Load config, start logging and settle on the data directory.
fn startup(data_dir_override: Option<PathBuf>) -> Result<PathBuf> {
    let config = Config::load()?;
    config.validate()?;

    let log_file = config.log_file_path()?;
    if let Some(dir) = log_file.as_ref().and_then(|path| path.parent()) {
        std::fs::create_dir_all(dir).map_err(|e| CliError::Logger {
            message: format!("Failed to create log directory {}: {}", dir.display(), e),
        })?;
    }
    logger::initialize(config.logging.level, log_file, config.logging.colored)?;

    info!("Starting gb v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    match data_dir_override {
        Some(dir) => Ok(dir),
        None => Ok(config.data_dir()?),
    }
}

/// Wire repositories, router and host the way the desktop shell does, then
/// invoke one bound function and collect its reply.
pub fn call(
    data_dir: &Path,
    function: &str,
    request_id: &str,
    raw_args: &str,
) -> Result<(RpcResultType, String)> {
    let profiles = Arc::new(JsonProfileRepository::new(data_dir)?);
    let candidacies = Arc::new(JsonCandidacyRepository::new(data_dir)?);
    info!(
        "Using {} and {}",
        profiles.path().display(),
        candidacies.path().display()
    );

    let router = Arc::new(RpcRouter::new(profiles, candidacies));
    let host = Arc::new(CliHost::new());
    let mut table = FunctionTable::new();
    router.bind_all(&mut table, Arc::clone(&host) as Arc<dyn WebviewHost>);
    debug!("Bound: {}", table.names().collect::<Vec<_>>().join(", "));

    table.invoke(function, request_id, raw_args)?;

    let reply = host
        .take_reply(request_id)
        .ok_or_else(|| CliError::NoReply {
            function: function.to_string(),
            request_id: request_id.to_string(),
        })?;

    Ok((reply.kind, reply.json))
}

fn render(json: &str, pretty: bool) -> Result<String> {
    if !pretty {
        return Ok(json.to_string());
    }
    let value: Value = serde_json::from_str(json)?;
    Ok(serde_json::to_string_pretty(&value)?)
}
