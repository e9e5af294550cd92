use crate::commands::Commands;

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "gb")]
#[command(about = "GrindBreaker job-search tracker host")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding profile.json and candidacies.json (overrides config)
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Pretty-print the envelope JSON
    #[arg(long, global = true)]
    pub pretty: bool,
}
