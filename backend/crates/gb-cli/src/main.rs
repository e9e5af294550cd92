//! gb - GrindBreaker command-line host
//!
//! # Examples
//!
//! ```bash
//! # List the bound functions
//! gb functions
//!
//! # Read every candidacy
//! gb call GetAllCandidacies --pretty
//!
//! # Move a candidacy on the board
//! gb call UpdateCandidacyStatus '["<id>","Applied"]'
//! ```

use gb_cli::{Cli, Outcome, run};

use std::process::ExitCode;

use clap::Parser;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(Outcome::Success) => ExitCode::SUCCESS,
        Ok(Outcome::Error) => ExitCode::from(1),
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(2)
        }
    }
}
