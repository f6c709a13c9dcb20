//! Command-line interface for planning Waymark routes.
#![forbid(unsafe_code)]

use clap::{Parser, Subcommand};

mod error;
mod plan;

pub use error::CliError;
use plan::{PlanArgs, run_plan};

pub(crate) const ARG_PLAN_REQUEST: &str = "request-path";
pub(crate) const ARG_MAX_PLACES: &str = "max-places";
pub(crate) const ARG_TIME_LIMIT_SECS: &str = "time-limit-secs";
pub(crate) const ENV_PLAN_REQUEST: &str = "WAYMARK_CMDS_PLAN_REQUEST_PATH";

/// Run the Waymark CLI with the current process arguments and environment.
///
/// # Errors
///
/// Returns [`CliError`] when arguments or configuration are invalid, when the
/// request cannot be read, or when planning fails.
pub fn run() -> Result<(), CliError> {
    let cli = Cli::try_parse()?;
    match cli.command {
        Command::Plan(args) => run_plan(args),
    }
}

#[derive(Debug, Parser)]
#[command(
    name = "waymark",
    about = "Plan the cheapest route through a handful of places",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Order the places in a request into the cheapest one-way route.
    Plan(PlanArgs),
}

#[cfg(test)]
mod tests;
