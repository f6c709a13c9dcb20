//! Plan command implementation for the Waymark CLI.

use std::io::{BufReader, Write};
use std::time::Duration;

use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ortho_config::{OrthoConfig, SubcmdConfigMerge};
use serde::{Deserialize, Serialize};
use waymark_core::{
    CostMatrix, PointOfInterest, SolveRequest, SolveResponse, Solver, TableCostFunction,
};
use waymark_fs::open_utf8_file;
use waymark_solver_exhaustive::{ExhaustiveSolver, ExhaustiveSolverConfig};

use crate::{ARG_MAX_PLACES, ARG_PLAN_REQUEST, ARG_TIME_LIMIT_SECS, CliError, ENV_PLAN_REQUEST};

/// CLI arguments for the `plan` subcommand.
#[derive(Debug, Clone, Parser, Deserialize, Serialize, OrthoConfig, Default)]
#[command(
    long_about = "Plan the cheapest one-way route through every place in a \
                 request. The request is a JSON document holding the places \
                 and a square table of travel costs whose rows and columns \
                 follow the order of the places.",
    about = "Plan a route through the places in a request"
)]
#[ortho_config(prefix = "WAYMARK")]
pub(crate) struct PlanArgs {
    /// Path to a JSON file containing the places and their cost table.
    #[arg(value_name = "path")]
    #[serde(default)]
    pub(crate) request_path: Option<Utf8PathBuf>,
    /// Reject requests with more places than this.
    #[arg(long = ARG_MAX_PLACES, value_name = "count")]
    #[serde(default)]
    pub(crate) max_places: Option<usize>,
    /// Abandon the search after this many seconds.
    #[arg(long = ARG_TIME_LIMIT_SECS, value_name = "seconds")]
    #[serde(default)]
    pub(crate) time_limit_secs: Option<u64>,
}

impl PlanArgs {
    pub(crate) fn into_config(self) -> Result<PlanConfig, CliError> {
        let merged = self.load_and_merge().map_err(CliError::Configuration)?;
        PlanConfig::try_from(merged)
    }
}

/// Resolved `plan` command configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct PlanConfig {
    /// Path to the JSON request file.
    pub(crate) request_path: Utf8PathBuf,
    /// Solver limits.
    pub(crate) solver: ExhaustiveSolverConfig,
}

impl PlanConfig {
    pub(crate) fn validate_sources(&self) -> Result<(), CliError> {
        Self::require_existing(&self.request_path, ARG_PLAN_REQUEST)
    }

    fn require_existing(path: &Utf8Path, field: &'static str) -> Result<(), CliError> {
        match waymark_fs::file_is_file(path) {
            Ok(true) => Ok(()),
            Ok(false) => Err(CliError::SourcePathNotFile {
                field,
                path: path.to_path_buf(),
            }),
            Err(source) if source.kind() == std::io::ErrorKind::NotFound => {
                Err(CliError::MissingSourceFile {
                    field,
                    path: path.to_path_buf(),
                })
            }
            Err(source) => Err(CliError::InspectSourcePath {
                field,
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}

impl TryFrom<PlanArgs> for PlanConfig {
    type Error = CliError;

    fn try_from(args: PlanArgs) -> Result<Self, Self::Error> {
        let request_path = args.request_path.ok_or(CliError::MissingArgument {
            field: ARG_PLAN_REQUEST,
            env: ENV_PLAN_REQUEST,
        })?;

        let mut solver = ExhaustiveSolverConfig::default();
        if let Some(max_places) = args.max_places {
            solver = solver.with_max_places(Some(max_places));
        }
        if let Some(seconds) = args.time_limit_secs {
            solver = solver.with_time_limit(Duration::from_secs(seconds));
        }

        Ok(Self {
            request_path,
            solver,
        })
    }
}

/// On-disk form of a planning request.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub(crate) struct PlanRequestFile {
    /// Places to visit, in table order.
    pub(crate) places: Vec<PointOfInterest>,
    /// Directed leg costs; `costs[i][j]` prices the leg from place `i` to
    /// place `j`.
    pub(crate) costs: Vec<Vec<f64>>,
}

pub(super) fn run_plan(args: PlanArgs) -> Result<(), CliError> {
    let mut stdout = std::io::stdout().lock();
    run_plan_with(args, &mut stdout)
}

pub(super) fn run_plan_with(args: PlanArgs, writer: &mut dyn Write) -> Result<(), CliError> {
    let response = execute_plan(args)?;
    write_plan_response(writer, &response)
}

fn execute_plan(args: PlanArgs) -> Result<SolveResponse<PointOfInterest>, CliError> {
    let config = resolve_plan_config(args)?;
    let request = load_plan_request(&config.request_path)?;
    let costs = build_cost_function(&config.request_path, &request)?;
    log::info!(
        "planning a route through {} places from {}",
        request.places.len(),
        config.request_path
    );
    let solver = ExhaustiveSolver::with_config(costs, config.solver);
    solver
        .solve(&SolveRequest::new(request.places))
        .map_err(|source| CliError::Solve { source })
}

fn resolve_plan_config(args: PlanArgs) -> Result<PlanConfig, CliError> {
    let config = args.into_config()?;
    config.validate_sources()?;
    Ok(config)
}

/// Loads a JSON-encoded [`PlanRequestFile`] from disk.
pub(super) fn load_plan_request(path: &Utf8Path) -> Result<PlanRequestFile, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenPlanRequest {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    serde_json::from_reader(reader).map_err(|source| CliError::ParsePlanRequest {
        path: path.to_path_buf(),
        source,
    })
}

/// Validates the request's cost table and indexes it by place identifier.
pub(super) fn build_cost_function(
    path: &Utf8Path,
    request: &PlanRequestFile,
) -> Result<TableCostFunction, CliError> {
    let matrix = CostMatrix::from_rows(request.costs.clone()).map_err(|source| {
        CliError::InvalidCostTable {
            path: path.to_path_buf(),
            source,
        }
    })?;
    TableCostFunction::from_pois(&request.places, matrix).map_err(|source| {
        CliError::PlacesMismatch {
            path: path.to_path_buf(),
            source,
        }
    })
}

fn write_plan_response(
    writer: &mut dyn Write,
    response: &SolveResponse<PointOfInterest>,
) -> Result<(), CliError> {
    let payload =
        serde_json::to_string_pretty(response).map_err(CliError::SerializePlanResponse)?;
    writer
        .write_all(payload.as_bytes())
        .map_err(CliError::WritePlanOutput)?;
    writer
        .write_all(b"\n")
        .map_err(CliError::WritePlanOutput)?;
    Ok(())
}

#[cfg(test)]
pub(crate) fn config_from_layers_for_test(
    layers: Vec<ortho_config::MergeLayer<'static>>,
) -> Result<PlanConfig, CliError> {
    let merged = PlanArgs::merge_from_layers(layers).map_err(CliError::from)?;
    PlanConfig::try_from(merged)
}
