//! Facade crate for the Waymark route planner.
//!
//! This crate re-exports the core domain types and exposes the exhaustive
//! solver behind a feature flag.

#![forbid(unsafe_code)]

pub use waymark_core::{
    CostError, CostFunction, CostMatrix, Diagnostics, Plan, PointOfInterest, SolveError,
    SolveRequest, SolveResponse, Solver, TableCostFunction, Tags,
};

#[cfg(feature = "solver-exhaustive")]
pub use waymark_solver_exhaustive::{
    DEFAULT_MAX_PLACES, ExhaustiveSolver, ExhaustiveSolverConfig, PermutationOptimizer,
    SearchOutcome,
};
