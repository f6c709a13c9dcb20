//! Core domain types for the Waymark route planner.
//!
//! The crate defines the places a route visits, the cost function boundary
//! used to price each leg, the dense [`CostMatrix`] built once per planning
//! call, and the [`Solver`] trait implemented by route search engines.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod cost;
pub mod matrix;
pub mod plan;
pub mod poi;
pub mod solver;

#[cfg(any(test, feature = "test-support"))]
pub mod test_support;

pub use cost::{CostError, CostFunction, TableCostFunction};
pub use matrix::CostMatrix;
pub use plan::Plan;
pub use poi::{PointOfInterest, Tags};
pub use solver::{Diagnostics, SolveError, SolveRequest, SolveResponse, Solver};
