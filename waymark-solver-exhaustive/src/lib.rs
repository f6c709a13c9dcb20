//! Exact route planning for Waymark by exhaustive search.
//!
//! This crate provides [`ExhaustiveSolver`], an implementation of the
//! [`Solver`](waymark_core::Solver) trait that tries every ordering of the
//! requested places and returns the cheapest one-way route. It prices each
//! ordered pair of places once through a [`CostFunction`](waymark_core::CostFunction),
//! caching the results in a [`CostMatrix`](waymark_core::CostMatrix), then
//! hands the matrix to [`PermutationOptimizer`].
//!
//! The search is factorial in the number of places, so requests are capped
//! at [`DEFAULT_MAX_PLACES`] unless configured otherwise. A solve can be
//! cancelled from another thread or bounded by a time limit; either way no
//! partial route is returned.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod permute;
mod solver;

#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;

pub use permute::{DEFAULT_CHECK_INTERVAL, PermutationOptimizer, SearchOutcome};
pub use solver::{DEFAULT_MAX_PLACES, ExhaustiveSolver, ExhaustiveSolverConfig};
