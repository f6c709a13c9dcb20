//! Solver boundary: requests, responses, diagnostics and errors.

use std::time::Duration;

use thiserror::Error;

use crate::{CostError, Plan};

/// Places to order into a route.
///
/// The order of `places` does not affect the optimum, only how equal-cost
/// optima are broken: solvers index places by their position in this list.
///
/// # Examples
/// ```rust
/// use geo::Coord;
/// use waymark_core::{PointOfInterest, SolveRequest};
///
/// let request = SolveRequest::new(vec![
///     PointOfInterest::with_empty_tags(1, Coord { x: 0.0, y: 0.0 }),
///     PointOfInterest::with_empty_tags(2, Coord { x: 1.0, y: 0.0 }),
/// ]);
/// assert_eq!(request.places.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveRequest<P> {
    /// Places to visit, each exactly once.
    pub places: Vec<P>,
}

impl<P> SolveRequest<P> {
    /// Construct a request for `places`.
    pub const fn new(places: Vec<P>) -> Self {
        Self { places }
    }
}

/// Execution metadata describing how a solve was performed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostics {
    /// Wall-clock time spent in the solver.
    pub solve_time: Duration,
    /// Number of complete orderings whose cost was evaluated.
    pub permutations_evaluated: u64,
    /// Number of calls made to the cost function.
    pub cost_evaluations: u64,
}

/// Response from a successful solve.
///
/// Contains the chosen [`Plan`] and diagnostics.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SolveResponse<P> {
    /// The ordered route with its total cost.
    pub plan: Plan<P>,
    /// Execution metadata.
    pub diagnostics: Diagnostics,
}

/// Errors returned by [`Solver::solve`].
///
/// A failed solve never carries a partial plan.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SolveError {
    /// The cost function failed for a leg.
    #[error("cost lookup from place {from} to place {to} failed: {source}")]
    Cost {
        /// Index of the origin place in the request.
        from: usize,
        /// Index of the destination place in the request.
        to: usize,
        /// Failure reported by the cost function.
        #[source]
        source: CostError,
    },
    /// The cost function returned a negative or non-finite cost.
    #[error("cost from place {from} to place {to} must be finite and non-negative, got {value}")]
    InvalidCost {
        /// Index of the origin place in the request.
        from: usize,
        /// Index of the destination place in the request.
        to: usize,
        /// The offending cost.
        value: f64,
    },
    /// An explicit cost table was not square.
    #[error("cost table row {row} has {actual} entries; expected {expected}")]
    DimensionMismatch {
        /// Index of the offending row.
        row: usize,
        /// Number of rows in the table.
        expected: usize,
        /// Number of entries in the offending row.
        actual: usize,
    },
    /// The request has more places than exhaustive search is allowed to take.
    #[error("{count} places exceed the exhaustive search limit of {limit}")]
    TooManyPlaces {
        /// Number of places requested.
        count: usize,
        /// Configured maximum.
        limit: usize,
    },
    /// Every ordering's total cost overflowed to a non-finite value.
    #[error("no ordering of {count} places has a finite total cost")]
    CostOverflow {
        /// Number of places in the request.
        count: usize,
    },
    /// The search returned an order that does not cover the request.
    #[error("search produced an order of {actual} indices for {expected} places")]
    InvalidOrder {
        /// Number of places in the request.
        expected: usize,
        /// Number of indices in the returned order.
        actual: usize,
    },
    /// The caller cancelled the search.
    #[error("route search was cancelled")]
    Cancelled,
    /// The search ran past its configured time limit.
    #[error("route search exceeded its time limit of {limit:?}")]
    TimeLimitExceeded {
        /// Configured time limit.
        limit: Duration,
    },
}

/// Order places into the cheapest route.
///
/// Implementations should return [`SolveError`] rather than panicking.
/// Solvers must be `Send + Sync` so concurrent requests can share one
/// instance; each call owns all of its search state.
pub trait Solver<P>: Send + Sync {
    /// Solve a request, producing a plan or an error.
    fn solve(&self, request: &SolveRequest<P>) -> Result<SolveResponse<P>, SolveError>;
}
