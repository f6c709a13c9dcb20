//! `ExhaustiveSolver` implementation backed by [`PermutationOptimizer`].

use std::sync::Arc;
use std::sync::atomic::AtomicBool;
use std::time::{Duration, Instant};

use waymark_core::{
    CostFunction, CostMatrix, Diagnostics, Plan, SolveError, SolveRequest, SolveResponse, Solver,
};

use crate::permute::{DEFAULT_CHECK_INTERVAL, PermutationOptimizer, SearchOutcome};

/// Largest request accepted by default.
///
/// Eleven places already mean roughly forty million orderings.
pub const DEFAULT_MAX_PLACES: usize = 11;

/// Configuration for [`ExhaustiveSolver`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExhaustiveSolverConfig {
    /// Reject requests with more places than this; `None` accepts any size.
    pub max_places: Option<usize>,
    /// Abandon the search once this much time has passed since the solve
    /// started; `None` never times out.
    pub time_limit: Option<Duration>,
    /// Orderings evaluated between cancellation and time limit checks.
    pub check_interval: u64,
}

impl Default for ExhaustiveSolverConfig {
    fn default() -> Self {
        Self {
            max_places: Some(DEFAULT_MAX_PLACES),
            time_limit: None,
            check_interval: DEFAULT_CHECK_INTERVAL,
        }
    }
}

impl ExhaustiveSolverConfig {
    /// Set the maximum number of places accepted per request.
    #[must_use]
    pub const fn with_max_places(mut self, max_places: Option<usize>) -> Self {
        self.max_places = max_places;
        self
    }

    /// Set the search time limit.
    #[must_use]
    pub const fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = Some(time_limit);
        self
    }

    /// Set how many orderings are evaluated between interruption checks.
    #[must_use]
    pub const fn with_check_interval(mut self, check_interval: u64) -> Self {
        self.check_interval = check_interval;
        self
    }
}

/// Exact route planner enumerating every ordering of the requested places.
///
/// The solver is generic over the cost boundary: any [`CostFunction`] for the
/// request's place type. Each solve builds its own [`CostMatrix`] and search
/// state, so one solver can serve concurrent requests.
///
/// # Examples
///
/// ```rust
/// use waymark_core::{CostError, SolveRequest, Solver};
/// use waymark_solver_exhaustive::ExhaustiveSolver;
///
/// let solver = ExhaustiveSolver::new(|from: &i32, to: &i32| -> Result<f64, CostError> {
///     Ok(f64::from(from.abs_diff(*to)))
/// });
/// let response = solver.solve(&SolveRequest::new(vec![30, 10, 20]))?;
///
/// assert_eq!(response.plan.places(), &[30, 20, 10]);
/// assert_eq!(response.plan.cost(), 20.0);
/// # Ok::<(), waymark_core::SolveError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ExhaustiveSolver<C> {
    cost_fn: C,
    config: ExhaustiveSolverConfig,
}

impl<C> ExhaustiveSolver<C> {
    /// Construct a solver using default configuration.
    #[must_use]
    pub fn new(cost_fn: C) -> Self {
        Self::with_config(cost_fn, ExhaustiveSolverConfig::default())
    }

    /// Construct a solver with explicit configuration.
    #[must_use]
    pub const fn with_config(cost_fn: C, config: ExhaustiveSolverConfig) -> Self {
        Self { cost_fn, config }
    }

    /// The active configuration.
    #[must_use]
    pub const fn config(&self) -> &ExhaustiveSolverConfig {
        &self.config
    }

    /// The cost function used to price legs.
    #[must_use]
    pub const fn cost_function(&self) -> &C {
        &self.cost_fn
    }

    /// Solve `request`, stopping with [`SolveError::Cancelled`] once `cancel`
    /// is set.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::TooManyPlaces`] before pricing anything when the
    /// request is larger than the configured limit, cost function failures
    /// and invalid costs from building the [`CostMatrix`], interruption
    /// errors from the search, and [`SolveError::CostOverflow`] when no
    /// ordering has a finite total.
    pub fn solve_with_cancel<P>(
        &self,
        request: &SolveRequest<P>,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<SolveResponse<P>, SolveError>
    where
        P: Clone,
        C: CostFunction<P>,
    {
        let started_at = Instant::now();
        let count = request.places.len();
        if let Some(limit) = self.config.max_places
            && count > limit
        {
            log::warn!("rejecting route request with {count} places; the limit is {limit}");
            return Err(SolveError::TooManyPlaces { count, limit });
        }
        if count == 0 {
            return Ok(SolveResponse {
                plan: Plan::empty(),
                diagnostics: Diagnostics {
                    solve_time: started_at.elapsed(),
                    ..Diagnostics::default()
                },
            });
        }

        let matrix = CostMatrix::build(&request.places, &self.cost_fn)?;
        let outcome = self
            .optimizer(&matrix, started_at, cancel)
            .search()
            .inspect_err(|err| log::warn!("route search over {count} places stopped: {err}"))?;

        let plan = plan_from_outcome(&request.places, &outcome)?;
        let diagnostics = Diagnostics {
            solve_time: started_at.elapsed(),
            permutations_evaluated: outcome.permutations_evaluated,
            cost_evaluations: ordered_pairs(count),
        };
        log::debug!(
            "planned {count} places in {:?}: cost {} after {} orderings",
            diagnostics.solve_time,
            plan.cost(),
            diagnostics.permutations_evaluated
        );

        Ok(SolveResponse { plan, diagnostics })
    }

    fn optimizer<'a>(
        &self,
        matrix: &'a CostMatrix,
        started_at: Instant,
        cancel: Option<Arc<AtomicBool>>,
    ) -> PermutationOptimizer<'a> {
        let mut optimizer =
            PermutationOptimizer::new(matrix).with_check_interval(self.config.check_interval);
        if let Some(flag) = cancel {
            optimizer = optimizer.with_cancel_flag(flag);
        }
        if let Some(limit) = self.config.time_limit {
            optimizer = optimizer.with_time_limit(started_at, limit);
        }
        optimizer
    }
}

impl<P, C> Solver<P> for ExhaustiveSolver<C>
where
    P: Clone,
    C: CostFunction<P> + Send + Sync,
{
    fn solve(&self, request: &SolveRequest<P>) -> Result<SolveResponse<P>, SolveError> {
        self.solve_with_cancel(request, None)
    }
}

/// Map the searched index order back onto the requested places.
///
/// The order must visit every place exactly once.
fn plan_from_outcome<P: Clone>(
    places: &[P],
    outcome: &SearchOutcome,
) -> Result<Plan<P>, SolveError> {
    let invalid = SolveError::InvalidOrder {
        expected: places.len(),
        actual: outcome.order.len(),
    };
    let mut seen = vec![false; places.len()];
    let covers_every_place = outcome.order.len() == places.len()
        && outcome
            .order
            .iter()
            .all(|&index| {
                seen.get_mut(index)
                    .is_some_and(|slot| !std::mem::replace(slot, true))
            });
    if !covers_every_place {
        return Err(invalid);
    }
    Plan::from_order(places, &outcome.order, outcome.cost).ok_or(invalid)
}

/// Number of cost function calls needed to price `count` places.
fn ordered_pairs(count: usize) -> u64 {
    let pairs = count.saturating_mul(count.saturating_sub(1));
    u64::try_from(pairs).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests;
