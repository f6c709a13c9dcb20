//! Exhaustive permutation search over a [`CostMatrix`].
//!
//! Orderings are generated in place by swapping indices: position `fixed` is
//! filled with every index still free, the rest of the buffer is explored
//! recursively, and the swap is undone before the next candidate. One buffer
//! of `n` indices therefore serves the whole `n!` enumeration.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use waymark_core::{CostMatrix, SolveError};

/// Default number of evaluated orderings between interruption checks.
pub const DEFAULT_CHECK_INTERVAL: u64 = 4096;

/// The cheapest ordering found by a completed search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome {
    /// Indices into the matrix in visiting order.
    pub order: Vec<usize>,
    /// Sum of the consecutive legs of `order`.
    pub cost: f64,
    /// Number of complete orderings evaluated.
    pub permutations_evaluated: u64,
}

/// Minimum-cost ordering seen so far in one search.
///
/// The order is a copy taken when the minimum improves; the live permutation
/// buffer keeps changing underneath it.
#[derive(Debug, Clone, PartialEq)]
struct BestOrder {
    cost: f64,
    order: Vec<usize>,
}

impl BestOrder {
    const fn new() -> Self {
        Self {
            cost: f64::INFINITY,
            order: Vec::new(),
        }
    }

    /// Record `candidate` if it is strictly cheaper than the current best.
    ///
    /// Ties keep the earlier ordering.
    fn offer(&mut self, cost: f64, candidate: &[usize]) -> bool {
        if cost < self.cost {
            self.cost = cost;
            self.order.clear();
            self.order.extend_from_slice(candidate);
            true
        } else {
            false
        }
    }
}

/// Mutable state owned by a single call to [`PermutationOptimizer::search`].
struct SearchState {
    buffer: Vec<usize>,
    best: BestOrder,
    evaluated: u64,
}

#[derive(Debug, Clone, Copy)]
struct TimeLimit {
    started_at: Instant,
    limit: Duration,
}

/// Conditions that stop a search early.
#[derive(Debug, Clone)]
struct Interrupt {
    cancel: Option<Arc<AtomicBool>>,
    time_limit: Option<TimeLimit>,
    interval: u64,
}

impl Interrupt {
    fn check(&self) -> Result<(), SolveError> {
        if let Some(flag) = &self.cancel
            && flag.load(Ordering::Relaxed)
        {
            return Err(SolveError::Cancelled);
        }
        if let Some(TimeLimit { started_at, limit }) = self.time_limit
            && started_at.elapsed() >= limit
        {
            return Err(SolveError::TimeLimitExceeded { limit });
        }
        Ok(())
    }

    fn is_due(&self, evaluated: u64) -> bool {
        evaluated.is_multiple_of(self.interval)
    }
}

/// Finds the cheapest one-way ordering of every index of a [`CostMatrix`].
///
/// The cost of an ordering is the sum of its consecutive legs; there is no
/// leg back to the first place. When several orderings share the minimum
/// cost, the first one generated wins, so results are deterministic.
///
/// # Examples
///
/// ```rust
/// use waymark_core::CostMatrix;
/// use waymark_solver_exhaustive::PermutationOptimizer;
///
/// let matrix = CostMatrix::from_rows(vec![
///     vec![0.0, 1.0, 10.0],
///     vec![5.0, 0.0, 1.0],
///     vec![2.0, 5.0, 0.0],
/// ])?;
/// let outcome = PermutationOptimizer::new(&matrix).search()?;
///
/// assert_eq!(outcome.order, vec![0, 1, 2]);
/// assert_eq!(outcome.cost, 2.0);
/// assert_eq!(outcome.permutations_evaluated, 6);
/// # Ok::<(), waymark_core::SolveError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PermutationOptimizer<'a> {
    matrix: &'a CostMatrix,
    interrupt: Interrupt,
}

impl<'a> PermutationOptimizer<'a> {
    /// Search all orderings of `matrix` without interruption.
    #[must_use]
    pub const fn new(matrix: &'a CostMatrix) -> Self {
        Self {
            matrix,
            interrupt: Interrupt {
                cancel: None,
                time_limit: None,
                interval: DEFAULT_CHECK_INTERVAL,
            },
        }
    }

    /// Stop with [`SolveError::Cancelled`] once `flag` is set.
    #[must_use]
    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.interrupt.cancel = Some(flag);
        self
    }

    /// Stop with [`SolveError::TimeLimitExceeded`] once `limit` has elapsed
    /// since `started_at`.
    #[must_use]
    pub const fn with_time_limit(mut self, started_at: Instant, limit: Duration) -> Self {
        self.interrupt.time_limit = Some(TimeLimit { started_at, limit });
        self
    }

    /// Evaluate `interval` orderings between interruption checks.
    ///
    /// Zero is treated as one.
    #[must_use]
    pub fn with_check_interval(mut self, interval: u64) -> Self {
        self.interrupt.interval = interval.max(1);
        self
    }

    /// Enumerate every ordering and return the cheapest.
    ///
    /// An empty matrix yields an empty order with zero cost. Interruption
    /// conditions are checked once before the search starts and then after
    /// every `check_interval` orderings.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Cancelled`] or [`SolveError::TimeLimitExceeded`]
    /// when interrupted, and [`SolveError::CostOverflow`] when every ordering
    /// sums to a non-finite total. No partial result is returned.
    pub fn search(&self) -> Result<SearchOutcome, SolveError> {
        let size = self.matrix.size();
        if size == 0 {
            return Ok(SearchOutcome {
                order: Vec::new(),
                cost: 0.0,
                permutations_evaluated: 0,
            });
        }
        self.interrupt.check()?;

        let mut state = SearchState {
            buffer: (0..size).collect(),
            best: BestOrder::new(),
            evaluated: 0,
        };
        self.explore(&mut state, 0)?;

        let SearchState {
            best, evaluated, ..
        } = state;
        if best.order.len() != size {
            return Err(SolveError::CostOverflow { count: size });
        }
        Ok(SearchOutcome {
            order: best.order,
            cost: best.cost,
            permutations_evaluated: evaluated,
        })
    }

    fn explore(&self, state: &mut SearchState, fixed: usize) -> Result<(), SolveError> {
        let last = state.buffer.len().saturating_sub(1);
        if fixed >= last {
            return self.evaluate(state);
        }
        for candidate in fixed..=last {
            state.buffer.swap(candidate, fixed);
            let explored = self.explore(state, fixed + 1);
            state.buffer.swap(candidate, fixed);
            explored?;
        }
        Ok(())
    }

    fn evaluate(&self, state: &mut SearchState) -> Result<(), SolveError> {
        // Overflowing totals are never offered, so they cannot become the best.
        let cost = self
            .matrix
            .path_cost(&state.buffer)
            .unwrap_or(f64::INFINITY);
        state.best.offer(cost, &state.buffer);
        state.evaluated += 1;
        if self.interrupt.is_due(state.evaluated) {
            self.interrupt.check()?;
        }
        Ok(())
    }
}
