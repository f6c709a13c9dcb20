//! Test-only utilities for `waymark-solver-exhaustive`.
//!
//! The helpers in this module are available to unit tests and behavioural
//! tests. They are gated behind the `test-support` feature (and `cfg(test)`).

use waymark_core::test_support::poi;
use waymark_core::{CostError, CostFunction, PointOfInterest};

/// Construct untagged places with identifiers `0..count`.
#[must_use]
pub fn places(count: u64) -> Vec<PointOfInterest> {
    (0..count).map(poi).collect()
}

/// A [`CostFunction`] returning costs from a fixed table.
///
/// Place identifiers index the table directly, so the place with `id == 2`
/// reads row and column two. Identifiers outside the table produce
/// [`CostError::UnknownPlace`].
///
/// # Examples
///
/// ```rust
/// use waymark_core::{CostFunction, CostError};
/// use waymark_core::test_support::poi;
/// use waymark_solver_exhaustive::test_support::FixedMatrixCostFunction;
///
/// let costs = FixedMatrixCostFunction::from_seconds(vec![vec![0, 30], vec![45, 0]]);
/// assert_eq!(costs.cost(&poi(1), &poi(0)), Ok(45.0));
/// assert_eq!(costs.cost(&poi(0), &poi(2)), Err(CostError::UnknownPlace { id: 2 }));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct FixedMatrixCostFunction {
    rows: Vec<Vec<f64>>,
}

impl FixedMatrixCostFunction {
    /// Construct a cost function from explicit rows.
    #[must_use]
    pub const fn new(rows: Vec<Vec<f64>>) -> Self {
        Self { rows }
    }

    /// Build from whole seconds for convenience in test fixtures.
    #[must_use]
    pub fn from_seconds(seconds: Vec<Vec<u32>>) -> Self {
        let rows = seconds
            .into_iter()
            .map(|row| row.into_iter().map(f64::from).collect())
            .collect();
        Self { rows }
    }

    /// Number of rows in the table.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the table has no rows.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl CostFunction<PointOfInterest> for FixedMatrixCostFunction {
    fn cost(&self, from: &PointOfInterest, to: &PointOfInterest) -> Result<f64, CostError> {
        let row = usize::try_from(from.id)
            .ok()
            .and_then(|index| self.rows.get(index))
            .ok_or(CostError::UnknownPlace { id: from.id })?;
        usize::try_from(to.id)
            .ok()
            .and_then(|index| row.get(index))
            .copied()
            .ok_or(CostError::UnknownPlace { id: to.id })
    }
}
