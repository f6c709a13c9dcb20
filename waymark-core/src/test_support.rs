//! Test-only cost functions and place builders used by unit and behaviour
//! tests.

use std::sync::atomic::{AtomicUsize, Ordering};

use geo::Coord;

use crate::{CostError, CostFunction, PointOfInterest};

/// Construct an untagged place at the origin.
pub fn poi(id: u64) -> PointOfInterest {
    PointOfInterest::with_empty_tags(id, Coord { x: 0.0, y: 0.0 })
}

/// Deterministic `CostFunction` pricing every leg at one.
#[derive(Default, Debug, Copy, Clone)]
pub struct UnitCostFunction;

impl CostFunction<PointOfInterest> for UnitCostFunction {
    fn cost(&self, _from: &PointOfInterest, _to: &PointOfInterest) -> Result<f64, CostError> {
        Ok(1.0)
    }
}

/// `CostFunction` treating identifiers as positions on a line.
///
/// The cost of a leg is the absolute difference of the two identifiers.
#[derive(Default, Debug, Copy, Clone)]
pub struct LineCostFunction;

impl CostFunction<PointOfInterest> for LineCostFunction {
    fn cost(&self, from: &PointOfInterest, to: &PointOfInterest) -> Result<f64, CostError> {
        Ok(from.id.abs_diff(to.id) as f64)
    }
}

/// `CostFunction` that fails for one directed pair of identifiers and prices
/// every other leg at one.
#[derive(Debug, Copy, Clone)]
pub struct FailingCostFunction {
    from: u64,
    to: u64,
}

impl FailingCostFunction {
    /// Fail whenever the leg `from -> to` is priced.
    pub const fn new(from: u64, to: u64) -> Self {
        Self { from, to }
    }
}

impl CostFunction<PointOfInterest> for FailingCostFunction {
    fn cost(&self, from: &PointOfInterest, to: &PointOfInterest) -> Result<f64, CostError> {
        if from.id == self.from && to.id == self.to {
            return Err(CostError::ServiceError {
                code: "NoRoute".to_owned(),
                message: format!("no route from {} to {}", from.id, to.id),
            });
        }
        Ok(1.0)
    }
}

/// Wraps a `CostFunction` and counts how often it is called.
#[derive(Debug, Default)]
pub struct CountingCostFunction<C> {
    inner: C,
    calls: AtomicUsize,
}

impl<C> CountingCostFunction<C> {
    /// Count calls made to `inner`.
    pub const fn new(inner: C) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    /// Number of calls made so far, including failed ones.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::Relaxed)
    }
}

impl<P, C> CostFunction<P> for CountingCostFunction<C>
where
    C: CostFunction<P>,
{
    fn cost(&self, from: &P, to: &P) -> Result<f64, CostError> {
        self.calls.fetch_add(1, Ordering::Relaxed);
        self.inner.cost(from, to)
    }
}
