//! Cost function trait for pairs of places.

use super::error::CostError;

/// Compute the non-negative cost of travelling from one place to another.
///
/// Implementations must be pure: the same pair always yields the same cost,
/// otherwise the optimum reported by a solver is meaningless. Negative or
/// non-finite costs are rejected by [`crate::CostMatrix::build`].
///
/// Any closure of the shape `Fn(&P, &P) -> Result<f64, CostError>` is a cost
/// function.
///
/// # Examples
///
/// ```rust
/// use waymark_core::{CostError, CostFunction};
///
/// let cost = |from: &u32, to: &u32| -> Result<f64, CostError> {
///     Ok(f64::from(from.abs_diff(*to)))
/// };
/// assert_eq!(cost.cost(&2, &7)?, 5.0);
/// # Ok::<(), CostError>(())
/// ```
pub trait CostFunction<P> {
    /// Return the cost of the directed leg `from -> to`.
    fn cost(&self, from: &P, to: &P) -> Result<f64, CostError>;
}

impl<P, F> CostFunction<P> for F
where
    F: Fn(&P, &P) -> Result<f64, CostError>,
{
    fn cost(&self, from: &P, to: &P) -> Result<f64, CostError> {
        self(from, to)
    }
}
