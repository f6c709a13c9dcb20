//! Dense pairwise cost matrix.
//!
//! A [`CostMatrix`] is built once per planning call so the route search never
//! asks the [`CostFunction`] for the same leg twice. Entry `(i, j)` holds the
//! cost of travelling from the `i`-th to the `j`-th input place. The diagonal
//! is never computed: a route does not travel from a place to itself.

use crate::{CostFunction, SolveError};

/// A dense `n×n` matrix of directed leg costs stored in row-major order.
///
/// Every off-diagonal entry is finite and non-negative.
///
/// # Examples
///
/// ```
/// use waymark_core::{CostError, CostMatrix};
///
/// let places = [0_u32, 3, 5];
/// let matrix = CostMatrix::build(&places, &|from: &u32, to: &u32| -> Result<f64, CostError> {
///     Ok(f64::from(from.abs_diff(*to)))
/// })?;
///
/// assert_eq!(matrix.size(), 3);
/// assert_eq!(matrix.get(0, 2), Some(5.0));
/// assert_eq!(matrix.path_cost(&[0, 1, 2]), Some(5.0));
/// # Ok::<(), waymark_core::SolveError>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CostMatrix {
    data: Vec<f64>,
    size: usize,
}

impl CostMatrix {
    /// Price every ordered pair of distinct places with `cost_fn`.
    ///
    /// The cost function is called exactly `n·(n−1)` times, row by row.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::Cost`] as soon as the cost function fails and
    /// [`SolveError::InvalidCost`] for a negative or non-finite cost. No
    /// partially built matrix is returned.
    pub fn build<P, C>(places: &[P], cost_fn: &C) -> Result<Self, SolveError>
    where
        C: CostFunction<P> + ?Sized,
    {
        let size = places.len();
        let mut data = vec![0.0; size * size];
        for ((from, origin), row) in places
            .iter()
            .enumerate()
            .zip(data.chunks_exact_mut(size.max(1)))
        {
            for ((to, destination), cell) in places.iter().enumerate().zip(row.iter_mut()) {
                if from == to {
                    continue;
                }
                let value = cost_fn
                    .cost(origin, destination)
                    .map_err(|source| SolveError::Cost { from, to, source })?;
                *cell = checked_cost(from, to, value)?;
            }
        }
        log::debug!("built {size}x{size} cost matrix");
        Ok(Self { data, size })
    }

    /// Build a matrix from explicit rows, such as a routing service table.
    ///
    /// Diagonal entries are ignored and stored as zero.
    ///
    /// # Errors
    ///
    /// Returns [`SolveError::DimensionMismatch`] when the rows do not form a
    /// square table and [`SolveError::InvalidCost`] for a negative or
    /// non-finite off-diagonal entry.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, SolveError> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (from, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(SolveError::DimensionMismatch {
                    row: from,
                    expected: size,
                    actual: row.len(),
                });
            }
            for (to, value) in row.into_iter().enumerate() {
                let cell = if from == to {
                    0.0
                } else {
                    checked_cost(from, to, value)?
                };
                data.push(cell);
            }
        }
        Ok(Self { data, size })
    }

    /// Cost of the leg `from -> to`, or `None` if either index is out of range.
    pub fn get(&self, from: usize, to: usize) -> Option<f64> {
        if from >= self.size || to >= self.size {
            return None;
        }
        self.data.get(from * self.size + to).copied()
    }

    /// Number of places covered by the matrix.
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Whether the matrix covers no places.
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Sum the legs between consecutive indices of `order`, left to right.
    ///
    /// Orders with fewer than two entries cost zero. Returns `None` if a leg
    /// refers to an index outside the matrix.
    pub fn path_cost(&self, order: &[usize]) -> Option<f64> {
        order.windows(2).try_fold(0.0, |total, leg| match leg {
            [from, to] => self.get(*from, *to).map(|cost| total + cost),
            _ => Some(total),
        })
    }

    /// Returns `true` if `cost(i, j)` and `cost(j, i)` differ by at most
    /// `tolerance` for every pair.
    pub fn is_symmetric(&self, tolerance: f64) -> bool {
        (0..self.size).all(|i| {
            ((i + 1)..self.size).all(|j| match (self.get(i, j), self.get(j, i)) {
                (Some(forward), Some(backward)) => (forward - backward).abs() <= tolerance,
                _ => false,
            })
        })
    }
}

fn checked_cost(from: usize, to: usize, value: f64) -> Result<f64, SolveError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(SolveError::InvalidCost { from, to, value })
    }
}
