//! Cost function backed by a precomputed table keyed by place identifier.

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use crate::{CostMatrix, PointOfInterest};

use super::error::CostError;
use super::function::CostFunction;

/// A [`CostFunction`] over [`PointOfInterest`] values answered from a table.
///
/// Routing services usually return costs as a square table for an ordered list
/// of places. This adapter keeps that table and maps each place back to its
/// row and column through [`PointOfInterest::id`].
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use waymark_core::{CostFunction, CostMatrix, PointOfInterest, TableCostFunction};
///
/// let matrix = CostMatrix::from_rows(vec![vec![0.0, 30.0], vec![45.0, 0.0]])?;
/// let costs = TableCostFunction::new([10, 20], matrix)?;
///
/// let a = PointOfInterest::with_empty_tags(10, Coord { x: 0.0, y: 0.0 });
/// let b = PointOfInterest::with_empty_tags(20, Coord { x: 1.0, y: 0.0 });
/// assert_eq!(costs.cost(&a, &b)?, 30.0);
/// assert_eq!(costs.cost(&b, &a)?, 45.0);
/// # Ok::<(), Box<dyn std::error::Error>>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TableCostFunction {
    index: HashMap<u64, usize>,
    matrix: CostMatrix,
}

impl TableCostFunction {
    /// Associate each identifier, in order, with a row of `matrix`.
    ///
    /// # Errors
    ///
    /// Returns [`CostError::DimensionMismatch`] when the number of identifiers
    /// differs from the matrix size and [`CostError::DuplicatePlace`] when an
    /// identifier repeats.
    pub fn new<I>(ids: I, matrix: CostMatrix) -> Result<Self, CostError>
    where
        I: IntoIterator<Item = u64>,
    {
        let mut index = HashMap::new();
        for (position, id) in ids.into_iter().enumerate() {
            match index.entry(id) {
                Entry::Occupied(_) => return Err(CostError::DuplicatePlace { id }),
                Entry::Vacant(slot) => {
                    slot.insert(position);
                }
            }
        }
        if index.len() != matrix.size() {
            return Err(CostError::DimensionMismatch {
                expected: matrix.size(),
                actual: index.len(),
            });
        }
        Ok(Self { index, matrix })
    }

    /// Build a table whose rows follow the order of `pois`.
    ///
    /// # Errors
    ///
    /// See [`TableCostFunction::new`].
    pub fn from_pois(pois: &[PointOfInterest], matrix: CostMatrix) -> Result<Self, CostError> {
        Self::new(pois.iter().map(|poi| poi.id), matrix)
    }

    fn position(&self, id: u64) -> Result<usize, CostError> {
        self.index
            .get(&id)
            .copied()
            .ok_or(CostError::UnknownPlace { id })
    }
}

impl CostFunction<PointOfInterest> for TableCostFunction {
    fn cost(&self, from: &PointOfInterest, to: &PointOfInterest) -> Result<f64, CostError> {
        let row = self.position(from.id)?;
        let column = self.position(to.id)?;
        // Positions come from the index, which is validated against the size.
        self.matrix
            .get(row, column)
            .ok_or(CostError::UnknownPlace { id: to.id })
    }
}
