//! Errors reported by cost functions.

use thiserror::Error;

/// Errors from [`crate::cost::CostFunction::cost`] and cost table construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CostError {
    /// A place was not known to the cost function.
    #[error("no travel cost is known for place {id}")]
    UnknownPlace {
        /// Identifier of the unknown place.
        id: u64,
    },
    /// The same place identifier was listed twice for one cost table.
    #[error("place {id} appears more than once in the cost table")]
    DuplicatePlace {
        /// Identifier listed more than once.
        id: u64,
    },
    /// A cost table did not cover the listed places.
    #[error("cost table covers {expected} places but {actual} were listed")]
    DimensionMismatch {
        /// Number of places the table covers.
        expected: usize,
        /// Number of places supplied.
        actual: usize,
    },
    /// An upstream cost service reported an error.
    #[error("cost service error {code}: {message}")]
    ServiceError {
        /// Machine-readable error code.
        code: String,
        /// Human-readable description.
        message: String,
    },
}
