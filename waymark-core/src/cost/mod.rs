//! Price the legs between places.
//!
//! The [`CostFunction`] trait is the boundary to whatever knows how expensive
//! it is to travel from one place to another: a routing service, a lookup
//! table, or a closure supplied by the caller. Costs are directed, so
//! `cost(a, b)` need not equal `cost(b, a)`.
//!
//! Failures are returned as [`CostError`] and abort the planning call that
//! requested them.

mod error;
mod function;
mod table;

pub use error::CostError;
pub use function::CostFunction;
pub use table::TableCostFunction;
