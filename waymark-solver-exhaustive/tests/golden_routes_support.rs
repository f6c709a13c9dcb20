//! Shared utilities for golden route tests.
//!
//! Each golden route lists its places and a cost table in seconds whose rows
//! and columns follow the order of `places`. Routes are priced through
//! [`TableCostFunction`], so place identifiers need not be contiguous.

use std::fs;
use std::path::PathBuf;

use geo::Coord;
use serde::Deserialize;
use waymark_core::{CostMatrix, PointOfInterest, TableCostFunction, Tags};

/// Deserialised golden route test case.
#[derive(Debug, Deserialize, Clone)]
#[expect(
    clippy::allow_attributes,
    clippy::allow_attributes_without_reason,
    reason = "fields are used by some test binaries but not others"
)]
pub struct GoldenRoute {
    /// Name of the test case (used in error messages).
    pub name: String,
    /// Human-readable description of what the test validates.
    #[allow(dead_code)]
    pub description: String,
    /// Places in request order.
    pub places: Vec<PlaceSpec>,
    /// Directed leg costs in seconds (row/col indices match place order).
    pub cost_matrix_seconds: Vec<Vec<u32>>,
    /// Expected results for validation.
    pub expected: ExpectedResult,
}

/// Place specification from JSON.
#[derive(Debug, Deserialize, Clone)]
pub struct PlaceSpec {
    /// Unique place identifier.
    pub id: u64,
    /// Longitude.
    pub x: f64,
    /// Latitude.
    pub y: f64,
    /// Free-form tags, usually just a name.
    #[serde(default)]
    pub tags: Tags,
}

/// Expected result from JSON.
#[derive(Debug, Deserialize, Clone)]
pub struct ExpectedResult {
    /// Place identifiers in visiting order.
    pub route_place_ids: Vec<u64>,
    /// Total cost of the route in seconds.
    pub cost: f64,
}

/// Load a golden route from the data directory by name (without extension).
///
/// # Panics
///
/// Panics if the file cannot be read or parsed.
#[must_use]
pub fn load_golden_route(name: &str) -> GoldenRoute {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/golden_routes/data")
        .join(format!("{name}.json"));
    let content = fs::read_to_string(&path).unwrap_or_else(|e| {
        panic!(
            "failed to read golden route file at {}: {}",
            path.display(),
            e
        )
    });
    serde_json::from_str(&content).unwrap_or_else(|e| {
        panic!(
            "failed to parse golden route JSON at {}: {}",
            path.display(),
            e
        )
    })
}

/// Convert place specs to domain places.
#[must_use]
pub fn build_places(specs: &[PlaceSpec]) -> Vec<PointOfInterest> {
    specs
        .iter()
        .map(|s| PointOfInterest::new(s.id, Coord { x: s.x, y: s.y }, s.tags.clone()))
        .collect()
}

/// Build the table cost function described by `golden`.
///
/// # Panics
///
/// Panics if the table is not square or does not match the places.
#[must_use]
pub fn build_costs(golden: &GoldenRoute, places: &[PointOfInterest]) -> TableCostFunction {
    let rows = golden
        .cost_matrix_seconds
        .iter()
        .map(|row| row.iter().copied().map(f64::from).collect())
        .collect();
    let matrix = CostMatrix::from_rows(rows)
        .unwrap_or_else(|e| panic!("{}: invalid cost table: {e}", golden.name));
    TableCostFunction::from_pois(places, matrix)
        .unwrap_or_else(|e| panic!("{}: cost table does not fit places: {e}", golden.name))
}
