//! Places a route can visit.

use std::collections::HashMap;

use geo::Coord;

/// Free-form key/value tags attached to a place.
pub type Tags = HashMap<String, String>;

/// A location worth visiting.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. The planner
/// never derives costs from them; they are carried so callers can render the
/// resulting plan.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use waymark_core::{PointOfInterest, Tags};
///
/// let poi = PointOfInterest::new(
///     1,
///     Coord { x: 1.0, y: 2.0 },
///     Tags::from([("name".into(), "Museum".into())]),
/// );
///
/// assert_eq!(poi.id, 1);
/// assert_eq!(poi.tags.get("name"), Some(&"Museum".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointOfInterest {
    /// Caller-assigned identifier, unique within one planning request.
    pub id: u64,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// OpenStreetMap-style tags.
    #[cfg_attr(feature = "serde", serde(default))]
    pub tags: Tags,
}

impl PointOfInterest {
    /// Construct a `PointOfInterest` with the provided tags.
    pub const fn new(id: u64, location: Coord<f64>, tags: Tags) -> Self {
        Self { id, location, tags }
    }

    /// Construct a `PointOfInterest` without tags.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use waymark_core::PointOfInterest;
    ///
    /// let poi = PointOfInterest::with_empty_tags(1, Coord { x: 0.0, y: 0.0 });
    /// assert!(poi.tags.is_empty());
    /// ```
    pub fn with_empty_tags(id: u64, location: Coord<f64>) -> Self {
        Self::new(id, location, Tags::new())
    }

    /// Return the `name` tag, if present.
    pub fn name(&self) -> Option<&str> {
        self.tags.get("name").map(String::as_str)
    }
}
