//! Planned routes through places.
//!
//! A [`Plan`] is the ordered result of a solve together with the summed cost of
//! its consecutive legs. Routes are one-way paths: the cost never includes a
//! leg back to the first place.

/// An ordered, one-way path through places with its total cost.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use waymark_core::{Plan, PointOfInterest};
///
/// let poi = PointOfInterest::with_empty_tags(1, Coord { x: 0.0, y: 0.0 });
/// let plan = Plan::new(vec![poi], 0.0);
///
/// assert_eq!(plan.len(), 1);
/// assert_eq!(plan.cost(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plan<P> {
    places: Vec<P>,
    cost: f64,
}

impl<P> Plan<P> {
    /// Construct a plan from places already in visiting order.
    pub const fn new(places: Vec<P>, cost: f64) -> Self {
        Self { places, cost }
    }

    /// Construct an empty plan with zero cost.
    ///
    /// # Examples
    /// ```
    /// use waymark_core::{Plan, PointOfInterest};
    ///
    /// let plan: Plan<PointOfInterest> = Plan::empty();
    /// assert!(plan.is_empty());
    /// assert_eq!(plan.cost(), 0.0);
    /// ```
    pub const fn empty() -> Self {
        Self::new(Vec::new(), 0.0)
    }

    /// Places in visiting order.
    pub fn places(&self) -> &[P] {
        &self.places
    }

    /// Sum of the costs of consecutive legs.
    pub const fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of places visited.
    pub fn len(&self) -> usize {
        self.places.len()
    }

    /// Whether the plan visits no places.
    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    /// Consume the plan, returning the ordered places.
    pub fn into_places(self) -> Vec<P> {
        self.places
    }
}

impl<P: Clone> Plan<P> {
    /// Translate an index order over `places` into a plan.
    ///
    /// Returns `None` if `order` refers to an index outside `places`.
    ///
    /// # Examples
    /// ```
    /// use waymark_core::Plan;
    ///
    /// let plan = Plan::from_order(&["a", "b", "c"], &[2, 0, 1], 4.0).expect("valid order");
    /// assert_eq!(plan.places(), &["c", "a", "b"]);
    /// assert!(Plan::from_order(&["a"], &[1], 0.0).is_none());
    /// ```
    pub fn from_order(places: &[P], order: &[usize], cost: f64) -> Option<Self> {
        let ordered = order
            .iter()
            .map(|&index| places.get(index).cloned())
            .collect::<Option<Vec<_>>>()?;
        Some(Self::new(ordered, cost))
    }
}

impl<P> Default for Plan<P> {
    fn default() -> Self {
        Self::empty()
    }
}
