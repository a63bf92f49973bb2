//! Ordered point collection for one in-progress parcel boundary.

use field_parcel_geometry_models::{DraftState, GeoPoint};

/// Holds the captured boundary points in insertion order.
///
/// Insertion order defines both the polygon winding and the marker
/// numbering on the map. The collector never filters input and never
/// stores a closing point; closure is computed on demand at save time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BoundaryCollector {
    points: Vec<GeoPoint>,
}

impl BoundaryCollector {
    /// Creates an empty collector.
    #[must_use]
    pub const fn new() -> Self {
        Self { points: Vec::new() }
    }

    /// Appends `point`, including exact duplicates of the previous point.
    pub fn add_point(&mut self, point: GeoPoint) {
        self.points.push(point);
    }

    /// Discards every captured point.
    pub fn clear(&mut self) {
        self.points.clear();
    }

    /// Returns an owned copy of the points that callers may keep and
    /// compare against later snapshots.
    #[must_use]
    pub fn snapshot(&self) -> Vec<GeoPoint> {
        self.points.clone()
    }

    /// Borrows the current points without copying.
    #[must_use]
    pub fn points(&self) -> &[GeoPoint] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The most recently added point.
    #[must_use]
    pub fn last(&self) -> Option<&GeoPoint> {
        self.points.last()
    }

    #[must_use]
    pub fn state(&self) -> DraftState {
        DraftState::from_point_count(self.points.len())
    }
}
