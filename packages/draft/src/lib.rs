#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Parcel boundary capture state and save preparation.
//!
//! A [`ParcelDraftController`] is created when a user starts drawing a
//! parcel and dropped when they save or cancel. Every point added (map tap
//! or current location) goes through it, and it recomputes the metrics and
//! estimates shown next to the map after each change. When the user saves,
//! [`ParcelDraftController::prepare_for_save`] closes the ring, validates
//! it, and hands back the geometry the persistence layer sends upstream.

pub mod collector;
pub mod payload;

pub use collector::BoundaryCollector;
pub use payload::{DEFAULT_SOIL_TYPE, ParcelPayload, PayloadError};

use field_parcel_geometry::{close, compute_area_hectares, compute_perimeter_meters, measure};
use field_parcel_geometry_models::{
    DerivedStats, DraftState, GeoPoint, MIN_POLYGON_POINTS, Metrics,
};
use thiserror::Error;

/// Reasons a draft cannot be saved. Both are recoverable by adding points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Fewer than [`MIN_POLYGON_POINTS`] points were captured.
    #[error("insufficient points")]
    InsufficientPoints {
        /// Number of points in the draft.
        count: usize,
    },

    /// The closed ring encloses no area (e.g. all points collinear).
    #[error("degenerate polygon")]
    DegeneratePolygon,
}

/// Geometry ready to hand to the persistence layer.
#[derive(Debug, Clone, PartialEq)]
pub struct SavePreparation {
    /// The boundary with its first point repeated at the end.
    pub closed_ring: Vec<GeoPoint>,
    /// Area of the closed ring in hectares. Always positive.
    pub area_hectares: f64,
    /// Perimeter of the closed ring in meters, closing edge included.
    pub perimeter_meters: f64,
}

impl SavePreparation {
    /// The closed ring as `GeoJSON` polygon coordinates (`[[[lon, lat], ...]]`).
    #[must_use]
    pub fn closed_ring_coordinates(&self) -> Vec<Vec<Vec<f64>>> {
        vec![self.closed_ring.iter().map(GeoPoint::to_position).collect()]
    }

    /// The closed ring as a `GeoJSON` `Polygon` geometry.
    #[must_use]
    pub fn geometry(&self) -> geojson::Geometry {
        field_parcel_geometry::ring::ring_to_geometry(&self.closed_ring)
    }
}

/// Owns the boundary being captured and its live metrics.
///
/// One controller exists per capture session. It is not shared between
/// threads; cancelling a capture is simply dropping the controller.
#[derive(Debug, Clone, PartialEq)]
pub struct ParcelDraftController {
    collector: BoundaryCollector,
    metrics: Metrics,
    stats: DerivedStats,
}

impl Default for ParcelDraftController {
    fn default() -> Self {
        Self::new()
    }
}

impl ParcelDraftController {
    /// Starts a new capture session with an empty boundary.
    #[must_use]
    pub fn new() -> Self {
        let metrics = Metrics::default();
        Self {
            collector: BoundaryCollector::new(),
            metrics,
            stats: field_parcel_geometry::derive_stats(&metrics),
        }
    }

    /// Appends a boundary point and recomputes metrics.
    pub fn add_point(&mut self, point: GeoPoint) {
        self.collector.add_point(point);
        log::debug!(
            "Added point {} at ({}, {})",
            self.collector.len(),
            point.latitude(),
            point.longitude()
        );
        self.recompute();
    }

    /// Discards every point and resets metrics to zero.
    ///
    /// Callers are expected to have confirmed the clear with the user.
    pub fn clear(&mut self) {
        log::debug!("Clearing {} boundary point(s)", self.collector.len());
        self.collector.clear();
        self.recompute();
    }

    /// Recomputes metrics and estimates from the open draft.
    fn recompute(&mut self) {
        self.metrics = measure(self.collector.points());
        self.stats = field_parcel_geometry::derive_stats(&self.metrics);
        log::debug!(
            "Recomputed draft metrics: {:.4} ha, {:.1} m, {} point(s)",
            self.metrics.area_hectares,
            self.metrics.perimeter_meters,
            self.metrics.point_count
        );
    }

    /// Metrics of the open draft as of the last change.
    #[must_use]
    pub const fn current_metrics(&self) -> Metrics {
        self.metrics
    }

    /// Estimates derived from [`Self::current_metrics`].
    #[must_use]
    pub const fn current_estimates(&self) -> DerivedStats {
        self.stats
    }

    /// Copy of the captured points in insertion order, for the map display.
    #[must_use]
    pub fn snapshot(&self) -> Vec<GeoPoint> {
        self.collector.snapshot()
    }

    #[must_use]
    pub fn state(&self) -> DraftState {
        self.collector.state()
    }

    /// Closes the ring and validates it for persistence.
    ///
    /// The draft itself is left untouched, so the user may keep adding
    /// points after a failed or successful preparation.
    ///
    /// # Errors
    ///
    /// * [`ValidationError::InsufficientPoints`] if fewer than three points
    ///   were captured
    /// * [`ValidationError::DegeneratePolygon`] if the closed ring's area is
    ///   exactly zero
    pub fn prepare_for_save(&self) -> Result<SavePreparation, ValidationError> {
        let count = self.collector.len();
        if count < MIN_POLYGON_POINTS {
            log::warn!("Refusing to save parcel with {count} point(s)");
            return Err(ValidationError::InsufficientPoints { count });
        }

        let closed_ring = close(self.collector.points()).into_owned();
        let area_hectares = compute_area_hectares(&closed_ring);

        if area_hectares == 0.0 {
            log::warn!("Refusing to save parcel with zero area ({count} points)");
            return Err(ValidationError::DegeneratePolygon);
        }

        let perimeter_meters = compute_perimeter_meters(&closed_ring);
        log::info!(
            "Prepared parcel for save: {} ring point(s), {area_hectares:.4} ha, {perimeter_meters:.1} m",
            closed_ring.len()
        );

        Ok(SavePreparation {
            closed_ring,
            area_hectares,
            perimeter_meters,
        })
    }
}

#[cfg(test)]
mod tests {
    use field_parcel_geometry_models::PointValidity;

    use super::*;

    fn pt(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    fn square() -> Vec<GeoPoint> {
        vec![
            pt(10.0, -84.0),
            pt(10.0, -83.999),
            pt(10.001, -83.999),
            pt(10.001, -84.0),
        ]
    }

    fn controller_with(points: &[GeoPoint]) -> ParcelDraftController {
        let mut controller = ParcelDraftController::new();
        for point in points {
            controller.add_point(*point);
        }
        controller
    }

    #[test]
    fn starts_empty() {
        let controller = ParcelDraftController::new();
        assert_eq!(controller.current_metrics(), Metrics::default());
        assert_eq!(controller.state(), DraftState::Empty);
        assert_eq!(
            controller.current_estimates().point_validity,
            PointValidity::Insufficient
        );
    }

    #[test]
    fn square_plot_metrics() {
        let controller = controller_with(&square());
        let metrics = controller.current_metrics();

        assert_eq!(metrics.point_count, 4);
        assert!(metrics.area_hectares > 1.2 && metrics.area_hectares < 1.25);
        // Live perimeter excludes the closing edge.
        assert!(metrics.perimeter_meters > 320.0 && metrics.perimeter_meters < 340.0);

        let prepared = controller.prepare_for_save().unwrap();
        assert!(prepared.perimeter_meters > 400.0 && prepared.perimeter_meters < 450.0);
        assert_eq!(prepared.closed_ring.len(), 5);
        assert_eq!(prepared.closed_ring[0], prepared.closed_ring[4]);
        assert!((prepared.area_hectares - metrics.area_hectares).abs() / metrics.area_hectares < 1e-4);
    }

    #[test]
    fn clear_starts_fresh_sequence() {
        let mut controller = controller_with(&[pt(1.0, 1.0), pt(1.0, 2.0)]);
        controller.clear();

        assert_eq!(controller.current_metrics().point_count, 0);
        assert_eq!(controller.current_metrics().perimeter_meters, 0.0);

        controller.add_point(pt(5.0, 5.0));
        assert_eq!(controller.snapshot(), vec![pt(5.0, 5.0)]);
        assert_eq!(controller.current_metrics().point_count, 1);
    }

    #[test]
    fn two_points_are_insufficient() {
        let controller = controller_with(&[pt(1.0, 1.0), pt(1.0, 2.0)]);
        let err = controller.prepare_for_save().unwrap_err();

        assert_eq!(err, ValidationError::InsufficientPoints { count: 2 });
        assert_eq!(err.to_string(), "insufficient points");
    }

    #[test]
    fn collinear_points_are_degenerate() {
        let controller = controller_with(&[pt(10.0, -84.0), pt(10.0, -83.999), pt(10.0, -83.998)]);

        assert_eq!(controller.current_metrics().area_hectares, 0.0);
        let err = controller.prepare_for_save().unwrap_err();
        assert_eq!(err, ValidationError::DegeneratePolygon);
        assert_eq!(err.to_string(), "degenerate polygon");
    }

    #[test]
    fn save_does_not_close_the_draft() {
        let mut controller = controller_with(&square());
        controller.prepare_for_save().unwrap();

        assert_eq!(controller.snapshot().len(), 4);
        controller.add_point(pt(10.0005, -84.0005));
        assert_eq!(controller.current_metrics().point_count, 5);
    }

    #[test]
    fn pre_closed_draft_is_not_closed_again() {
        let mut points = square();
        points.push(points[0]);
        let prepared = controller_with(&points).prepare_for_save().unwrap();
        assert_eq!(prepared.closed_ring.len(), 5);
    }

    #[test]
    fn coordinates_are_lon_lat() {
        let prepared = controller_with(&square()).prepare_for_save().unwrap();
        let coordinates = prepared.closed_ring_coordinates();

        assert_eq!(coordinates.len(), 1);
        assert_eq!(coordinates[0][0], vec![-84.0, 10.0]);
        assert_eq!(coordinates[0][4], vec![-84.0, 10.0]);
    }

    #[test]
    fn estimates_follow_metrics() {
        let controller = controller_with(&square());
        let stats = controller.current_estimates();

        assert_eq!(stats.point_validity, PointValidity::Valid);
        assert_eq!(stats.headline_acres, 4);
        assert_eq!(stats.estimated_plant_capacity, 122);
        // ~330 m of open boundary at 100 m/min.
        assert_eq!(stats.estimated_traversal_minutes, 4);
    }
}
