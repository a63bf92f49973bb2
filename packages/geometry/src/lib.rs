#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Geometry for captured parcel boundaries.
//!
//! Turns an ordered sequence of [`GeoPoint`]s into a closed ring, measures
//! its area (equirectangular projection + shoelace) and perimeter
//! (haversine), and derives the agronomic estimates shown alongside the
//! map. Everything here is a pure function of its input; the stateful
//! capture flow lives in `field_parcel_draft`.

pub mod closer;
pub mod estimates;
pub mod metrics;
pub mod region;
pub mod ring;

pub use closer::close;
pub use estimates::derive_stats;
pub use metrics::{compute_area_hectares, compute_perimeter_meters, measure};
pub use region::fit_region;

use field_parcel_geometry_models::{DerivedStats, GeoPoint, InvalidCoordinateError, Metrics};
use thiserror::Error;

/// Errors that can occur when converting stored geometries to points.
#[derive(Debug, Error)]
pub enum GeometryError {
    /// `GeoJSON` text could not be parsed.
    #[error("GeoJSON error: {0}")]
    GeoJson(#[from] geojson::Error),

    /// The geometry was parsed but is not a polygon.
    #[error("Unsupported geometry type: {geometry_type}")]
    UnsupportedGeometry {
        /// The `GeoJSON` type name that was found.
        geometry_type: String,
    },

    /// A position held fewer than two ordinates.
    #[error("Malformed position: expected [lon, lat], got {ordinates} ordinate(s)")]
    MalformedPosition {
        /// Number of ordinates in the offending position.
        ordinates: usize,
    },

    /// A position held an out-of-range coordinate.
    #[error(transparent)]
    InvalidCoordinate(#[from] InvalidCoordinateError),
}

/// Metrics and estimates for a stored parcel ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingSummary {
    /// Area, perimeter, and point count of the ring as given.
    pub metrics: Metrics,
    /// Estimates derived from [`Self::metrics`].
    pub stats: DerivedStats,
}

/// Summarizes a stored (already closed) ring the way the parcel detail
/// view presents it.
///
/// The ring is measured exactly as given, so a closed ring's perimeter
/// includes the closing edge and its point count includes the repeated
/// first point.
#[must_use]
pub fn summarize_ring(points: &[GeoPoint]) -> RingSummary {
    let metrics = measure(points);
    RingSummary {
        metrics,
        stats: derive_stats(&metrics),
    }
}
