#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Coordinate, metric, and estimate types for parcel boundary capture.
//!
//! These are the plain data values exchanged between the geometry
//! functions, the draft controller, and whatever displays or persists a
//! parcel. None of them carry behavior beyond construction and
//! validation.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};
use thiserror::Error;

/// Minimum number of boundary points for a parcel to form a polygon.
pub const MIN_POLYGON_POINTS: usize = 3;

/// Error returned when a latitude/longitude pair is outside the valid
/// WGS84 range or is not a finite number.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
#[error("invalid coordinate ({latitude}, {longitude}): latitude must be in [-90, 90] and longitude in [-180, 180]")]
pub struct InvalidCoordinateError {
    /// The rejected latitude.
    pub latitude: f64,
    /// The rejected longitude.
    pub longitude: f64,
}

/// A single latitude/longitude reading in degrees.
///
/// Immutable once created. Construction through [`GeoPoint::new`] (or
/// deserialization) guarantees the coordinate is finite and in range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawGeoPoint")]
pub struct GeoPoint {
    latitude: f64,
    longitude: f64,
}

#[derive(Deserialize)]
struct RawGeoPoint {
    latitude: f64,
    longitude: f64,
}

impl TryFrom<RawGeoPoint> for GeoPoint {
    type Error = InvalidCoordinateError;

    fn try_from(raw: RawGeoPoint) -> Result<Self, Self::Error> {
        Self::new(raw.latitude, raw.longitude)
    }
}

impl GeoPoint {
    /// Creates a point from a latitude and longitude in degrees.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidCoordinateError`] if either value is non-finite or
    /// the latitude is outside `[-90, 90]` or the longitude is outside
    /// `[-180, 180]`.
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, InvalidCoordinateError> {
        if latitude.is_finite()
            && longitude.is_finite()
            && (-90.0..=90.0).contains(&latitude)
            && (-180.0..=180.0).contains(&longitude)
        {
            Ok(Self {
                latitude,
                longitude,
            })
        } else {
            Err(InvalidCoordinateError {
                latitude,
                longitude,
            })
        }
    }

    /// Latitude in degrees.
    #[must_use]
    pub const fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Longitude in degrees.
    #[must_use]
    pub const fn longitude(&self) -> f64 {
        self.longitude
    }

    /// The point as a `GeoJSON` position (`[lon, lat]`).
    #[must_use]
    pub fn to_position(&self) -> Vec<f64> {
        vec![self.longitude, self.latitude]
    }
}

/// Where a boundary draft sits in its capture lifecycle.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DraftState {
    /// No points captured yet.
    Empty,
    /// One or two points: drawable as a path, not yet a polygon.
    Open,
    /// Three or more points: drawable as a polygon and eligible for save.
    Valid,
}

impl DraftState {
    /// Classifies a draft by its point count.
    #[must_use]
    pub const fn from_point_count(count: usize) -> Self {
        match count {
            0 => Self::Empty,
            n if n < MIN_POLYGON_POINTS => Self::Open,
            _ => Self::Valid,
        }
    }
}

/// Whether a boundary has enough points to be saved.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum PointValidity {
    /// At least [`MIN_POLYGON_POINTS`] points.
    Valid,
    /// Fewer than [`MIN_POLYGON_POINTS`] points.
    Insufficient,
}

impl PointValidity {
    /// Classifies a boundary by its point count.
    #[must_use]
    pub const fn from_point_count(count: usize) -> Self {
        if count >= MIN_POLYGON_POINTS {
            Self::Valid
        } else {
            Self::Insufficient
        }
    }
}

/// Area and perimeter of a boundary, recomputed from scratch on every change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Metrics {
    /// Planar-projected area in hectares.
    pub area_hectares: f64,
    /// Sum of great-circle distances between consecutive points, in meters.
    pub perimeter_meters: f64,
    /// Number of points the metrics were computed from.
    pub point_count: usize,
}

/// Secondary agronomic figures derived from [`Metrics`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DerivedStats {
    /// Area in square meters.
    pub area_square_meters: f64,
    /// Whole acres, rounded up, for headline display.
    pub headline_acres: u64,
    /// Decimal acres for detailed display.
    pub precise_acres: f64,
    /// Area usable for intensive cultivation, in hectares.
    pub usable_area_hectares: f64,
    /// Estimated number of plants the parcel can hold.
    pub estimated_plant_capacity: u64,
    /// Estimated minutes to walk the boundary.
    pub estimated_traversal_minutes: u64,
    /// Perimeter in kilometers.
    pub perimeter_kilometers: f64,
    /// Whether the boundary has enough points to be saved.
    pub point_validity: PointValidity,
}

/// A map viewport that frames a set of points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MapRegion {
    /// Center latitude in degrees.
    pub latitude: f64,
    /// Center longitude in degrees.
    pub longitude: f64,
    /// Vertical span in degrees.
    pub latitude_delta: f64,
    /// Horizontal span in degrees.
    pub longitude_delta: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_range_bounds() {
        assert!(GeoPoint::new(90.0, 180.0).is_ok());
        assert!(GeoPoint::new(-90.0, -180.0).is_ok());
        assert!(GeoPoint::new(0.0, 0.0).is_ok());
    }

    #[test]
    fn rejects_out_of_range() {
        assert!(GeoPoint::new(90.5, 0.0).is_err());
        assert!(GeoPoint::new(0.0, -180.1).is_err());
        assert!(GeoPoint::new(f64::NAN, 0.0).is_err());
        assert!(GeoPoint::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn position_is_lon_lat() {
        let point = GeoPoint::new(10.0, -84.0).unwrap();
        assert_eq!(point.to_position(), vec![-84.0, 10.0]);
    }

    #[test]
    fn deserialize_validates() {
        let ok: Result<GeoPoint, _> =
            serde_json::from_str(r#"{"latitude": 10.0, "longitude": -84.0}"#);
        assert_eq!(ok.unwrap(), GeoPoint::new(10.0, -84.0).unwrap());

        let bad: Result<GeoPoint, _> =
            serde_json::from_str(r#"{"latitude": 100.0, "longitude": -84.0}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn draft_state_thresholds() {
        assert_eq!(DraftState::from_point_count(0), DraftState::Empty);
        assert_eq!(DraftState::from_point_count(1), DraftState::Open);
        assert_eq!(DraftState::from_point_count(2), DraftState::Open);
        assert_eq!(DraftState::from_point_count(3), DraftState::Valid);
        assert_eq!(DraftState::from_point_count(40), DraftState::Valid);
    }

    #[test]
    fn validity_labels() {
        assert_eq!(PointValidity::from_point_count(2).to_string(), "insufficient");
        assert_eq!(PointValidity::from_point_count(3).to_string(), "valid");
    }
}
