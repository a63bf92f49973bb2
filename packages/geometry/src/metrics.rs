//! Area and perimeter of a boundary point sequence.
//!
//! Area uses an equirectangular projection centered on the mean latitude
//! followed by the shoelace formula. It is accurate for parcels up to a few
//! hundred hectares and degrades with size and distance from the equator.
//! Perimeter sums haversine distances on a spherical Earth.
//!
//! Both functions accept the live, unclosed draft and are total over all
//! inputs: too few points simply measure as zero.

use field_parcel_geometry_models::{GeoPoint, MIN_POLYGON_POINTS, Metrics};

/// Meters per degree of latitude (fixed, independent of latitude).
pub const METERS_PER_DEGREE_LAT: f64 = 111_132.92;

/// Meters per degree of longitude at the equator; scaled by `cos(lat)`.
pub const METERS_PER_DEGREE_LON_AT_EQUATOR: f64 = 111_412.84;

/// Mean Earth radius used by the haversine formula.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Square meters in one hectare.
pub const SQUARE_METERS_PER_HECTARE: f64 = 10_000.0;

/// Computes the planar-projected area of `points` in hectares.
///
/// The sequence is treated as closed regardless of whether the last point
/// repeats the first. Returns exactly `0.0` for fewer than three points.
///
/// Cross products are evaluated unfused so that collinear input cancels to
/// exactly zero.
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn compute_area_hectares(points: &[GeoPoint]) -> f64 {
    if points.len() < MIN_POLYGON_POINTS {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let mean_lat = points.iter().map(GeoPoint::latitude).sum::<f64>() / points.len() as f64;
    let meters_per_degree_lon = METERS_PER_DEGREE_LON_AT_EQUATOR * mean_lat.to_radians().cos();

    let projected: Vec<(f64, f64)> = points
        .iter()
        .map(|p| {
            (
                p.longitude() * meters_per_degree_lon,
                p.latitude() * METERS_PER_DEGREE_LAT,
            )
        })
        .collect();

    let n = projected.len();
    let twice_signed_area: f64 = (0..n)
        .map(|i| {
            let (xi, yi) = projected[i];
            let (xj, yj) = projected[(i + 1) % n];
            xi * yj - xj * yi
        })
        .sum();

    twice_signed_area.abs() / 2.0 / SQUARE_METERS_PER_HECTARE
}

/// Computes the great-circle distance between two points in meters.
#[must_use]
#[allow(clippy::suboptimal_flops)]
pub fn haversine_meters(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let lat1 = from.latitude().to_radians();
    let lat2 = to.latitude().to_radians();
    let d_lat = lat2 - lat1;
    let d_lon = to.longitude().to_radians() - from.longitude().to_radians();

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METERS * c
}

/// Sums the haversine distances between consecutive points, in meters.
///
/// Does not wrap from the last point back to the first; pass a closed ring
/// to include the closing edge. Returns exactly `0.0` for fewer than two
/// points.
#[must_use]
pub fn compute_perimeter_meters(points: &[GeoPoint]) -> f64 {
    if points.len() < 2 {
        return 0.0;
    }

    points
        .windows(2)
        .map(|pair| haversine_meters(&pair[0], &pair[1]))
        .sum()
}

/// Computes area, perimeter, and point count for `points` as given.
#[must_use]
pub fn measure(points: &[GeoPoint]) -> Metrics {
    Metrics {
        area_hectares: compute_area_hectares(points),
        perimeter_meters: compute_perimeter_meters(points),
        point_count: points.len(),
    }
}
