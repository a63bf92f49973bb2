//! Map viewport fitting for a set of boundary points.

use field_parcel_geometry_models::{GeoPoint, MapRegion};
use geo::{BoundingRect, Coord, MultiPoint, Point};

/// Factor applied to the bounding box span so points are not drawn at the
/// viewport edge.
pub const REGION_PADDING_FACTOR: f64 = 1.4;

/// Smallest span, in degrees, a fitted region may have on either axis.
pub const MIN_REGION_DELTA_DEGREES: f64 = 0.005;

/// Fits a map region around `points`.
///
/// The region is centered on the bounding box and its spans are the
/// padded box dimensions, clamped to [`MIN_REGION_DELTA_DEGREES`] so a
/// tiny or single-point parcel still gets a usable zoom level. Returns
/// `None` for an empty sequence.
#[must_use]
pub fn fit_region(points: &[GeoPoint]) -> Option<MapRegion> {
    let multi: MultiPoint<f64> = points
        .iter()
        .map(|p| {
            Point::from(Coord {
                x: p.longitude(),
                y: p.latitude(),
            })
        })
        .collect();

    let rect = multi.bounding_rect()?;
    let center = rect.center();

    Some(MapRegion {
        latitude: center.y,
        longitude: center.x,
        latitude_delta: (rect.height() * REGION_PADDING_FACTOR).max(MIN_REGION_DELTA_DEGREES),
        longitude_delta: (rect.width() * REGION_PADDING_FACTOR).max(MIN_REGION_DELTA_DEGREES),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pt(lat: f64, lon: f64) -> GeoPoint {
        GeoPoint::new(lat, lon).unwrap()
    }

    #[test]
    fn empty_has_no_region() {
        assert_eq!(fit_region(&[]), None);
    }

    #[test]
    fn single_point_uses_minimum_delta() {
        let region = fit_region(&[pt(10.0, -84.0)]).unwrap();
        assert!((region.latitude - 10.0).abs() < 1e-12);
        assert!((region.longitude + 84.0).abs() < 1e-12);
        assert!((region.latitude_delta - MIN_REGION_DELTA_DEGREES).abs() < 1e-12);
        assert!((region.longitude_delta - MIN_REGION_DELTA_DEGREES).abs() < 1e-12);
    }

    #[test]
    fn large_parcel_is_padded() {
        let region = fit_region(&[pt(10.0, -84.0), pt(10.1, -83.8), pt(10.05, -83.9)]).unwrap();
        assert!((region.latitude - 10.05).abs() < 1e-9);
        assert!((region.longitude + 83.9).abs() < 1e-9);
        assert!((region.latitude_delta - 0.14).abs() < 1e-9);
        assert!((region.longitude_delta - 0.28).abs() < 1e-9);
    }
}
