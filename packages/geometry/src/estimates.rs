//! Agronomic estimates derived from boundary metrics.
//!
//! The factors below are fixed field assumptions, not runtime
//! configuration. Two acre conversions coexist on purpose: the capture
//! screen shows a rounded-up headline figure while the parcel detail view
//! shows a decimal one.

use field_parcel_geometry_models::{DerivedStats, Metrics, PointValidity};

use crate::metrics::SQUARE_METERS_PER_HECTARE;

/// Acres per hectare for the rounded headline figure.
pub const HEADLINE_ACRES_PER_HECTARE: f64 = 2.47;

/// Acres per hectare for the decimal figure.
pub const PRECISE_ACRES_PER_HECTARE: f64 = 2.471;

/// Share of the parcel usable for intensive cultivation.
pub const USABLE_AREA_FRACTION: f64 = 0.8;

/// Planting density used for the capacity estimate.
pub const PLANTS_PER_HECTARE: f64 = 100.0;

/// Walking pace used for the traversal estimate.
pub const WALKING_METERS_PER_MINUTE: f64 = 100.0;

/// Meters in one kilometer.
const METERS_PER_KILOMETER: f64 = 1_000.0;

/// Rounds a non-negative figure up to a whole count.
///
/// Negative and non-finite values clamp to zero.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn ceil_count(value: f64) -> u64 {
    if value.is_finite() && value > 0.0 {
        value.ceil() as u64
    } else {
        0
    }
}

/// Area in square meters.
#[must_use]
pub fn area_square_meters(area_hectares: f64) -> f64 {
    area_hectares * SQUARE_METERS_PER_HECTARE
}

/// Whole acres, rounded up.
#[must_use]
pub fn headline_acres(area_hectares: f64) -> u64 {
    ceil_count(area_hectares * HEADLINE_ACRES_PER_HECTARE)
}

/// Decimal acres.
#[must_use]
pub fn precise_acres(area_hectares: f64) -> f64 {
    area_hectares * PRECISE_ACRES_PER_HECTARE
}

/// Hectares usable for intensive cultivation.
#[must_use]
pub fn usable_area_hectares(area_hectares: f64) -> f64 {
    area_hectares * USABLE_AREA_FRACTION
}

/// Estimated plant count, rounded up.
#[must_use]
pub fn estimated_plant_capacity(area_hectares: f64) -> u64 {
    ceil_count(area_hectares * PLANTS_PER_HECTARE)
}

/// Estimated minutes to walk `perimeter_meters`, rounded up.
#[must_use]
pub fn estimated_traversal_minutes(perimeter_meters: f64) -> u64 {
    ceil_count(perimeter_meters / WALKING_METERS_PER_MINUTE)
}

/// Computes every derived figure for `metrics`.
#[must_use]
pub fn derive_stats(metrics: &Metrics) -> DerivedStats {
    DerivedStats {
        area_square_meters: area_square_meters(metrics.area_hectares),
        headline_acres: headline_acres(metrics.area_hectares),
        precise_acres: precise_acres(metrics.area_hectares),
        usable_area_hectares: usable_area_hectares(metrics.area_hectares),
        estimated_plant_capacity: estimated_plant_capacity(metrics.area_hectares),
        estimated_traversal_minutes: estimated_traversal_minutes(metrics.perimeter_meters),
        perimeter_kilometers: metrics.perimeter_meters / METERS_PER_KILOMETER,
        point_validity: PointValidity::from_point_count(metrics.point_count),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_metrics_give_zero_estimates() {
        let stats = derive_stats(&Metrics::default());

        assert_eq!(stats.area_square_meters, 0.0);
        assert_eq!(stats.headline_acres, 0);
        assert_eq!(stats.precise_acres, 0.0);
        assert_eq!(stats.usable_area_hectares, 0.0);
        assert_eq!(stats.estimated_plant_capacity, 0);
        assert_eq!(stats.estimated_traversal_minutes, 0);
        assert_eq!(stats.point_validity, PointValidity::Insufficient);
    }

    #[test]
    fn fractional_figures_round_up() {
        let stats = derive_stats(&Metrics {
            area_hectares: 0.012,
            perimeter_meters: 441.4,
            point_count: 4,
        });

        assert_eq!(stats.headline_acres, 1);
        assert_eq!(stats.estimated_plant_capacity, 2);
        assert_eq!(stats.estimated_traversal_minutes, 5);
        assert_eq!(stats.point_validity, PointValidity::Valid);
    }

    #[test]
    fn acre_figures_use_separate_factors() {
        let area = 10.0;
        assert_eq!(headline_acres(area), 25);
        assert!((precise_acres(area) - 24.71).abs() < 1e-9);
    }

    #[test]
    fn area_conversions() {
        assert!((area_square_meters(1.5) - 15_000.0).abs() < 1e-9);
        assert!((usable_area_hectares(2.0) - 1.6).abs() < 1e-9);
    }

    #[test]
    fn perimeter_in_kilometers() {
        let stats = derive_stats(&Metrics {
            area_hectares: 0.0,
            perimeter_meters: 1_250.0,
            point_count: 2,
        });
        assert!((stats.perimeter_kilometers - 1.25).abs() < 1e-12);
        assert_eq!(stats.estimated_traversal_minutes, 13);
    }

    #[test]
    fn negative_or_nan_clamp_to_zero() {
        assert_eq!(estimated_traversal_minutes(-5.0), 0);
        assert_eq!(estimated_plant_capacity(f64::NAN), 0);
    }
}
