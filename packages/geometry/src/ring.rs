//! Conversion between boundary point sequences and `GeoJSON` polygons.
//!
//! Stored parcels carry their boundary as a `GeoJSON` `Polygon` whose
//! single ring holds `[lon, lat]` positions. Only the outer ring is read;
//! holes are not part of the parcel model.

use field_parcel_geometry_models::GeoPoint;
use geojson::{GeoJson, Geometry, Value};

use crate::GeometryError;

/// Builds a `GeoJSON` `Polygon` geometry from a ring of points.
///
/// Points are written in order, as given. Callers persisting a boundary
/// should pass a ring produced by [`crate::close`].
#[must_use]
pub fn ring_to_geometry(ring: &[GeoPoint]) -> Geometry {
    let positions = ring.iter().map(GeoPoint::to_position).collect();
    Geometry::new(Value::Polygon(vec![positions]))
}

/// Reads the outer ring of a `GeoJSON` `Polygon` geometry as points.
///
/// # Errors
///
/// * [`GeometryError::UnsupportedGeometry`] if the geometry is not a polygon
/// * [`GeometryError::MalformedPosition`] if a position has fewer than two
///   ordinates
/// * [`GeometryError::InvalidCoordinate`] if a position is out of range
pub fn points_from_geometry(geometry: &Geometry) -> Result<Vec<GeoPoint>, GeometryError> {
    let Value::Polygon(rings) = &geometry.value else {
        return Err(GeometryError::UnsupportedGeometry {
            geometry_type: value_type_name(&geometry.value).to_string(),
        });
    };

    let Some(outer) = rings.first() else {
        return Ok(Vec::new());
    };

    if rings.len() > 1 {
        log::warn!("Ignoring {} interior ring(s) in parcel polygon", rings.len() - 1);
    }

    outer
        .iter()
        .map(|position| {
            if position.len() < 2 {
                return Err(GeometryError::MalformedPosition {
                    ordinates: position.len(),
                });
            }
            Ok(GeoPoint::new(position[1], position[0])?)
        })
        .collect()
}

/// Parses `GeoJSON` text holding a polygon geometry (bare, or wrapped in a
/// single feature) into its outer ring points.
///
/// # Errors
///
/// Returns an error if the text is not valid `GeoJSON`, holds anything other
/// than a polygon, or contains invalid positions.
pub fn points_from_geojson_str(text: &str) -> Result<Vec<GeoPoint>, GeometryError> {
    let geojson: GeoJson = text.parse()?;

    match geojson {
        GeoJson::Geometry(geometry) => points_from_geometry(&geometry),
        GeoJson::Feature(feature) => feature.geometry.as_ref().map_or_else(
            || {
                Err(GeometryError::UnsupportedGeometry {
                    geometry_type: "Feature without geometry".to_string(),
                })
            },
            points_from_geometry,
        ),
        GeoJson::FeatureCollection(_) => Err(GeometryError::UnsupportedGeometry {
            geometry_type: "FeatureCollection".to_string(),
        }),
    }
}

const fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Point(_) => "Point",
        Value::MultiPoint(_) => "MultiPoint",
        Value::LineString(_) => "LineString",
        Value::MultiLineString(_) => "MultiLineString",
        Value::Polygon(_) => "Polygon",
        Value::MultiPolygon(_) => "MultiPolygon",
        Value::GeometryCollection(_) => "GeometryCollection",
    }
}
