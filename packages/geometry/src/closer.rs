//! Ring closure for boundary point sequences.

use std::borrow::Cow;

use field_parcel_geometry_models::GeoPoint;

/// Returns `points` as a closed ring (first point repeated at the end).
///
/// First and last are compared by exact coordinate equality. A sequence
/// that is already closed, or empty, is borrowed back unchanged; otherwise
/// a new sequence is built with a copy of the first point appended. The
/// input is never mutated.
#[must_use]
pub fn close(points: &[GeoPoint]) -> Cow<'_, [GeoPoint]> {
    match (points.first(), points.last()) {
        (Some(first), Some(last)) if first != last => {
            let mut ring = Vec::with_capacity(points.len() + 1);
            ring.extend_from_slice(points);
            ring.push(*first);
            Cow::Owned(ring)
        }
        _ => Cow::Borrowed(points),
    }
}

/// Whether `points` is non-empty and its first and last points coincide.
#[must_use]
pub fn is_closed(points: &[GeoPoint]) -> bool {
    matches!((points.first(), points.last()), (Some(first), Some(last)) if first == last)
}
