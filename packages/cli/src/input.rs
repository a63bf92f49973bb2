//! Reads captured boundary points from CSV.
//!
//! The file needs `latitude` and `longitude` columns; any other columns
//! are ignored. Rows are returned in file order, which is the order the
//! points were captured.

use std::io::Read;

use field_parcel_geometry_models::GeoPoint;
use serde::Deserialize;

use crate::CliError;

#[derive(Debug, Deserialize)]
struct PointRow {
    latitude: f64,
    longitude: f64,
}

/// Reads points from CSV, skipping rows with out-of-range coordinates.
///
/// # Errors
///
/// Returns an error if the CSV is malformed or a row is missing a
/// coordinate column.
pub fn read_points<R: Read>(reader: R) -> Result<Vec<GeoPoint>, CliError> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut points = Vec::new();

    for (index, row) in csv_reader.deserialize::<PointRow>().enumerate() {
        let row = row?;
        match GeoPoint::new(row.latitude, row.longitude) {
            Ok(point) => points.push(point),
            Err(e) => log::warn!("Skipping row {}: {e}", index + 1),
        }
    }

    Ok(points)
}

/// Reads points from the CSV file at `path`.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or parsed.
pub fn read_points_file(path: &std::path::Path) -> Result<Vec<GeoPoint>, CliError> {
    let file = std::fs::File::open(path)?;
    let points = read_points(file)?;
    log::info!("Read {} point(s) from {}", points.len(), path.display());
    Ok(points)
}
