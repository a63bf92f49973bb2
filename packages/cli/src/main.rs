#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for measuring captured parcel boundaries.
//!
//! Replays a CSV of captured points through a fresh
//! [`ParcelDraftController`] exactly as the capture screen would, then
//! prints the live statistics, the save payload, or a summary of a stored
//! parcel polygon.

mod config;
mod input;

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use field_parcel_draft::{ParcelDraftController, ParcelPayload, PayloadError, ValidationError};
use field_parcel_geometry::{GeometryError, fit_region, ring, summarize_ring};
use field_parcel_geometry_models::{DerivedStats, GeoPoint, Metrics};
use thiserror::Error;

/// Errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    /// Reading an input file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The points CSV was malformed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// The config file was malformed.
    #[error("Config error: {0}")]
    Config(#[from] toml::de::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A stored parcel geometry could not be read.
    #[error("Geometry error: {0}")]
    Geometry(#[from] GeometryError),

    /// The boundary cannot be saved.
    #[error("Cannot save parcel: {0}")]
    Validation(#[from] ValidationError),

    /// The save payload could not be built.
    #[error("Cannot save parcel: {0}")]
    Payload(#[from] PayloadError),

    /// Neither `--owner` nor the config file named an owner.
    #[error("An owner id is required (pass --owner or set owner_uid in the config file)")]
    MissingOwner,
}

#[derive(Parser)]
#[command(name = "field_parcel", about = "Parcel boundary measurement tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay captured points and print live area, perimeter, and estimates
    Measure {
        /// CSV file with `latitude` and `longitude` columns
        points: PathBuf,
    },
    /// Close and validate a boundary, then print the create-parcel request body
    Save {
        /// CSV file with `latitude` and `longitude` columns
        points: PathBuf,
        /// Parcel name
        #[arg(long)]
        name: String,
        /// Owner id (overrides `owner_uid` in the config file)
        #[arg(long)]
        owner: Option<String>,
        /// Soil type label (overrides `soil_type` in the config file)
        #[arg(long)]
        soil_type: Option<String>,
        /// TOML config file
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Summarize a stored parcel `GeoJSON` polygon
    Inspect {
        /// File holding a `GeoJSON` `Polygon` geometry or feature
        parcel: PathBuf,
    },
}

fn replay(points: &[GeoPoint]) -> ParcelDraftController {
    let mut controller = ParcelDraftController::new();
    for point in points {
        controller.add_point(*point);
    }
    controller
}

fn print_stats(metrics: &Metrics, stats: &DerivedStats) {
    println!("Points:            {} ({})", metrics.point_count, stats.point_validity);
    println!(
        "Area:              {:.4} ha ({:.0} m²)",
        metrics.area_hectares, stats.area_square_meters
    );
    println!(
        "Perimeter:         {:.2} km ({:.0} m)",
        stats.perimeter_kilometers, metrics.perimeter_meters
    );
    println!(
        "Acres:             ~{} (precise {:.2})",
        stats.headline_acres, stats.precise_acres
    );
    println!("Usable area:       {:.2} ha", stats.usable_area_hectares);
    println!("Plant capacity:    ~{}", stats.estimated_plant_capacity);
    println!("Walk the boundary: ~{} min", stats.estimated_traversal_minutes);
}

fn measure(path: &Path) -> Result<(), CliError> {
    let controller = replay(&input::read_points_file(path)?);

    println!("Draft state:       {}", controller.state());
    print_stats(&controller.current_metrics(), &controller.current_estimates());
    Ok(())
}

fn save(
    path: &Path,
    name: &str,
    owner: Option<String>,
    soil_type: Option<String>,
    config: Option<&Path>,
) -> Result<(), CliError> {
    let config = config::load_config(config)?;
    let owner = owner.or(config.owner_uid).ok_or(CliError::MissingOwner)?;
    let soil_type = soil_type.unwrap_or(config.soil_type);

    let controller = replay(&input::read_points_file(path)?);
    let prepared = controller.prepare_for_save()?;
    let payload = ParcelPayload::new(&prepared, name, owner, soil_type)?;

    println!("{}", serde_json::to_string_pretty(&payload)?);
    Ok(())
}

fn inspect(path: &Path) -> Result<(), CliError> {
    let text = std::fs::read_to_string(path)?;
    let points = ring::points_from_geojson_str(&text)?;
    let summary = summarize_ring(&points);

    print_stats(&summary.metrics, &summary.stats);
    if let Some(region) = fit_region(&points) {
        println!(
            "Map region:        center ({:.6}, {:.6}), span {:.4}° x {:.4}°",
            region.latitude, region.longitude, region.latitude_delta, region.longitude_delta
        );
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Measure { points } => measure(&points)?,
        Commands::Save {
            points,
            name,
            owner,
            soil_type,
            config,
        } => save(&points, &name, owner, soil_type, config.as_deref())?,
        Commands::Inspect { parcel } => inspect(&parcel)?,
    }

    Ok(())
}
