//! Request body for creating a parcel in the remote service.
//!
//! Only the body is built here. Authentication, headers, and transport
//! belong to the caller.

use serde::Serialize;
use thiserror::Error;

use crate::SavePreparation;

/// Soil type label attached to every newly captured parcel.
pub const DEFAULT_SOIL_TYPE: &str = "franco arenoso";

/// Errors building a [`ParcelPayload`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayloadError {
    /// The parcel name was empty or whitespace.
    #[error("parcel name is required")]
    EmptyName,
}

/// Body of the create-parcel request.
///
/// Field names match the remote service's wire format.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParcelPayload {
    /// Id of the user who owns the parcel.
    #[serde(rename = "usuarioUid")]
    pub owner_uid: String,
    /// Trimmed display name.
    #[serde(rename = "nombre")]
    pub name: String,
    /// Closed boundary as a `GeoJSON` `Polygon`.
    #[serde(rename = "ubicacion")]
    pub location: geojson::Geometry,
    /// Area of the closed boundary in hectares.
    #[serde(rename = "areaHectareas")]
    pub area_hectares: f64,
    /// Soil type label.
    #[serde(rename = "tipoSuelo")]
    pub soil_type: String,
}

impl ParcelPayload {
    /// Builds the request body for a prepared boundary.
    ///
    /// # Errors
    ///
    /// Returns [`PayloadError::EmptyName`] if `name` is empty after trimming.
    pub fn new(
        prepared: &SavePreparation,
        name: &str,
        owner_uid: impl Into<String>,
        soil_type: impl Into<String>,
    ) -> Result<Self, PayloadError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PayloadError::EmptyName);
        }

        Ok(Self {
            owner_uid: owner_uid.into(),
            name: name.to_string(),
            location: prepared.geometry(),
            area_hectares: prepared.area_hectares,
            soil_type: soil_type.into(),
        })
    }
}
