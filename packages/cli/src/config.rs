//! Optional TOML settings for the save command.
//!
//! ```toml
//! soil_type = "franco arcilloso"
//! owner_uid = "abc123"
//! ```

use std::path::Path;

use field_parcel_draft::DEFAULT_SOIL_TYPE;
use serde::Deserialize;

use crate::CliError;

/// Settings read from the config file. Missing keys fall back to defaults.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    /// Soil type label attached to saved parcels.
    pub soil_type: String,
    /// Owner id used when `--owner` is not given.
    pub owner_uid: Option<String>,
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            soil_type: DEFAULT_SOIL_TYPE.to_string(),
            owner_uid: None,
        }
    }
}

/// Parses config file contents.
///
/// # Errors
///
/// Returns an error if `text` is not valid TOML for [`CliConfig`].
pub fn parse_config(text: &str) -> Result<CliConfig, CliError> {
    Ok(toml::from_str(text)?)
}

/// Loads the config at `path`, or the defaults when no path is given.
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed.
pub fn load_config(path: Option<&Path>) -> Result<CliConfig, CliError> {
    let Some(path) = path else {
        return Ok(CliConfig::default());
    };

    log::debug!("Loading config from {}", path.display());
    let text = std::fs::read_to_string(path)?;
    parse_config(&text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_uses_defaults() {
        assert_eq!(parse_config("").unwrap(), CliConfig::default());
        assert_eq!(CliConfig::default().soil_type, "franco arenoso");
    }

    #[test]
    fn overrides_soil_type() {
        let config = parse_config("soil_type = \"arcilloso\"\nowner_uid = \"u-7\"\n").unwrap();
        assert_eq!(config.soil_type, "arcilloso");
        assert_eq!(config.owner_uid.as_deref(), Some("u-7"));
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(matches!(
            parse_config("soil_type = "),
            Err(CliError::Config(_))
        ));
    }

    #[test]
    fn no_path_means_defaults() {
        assert_eq!(load_config(None).unwrap(), CliConfig::default());
    }
}
