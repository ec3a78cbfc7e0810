use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tessera_core::constants::DEFAULT_MAP_SIZE;
use tessera_persist::Encoding;

use crate::error::CliError;

/// Payload encoding as written in config files and on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MapEncoding {
    #[default]
    F32,
    Rgb8,
}

impl MapEncoding {
    pub fn parse(value: &str) -> Result<Self, CliError> {
        match value.to_ascii_lowercase().as_str() {
            "f32" => Ok(MapEncoding::F32),
            "rgb8" => Ok(MapEncoding::Rgb8),
            other => Err(CliError::Usage(format!(
                "unknown encoding '{other}' (expected f32 or rgb8)"
            ))),
        }
    }
}

impl From<MapEncoding> for Encoding {
    fn from(value: MapEncoding) -> Self {
        match value {
            MapEncoding::F32 => Encoding::F32,
            MapEncoding::Rgb8 => Encoding::Rgb8,
        }
    }
}

/// Generator settings, loadable from RON.
///
/// Every field has a default, so a config file only names what it changes:
///
/// ```ron
/// (width: 160, height: 90, seed: Some("my_secret_seed_123"), encoding: Rgb8)
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapConfig {
    pub width: i64,
    pub height: i64,
    pub seed: Option<String>,
    pub output_dir: PathBuf,
    pub encoding: MapEncoding,
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_MAP_SIZE as i64,
            height: DEFAULT_MAP_SIZE as i64,
            seed: None,
            output_dir: PathBuf::from("offsets"),
            encoding: MapEncoding::F32,
        }
    }
}

impl MapConfig {
    /// The seed, or [`CliError::MissingSeed`] if none was configured.
    pub fn seed(&self) -> Result<&str, CliError> {
        match self.seed.as_deref() {
            Some(seed) if !seed.is_empty() => Ok(seed),
            _ => Err(CliError::MissingSeed),
        }
    }
}

/// Parse a config from a RON string.
pub fn load_config_from_str(ron_str: &str) -> Result<MapConfig, CliError> {
    let options = ron::Options::default();
    options
        .from_str(ron_str)
        .map_err(|e| CliError::ConfigParseError(e.to_string()))
}

/// Read and parse a RON config file.
pub fn load_config(path: &Path) -> Result<MapConfig, CliError> {
    let contents = std::fs::read_to_string(path)?;
    let config = load_config_from_str(&contents)?;
    log::info!("Loaded config from {}", path.display());
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = load_config_from_str("(seed: None)").expect("parse");
        assert_eq!(config, MapConfig::default());
        assert_eq!(config.width, 80);
        assert_eq!(config.height, 80);
        assert!(matches!(config.seed(), Err(CliError::MissingSeed)));
    }

    #[test]
    fn test_full_config() {
        let config = load_config_from_str(
            r#"(
                width: 160,
                height: 90,
                seed: Some("my_secret_seed_123"),
                output_dir: "maps",
                encoding: Rgb8,
            )"#,
        )
        .expect("parse");
        assert_eq!(config.width, 160);
        assert_eq!(config.height, 90);
        assert_eq!(config.seed().expect("seed"), "my_secret_seed_123");
        assert_eq!(config.output_dir, PathBuf::from("maps"));
        assert_eq!(config.encoding, MapEncoding::Rgb8);
    }

    #[test]
    fn test_parse_error() {
        assert!(matches!(
            load_config_from_str("(width: \"wide\")"),
            Err(CliError::ConfigParseError(_))
        ));
    }

    #[test]
    fn test_empty_seed_is_missing() {
        let config = MapConfig {
            seed: Some(String::new()),
            ..MapConfig::default()
        };
        assert!(matches!(config.seed(), Err(CliError::MissingSeed)));
    }

    #[test]
    fn test_encoding_names() {
        assert_eq!(MapEncoding::parse("f32").expect("f32"), MapEncoding::F32);
        assert_eq!(MapEncoding::parse("RGB8").expect("rgb8"), MapEncoding::Rgb8);
        assert!(MapEncoding::parse("png").is_err());
        assert_eq!(Encoding::from(MapEncoding::Rgb8), Encoding::Rgb8);
    }
}
