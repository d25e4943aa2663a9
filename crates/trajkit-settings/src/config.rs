//! Configuration for trajectory generation and export
//!
//! Provides configuration file handling and validation.
//! Supports JSON and TOML file formats; the default location is the
//! platform configuration directory.
//!
//! Configuration is organized into one section per generator plus an export
//! section. Missing sections and fields fall back to the generator defaults.

use crate::error::{ConfigError, SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;
use trajkit_export::{validate_delimiter, CsvExporter, DEFAULT_DELIMITER};
use trajkit_generators::{
    CircleStackParameters, CompressionParameters, ParameterResult, SpiralParameters,
    SpiralStackParameters,
};

/// Export settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Directory receiving the per-axis files
    pub output_directory: PathBuf,
    /// Separator between values in a row
    pub delimiter: char,
    /// Base name for circle stack exports
    pub circle_stack_name: String,
    /// Base name for compression exports
    pub compression_name: String,
    /// Base name for single spiral exports
    pub spiral_name: String,
    /// Base name for spiral stack exports
    pub spiral_stack_name: String,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            output_directory: PathBuf::from("Export"),
            delimiter: DEFAULT_DELIMITER,
            circle_stack_name: "Circle Set".to_string(),
            compression_name: "Test Set".to_string(),
            spiral_name: "Spiral".to_string(),
            spiral_stack_name: "Spiral Set".to_string(),
        }
    }
}

impl ExportSettings {
    /// Builds an exporter from these settings.
    pub fn exporter(&self) -> SettingsResult<CsvExporter> {
        Ok(CsvExporter::new(&self.output_directory).with_delimiter(self.delimiter)?)
    }

    fn validate(&self) -> SettingsResult<()> {
        validate_delimiter(self.delimiter)?;

        let names = [
            ("export.circle_stack_name", &self.circle_stack_name),
            ("export.compression_name", &self.compression_name),
            ("export.spiral_name", &self.spiral_name),
            ("export.spiral_stack_name", &self.spiral_stack_name),
        ];
        for (key, name) in names {
            if name.trim().is_empty() {
                return Err(ConfigError::InvalidSetting {
                    key: key.to_string(),
                    reason: "must not be empty".to_string(),
                }
                .into());
            }
            if name.contains(['/', '\\']) {
                return Err(ConfigError::InvalidSetting {
                    key: key.to_string(),
                    reason: "must not contain path separators".to_string(),
                }
                .into());
            }
        }
        Ok(())
    }
}

/// Complete application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Layered concentric circles
    pub circle_stack: CircleStackParameters,
    /// Single spiral
    pub spiral: SpiralParameters,
    /// Stacked spirals
    pub spiral_stack: SpiralStackParameters,
    /// Compression move
    pub compression: CompressionParameters,
    /// Export settings
    pub export: ExportSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Format {
    Json,
    Toml,
}

impl Format {
    fn from_path(path: &Path) -> SettingsResult<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            other => Err(ConfigError::UnsupportedFormat(format!(
                "{} (config file must be .json or .toml)",
                other.unwrap_or("no extension")
            ))
            .into()),
        }
    }
}

impl Config {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config file location: `<config dir>/trajkit/config.toml`
    pub fn default_path() -> SettingsResult<PathBuf> {
        let base = dirs::config_dir().ok_or_else(|| {
            ConfigError::ConfigDirectory("platform config directory not found".to_string())
        })?;
        Ok(base.join("trajkit").join("config.toml"))
    }

    /// Load config from file (JSON or TOML)
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let format = Format::from_path(path)?;
        let content = std::fs::read_to_string(path)?;

        let config: Self = match format {
            Format::Json => serde_json::from_str(&content)?,
            Format::Toml => toml::from_str(&content)?,
        };

        config.validate()?;
        debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        let format = Format::from_path(path)?;
        self.validate()?;

        let content = match format {
            Format::Json => serde_json::to_string_pretty(self)?,
            Format::Toml => toml::to_string_pretty(self)?,
        };

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        debug!("Saved configuration to {}", path.display());
        Ok(())
    }

    /// Validate configuration with the generators' strict checks
    pub fn validate(&self) -> SettingsResult<()> {
        section("circle_stack", self.circle_stack.validate())?;
        section("spiral", self.spiral.validate())?;
        section("spiral_stack", self.spiral_stack.validate())?;
        section("compression", self.compression.validate())?;
        self.export.validate()
    }
}

fn section(name: &str, result: ParameterResult<()>) -> SettingsResult<()> {
    result.map_err(|source| SettingsError::Parameter {
        section: name.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use trajkit_export::ExportError;
    use trajkit_generators::ParameterError;

    #[test]
    fn test_defaults_match_generators() {
        let config = Config::new();
        assert_eq!(config.circle_stack.diameter, 0.04);
        assert_eq!(config.circle_stack.height, 0.04);
        assert_eq!(config.circle_stack.point_density, 0.001);
        assert_eq!(config.circle_stack.circles_per_layer, 4);
        assert_eq!(config.circle_stack.layers, 4);
        assert_eq!(config.spiral.point_count, 1000);
        assert_eq!(config.export.delimiter, ',');
        assert_eq!(config.export.output_directory, PathBuf::from("Export"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_toml_roundtrip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::new();
        config.circle_stack.layers = 6;
        config.export.delimiter = ';';
        config.save_to_file(&path).unwrap();

        let loaded = Config::load_from_file(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_json_roundtrip_creates_parent() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("config.json");

        let mut config = Config::new();
        config.spiral.theta_start = 1.5;
        config.save_to_file(&path).unwrap();

        assert_eq!(Config::load_from_file(&path).unwrap(), config);
    }

    #[test]
    fn test_partial_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("partial.toml");
        std::fs::write(&path, "[circle_stack]\nlayers = 2\n").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.circle_stack.layers, 2);
        assert_eq!(config.circle_stack.circles_per_layer, 4);
        assert_eq!(config.compression, CompressionParameters::default());
    }

    #[test]
    fn test_unsupported_extension() {
        let err = Config::new()
            .save_to_file(Path::new("config.yaml"))
            .unwrap_err();
        assert!(matches!(
            err,
            SettingsError::Config(ConfigError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_load_rejects_invalid_parameters() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "[compression]\npoint_density = 0.0\n").unwrap();

        match Config::load_from_file(&path) {
            Err(SettingsError::Parameter { section, source }) => {
                assert_eq!(section, "compression");
                assert!(matches!(source, ParameterError::NotPositive { .. }));
            }
            other => panic!("expected parameter error, got {:?}", other),
        }
    }

    #[test]
    fn test_export_validation() {
        let mut config = Config::new();
        config.export.delimiter = '.';
        assert!(matches!(
            config.validate(),
            Err(SettingsError::Export(ExportError::InvalidDelimiter('.')))
        ));

        let mut config = Config::new();
        config.export.spiral_name = "  ".to_string();
        assert!(matches!(
            config.validate(),
            Err(SettingsError::Config(ConfigError::InvalidSetting { .. }))
        ));

        let mut config = Config::new();
        config.export.compression_name = "out/set".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_exporter_from_settings() {
        let settings = ExportSettings {
            delimiter: '\t',
            ..Default::default()
        };
        let exporter = settings.exporter().unwrap();
        assert_eq!(exporter.delimiter(), '\t');
        assert_eq!(exporter.output_directory(), Path::new("Export"));
    }

    #[test]
    fn test_default_path() {
        if let Ok(path) = Config::default_path() {
            assert!(path.ends_with("trajkit/config.toml"));
        }
    }
}
