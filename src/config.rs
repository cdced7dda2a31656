use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Top-level Nereus configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct NereusConfig {
    /// I/O settings.
    #[serde(default)]
    pub io: IoToml,

    /// Region mask settings.
    #[serde(default)]
    pub mask: MaskToml,

    /// Correlation settings.
    #[serde(default)]
    pub correlate: CorrelateToml,
}

impl NereusConfig {
    /// Load a configuration file, falling back to defaults when the path
    /// does not exist (so the default `nereus.toml` is optional).
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        toml::from_str(&toml_str).context("failed to parse TOML config")
    }
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct IoToml {
    /// Directory for derived output files (default: current directory).
    pub output_dir: Option<PathBuf>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MaskToml {
    /// Offshore distance threshold in kilometers.
    #[serde(default = "default_offshore_km")]
    pub offshore_km: f64,
}

impl Default for MaskToml {
    fn default() -> Self {
        Self {
            offshore_km: default_offshore_km(),
        }
    }
}

fn default_offshore_km() -> f64 {
    nereus_grid::DEFAULT_OFFSHORE_KM
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CorrelateToml {
    /// Minimum overlap length after smoothing and lagging.
    #[serde(default = "default_min_overlap")]
    pub min_overlap: usize,
}

impl Default for CorrelateToml {
    fn default() -> Self {
        Self {
            min_overlap: default_min_overlap(),
        }
    }
}

fn default_min_overlap() -> usize {
    nereus_align::DEFAULT_MIN_OVERLAP
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = NereusConfig::default();
        assert!(config.io.output_dir.is_none());
        assert_eq!(config.mask.offshore_km, 800.0);
        assert_eq!(config.correlate.min_overlap, 3);
    }

    #[test]
    fn parse_partial_toml() {
        let config: NereusConfig = toml::from_str(
            r#"
            [mask]
            offshore_km = 400.0
            "#,
        )
        .expect("valid TOML");
        assert_eq!(config.mask.offshore_km, 400.0);
        assert_eq!(config.correlate.min_overlap, 3);
    }

    #[test]
    fn unknown_fields_rejected() {
        let result: std::result::Result<NereusConfig, _> = toml::from_str(
            r#"
            [mask]
            offshore = 400.0
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = NereusConfig::load(Path::new("/nonexistent/nereus.toml")).unwrap();
        assert_eq!(config.mask.offshore_km, 800.0);
    }
}
