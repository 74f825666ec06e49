//! Configuration models and loaders for hyper_math front-ends.
//!
//! The library math never reads configuration. These settings feed the opt-in
//! validation checks, the tolerant comparison helpers, and the angle unit used
//! by command-line input and output.

use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

/// Top-level configuration document.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct HyperConfig {
    pub tolerances: Tolerances,
    pub angle_unit: AngleUnit,
}

/// Tolerances for the opt-in checks and tolerant comparisons.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
#[serde(default)]
pub struct Tolerances {
    /// Allowed `|‖v‖ - 1|` for unit vectors and rotation columns.
    pub unit_length: f64,
    /// Allowed `|a · b|` between columns of a rotation matrix.
    pub orthogonality: f64,
    /// Per-component tolerance for colinearity comparisons.
    pub colinearity: f64,
}

impl Default for Tolerances {
    fn default() -> Self {
        Self {
            unit_length: 1.0e-9,
            orthogonality: 1.0e-9,
            colinearity: 1.0e-12,
        }
    }
}

/// Unit used when reading and printing angles at the edges of the program.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AngleUnit {
    #[default]
    Degrees,
    Radians,
}

impl AngleUnit {
    /// Convert an angle given in this unit to radians.
    pub fn to_radians(self, value: f64) -> f64 {
        match self {
            Self::Degrees => value.to_radians(),
            Self::Radians => value,
        }
    }

    /// Convert radians to this unit.
    pub fn from_radians(self, value: f64) -> f64 {
        match self {
            Self::Degrees => value.to_degrees(),
            Self::Radians => value,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Degrees => "deg",
            Self::Radians => "rad",
        }
    }
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("tolerance `{name}` must be finite and positive, got {value}")]
    Invalid { name: &'static str, value: f64 },
}

/// Load a configuration file. `.toml` files are read as TOML, anything else as YAML.
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<HyperConfig, ConfigError> {
    let path = path.as_ref();
    let config: HyperConfig = if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        debug!(path = %path.display(), "loading TOML config");
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)?
    } else {
        debug!(path = %path.display(), "loading YAML config");
        let reader = File::open(path)?;
        serde_yaml::from_reader(reader)?
    };
    config.tolerances.validate()?;
    Ok(config)
}

impl Tolerances {
    /// Reject non-finite or non-positive tolerances.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("unit_length", self.unit_length),
            ("orthogonality", self.orthogonality),
            ("colinearity", self.colinearity),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::Invalid { name, value });
            }
        }
        Ok(())
    }
}
