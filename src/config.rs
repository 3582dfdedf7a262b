//! Variant selection configuration (.artifact-map.toml)
//!
//! Layered the same way everywhere: built-in defaults, then the config
//! file, then CLI flags.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::Path;
use std::str::FromStr;

/// Default config file, relative to the working directory.
pub const DEFAULT_CONFIG_PATH: &str = ".artifact-map.toml";

/// Error types for config operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] io::Error),

    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    ValidationError(String),
}

/// Which artifact to deploy when a variant has both a bundle and APKs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    #[default]
    Aab,
    Apk,
}

impl FromStr for Preference {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "aab" => Ok(Self::Aab),
            "apk" => Ok(Self::Apk),
            other => Err(ConfigError::ValidationError(format!(
                "Invalid preference '{}': must be 'aab' or 'apk'",
                other
            ))),
        }
    }
}

/// Variant filters and deploy preference.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectionConfig {
    /// Gradle module (e.g. "app"); any module when unset
    #[serde(default)]
    pub module: Option<String>,

    /// Build type (e.g. "release"); any build type when unset
    #[serde(default)]
    pub build_type: Option<String>,

    /// Product flavour; any flavour when unset, "" for flavourless variants
    #[serde(default)]
    pub product_flavour: Option<String>,

    #[serde(default)]
    pub prefer: Preference,
}

/// Values given on the command line; set values win over the file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub module: Option<String>,
    pub build_type: Option<String>,
    pub product_flavour: Option<String>,
    pub prefer: Option<Preference>,
}

impl SelectionConfig {
    /// Load and parse config from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        Self::from_str(&contents)
    }

    /// Parse config from a TOML string
    pub fn from_str(s: &str) -> Result<Self, ConfigError> {
        let config: SelectionConfig = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Load from `path`, or from [`DEFAULT_CONFIG_PATH`] when it exists.
    ///
    /// A missing default file yields the built-in defaults; an explicitly
    /// given file must exist.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::from_file(path),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.exists() {
                    Self::from_file(default_path)
                } else {
                    Ok(Self::default())
                }
            }
        }
    }

    /// Apply CLI overrides and re-validate.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        if overrides.module.is_some() {
            self.module = overrides.module;
        }
        if overrides.build_type.is_some() {
            self.build_type = overrides.build_type;
        }
        if overrides.product_flavour.is_some() {
            self.product_flavour = overrides.product_flavour;
        }
        if let Some(prefer) = overrides.prefer {
            self.prefer = prefer;
        }
        self.validate()?;
        Ok(self)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Module and build type are single file name segments
        Self::validate_segment("module", self.module.as_deref())?;
        Self::validate_segment("build_type", self.build_type.as_deref())?;
        Ok(())
    }

    fn validate_segment(field: &str, value: Option<&str>) -> Result<(), ConfigError> {
        let Some(value) = value else {
            return Ok(());
        };
        if value.is_empty() {
            return Err(ConfigError::ValidationError(format!(
                "'{}' cannot be empty",
                field
            )));
        }
        if value.contains('-') {
            return Err(ConfigError::ValidationError(format!(
                "Invalid {} '{}': must not contain '-'",
                field, value
            )));
        }
        Ok(())
    }
}
