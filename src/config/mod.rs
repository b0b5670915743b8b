//! Configuration management.
//!
//! Supports configuration from:
//! - TOML config files (`~/.config/ecv1/config.toml` by default)
//! - Environment variables
//! - CLI arguments (applied by the binary on top of both)

use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::codec::{EnvelopeCodec, MetadataPolicy, DEFAULT_LEVEL};
use crate::error::{EcError, Result};

/// Main configuration struct
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Codec configuration
    #[serde(default)]
    pub codec: CodecConfig,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path)
            .map_err(|e| EcError::Config(format!("Failed to read config file: {e}")))?;

        toml::from_str(&content)
            .map_err(|e| EcError::Config(format!("Failed to parse config: {e}")))
    }

    /// Apply the overrides that are set; unset ones leave the value alone
    pub fn with_overrides(mut self, overrides: &EnvOverrides) -> Self {
        if let Some(level) = overrides.level {
            self.codec.level = level;
        }
        if let Some(strict) = overrides.strict_metadata {
            self.codec.strict_metadata = strict;
        }
        self
    }

    /// Default config file location
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ecv1").join("config.toml"))
    }

    /// Load the explicit file (or the default file if it exists), then apply
    /// environment overrides.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        let file = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path().filter(|p| p.is_file()) {
                Some(path) => {
                    tracing::debug!("loading config from {}", path.display());
                    Self::from_file(path)?
                },
                None => Self::default(),
            },
        };

        Ok(file.with_overrides(&EnvOverrides::from_env()))
    }
}

/// Environment variable overrides, `None` where the variable is unset
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EnvOverrides {
    /// `ECV1_LEVEL`
    pub level: Option<u32>,
    /// `ECV1_STRICT_METADATA`
    pub strict_metadata: Option<bool>,
}

impl EnvOverrides {
    /// Read overrides from the process environment
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read overrides through `lookup`. Values that fail to parse are
    /// logged and treated as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            level: parse_var(&lookup, "ECV1_LEVEL"),
            strict_metadata: parse_var(&lookup, "ECV1_STRICT_METADATA"),
        }
    }
}

fn parse_var<T: FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(val) => Some(val),
        Err(_) => {
            tracing::warn!("ignoring {key}={raw:?}: not a valid value");
            None
        },
    }
}

/// Codec configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CodecConfig {
    /// gzip compression level (0-9)
    pub level: u32,

    /// Require header line 2 to be exactly `t=gz>b64;ct=json`
    pub strict_metadata: bool,
}

impl Default for CodecConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
            strict_metadata: false,
        }
    }
}

impl CodecConfig {
    /// Metadata policy selected by this config
    pub fn policy(&self) -> MetadataPolicy {
        if self.strict_metadata {
            MetadataPolicy::Strict
        } else {
            MetadataPolicy::Lenient
        }
    }

    /// Build a codec from this config
    pub fn codec(&self) -> EnvelopeCodec {
        EnvelopeCodec::new()
            .with_level(self.level)
            .with_policy(self.policy())
    }
}
