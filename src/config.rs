// model = "claude-opus-4-5"
// created = "2026-10-16"
// modified = "2026-10-16"
// driver = "Isaac Clayton"

//! Tuning knobs supplied by the caller.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Default list length at which the segment cache and concurrent search engage.
pub const DEFAULT_ACTIVATION_THRESHOLD: usize = 9;

/// Default spacing between segment anchors.
pub const DEFAULT_STRIDE: usize = 10;

/// List configuration. Missing fields take their defaults when deserialized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Minimum length at which the cache is maintained and `find` goes
    /// concurrent.
    pub activation_threshold: usize,
    /// Positions between consecutive cache anchors.
    pub stride: usize,
    /// Consecutive segments scanned by one search worker.
    pub segments_per_worker: usize,
}

impl Default for Config {
    fn default() -> Self {
        return Config {
            activation_threshold: DEFAULT_ACTIVATION_THRESHOLD,
            stride: DEFAULT_STRIDE,
            segments_per_worker: 1,
        };
    }
}

/// Error returned when a configuration cannot be loaded or is unusable.
#[derive(Debug)]
pub enum ConfigError {
    /// `stride` was zero.
    ZeroStride,
    /// `segments_per_worker` was zero.
    ZeroSegmentsPerWorker,
    /// The configuration file could not be read.
    Io(std::io::Error),
    /// The configuration was not valid JSON for this shape.
    Parse(serde_json::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return match self {
            ConfigError::ZeroStride => write!(f, "stride must be at least 1"),
            ConfigError::ZeroSegmentsPerWorker => {
                write!(f, "segments_per_worker must be at least 1")
            }
            ConfigError::Io(err) => write!(f, "reading config: {err}"),
            ConfigError::Parse(err) => write!(f, "parsing config: {err}"),
        };
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        return match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
            _ => None,
        };
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        return ConfigError::Io(err);
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        return ConfigError::Parse(err);
    }
}

impl Config {
    /// Reject values the list cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stride == 0 {
            return Err(ConfigError::ZeroStride);
        }
        if self.segments_per_worker == 0 {
            return Err(ConfigError::ZeroSegmentsPerWorker);
        }
        return Ok(());
    }

    /// Parse and validate a JSON document.
    pub fn from_json(text: &str) -> Result<Config, ConfigError> {
        let config: Config = serde_json::from_str(text)?;
        config.validate()?;
        return Ok(config);
    }

    /// Read, parse, and validate a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let text = std::fs::read_to_string(path)?;
        return Config::from_json(&text);
    }
}
