//! Render configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Default sub-samples per pixel axis (2 x 2 antialiasing).
pub const DEFAULT_SUBSAMPLES: u32 = 2;

/// Default ambient occlusion grid size (8 x 8 = 64 rays per hit).
pub const DEFAULT_AO_SAMPLES: u32 = 8;

/// Errors that can occur while loading a render configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid config JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid render config: {0}")]
    Invalid(String),
}

/// Result type for configuration loading.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Render configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Sub-samples per pixel axis for antialiasing
    pub subsamples: u32,
    /// Ambient occlusion samples per hemisphere axis
    pub ao_samples: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 256,
            height: 256,
            subsamples: DEFAULT_SUBSAMPLES,
            ao_samples: DEFAULT_AO_SAMPLES,
        }
    }
}

impl RenderConfig {
    /// Set image resolution.
    pub fn with_resolution(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    /// Set quality settings.
    pub fn with_quality(mut self, subsamples: u32, ao_samples: u32) -> Self {
        self.subsamples = subsamples;
        self.ao_samples = ao_samples;
        self
    }

    /// Number of bytes in an RGB buffer for this resolution.
    pub fn buffer_len(&self) -> usize {
        self.width as usize * self.height as usize * 3
    }

    /// Check that every count is non-zero.
    pub fn validate(&self) -> ConfigResult<()> {
        let fields = [
            ("width", self.width),
            ("height", self.height),
            ("subsamples", self.subsamples),
            ("ao_samples", self.ao_samples),
        ];

        match fields.iter().find(|(_, value)| *value == 0) {
            Some((name, _)) => Err(ConfigError::Invalid(format!("{name} must be at least 1"))),
            None => Ok(()),
        }
    }

    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;

        log::debug!("Loaded render config from {}: {:?}", path.display(), config);
        Ok(config)
    }
}
