use serde::Deserialize;

use crate::error::ConfigError;
use crate::types::ConvertOptions;

/// Staging capacity used when none is configured.
pub const DEFAULT_STAGING_CAPACITY: usize = 256;

/// Upper bound on the staging area; each conversion reserves this much stack.
pub const MAX_STAGING_CAPACITY: usize = 4096;

/// Narrow a host-supplied brightness offset to the i16 range, rejecting
/// anything outside it.
pub fn brightness_offset(offset: i32) -> Result<i16, ConfigError> {
    i16::try_from(offset).map_err(|_| ConfigError::BrightnessOutOfRange { offset })
}

/// Converter settings shared by every call made with it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ConverterConfig {
    /// Maximum decoded RGB bytes accepted per call.
    pub capacity: usize,
    /// Brightness offset applied after conversion. 0 skips the adjust stage.
    pub brightness: i16,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_STAGING_CAPACITY,
            brightness: 0,
        }
    }
}

impl ConverterConfig {
    /// Parse a JSON config, e.g. `{"capacity": 512, "brightness": -20}`.
    /// Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.capacity == 0 || self.capacity > MAX_STAGING_CAPACITY {
            return Err(ConfigError::CapacityOutOfRange {
                capacity: self.capacity,
                max: MAX_STAGING_CAPACITY,
            });
        }
        Ok(())
    }

    /// Overlay per-call host options. Fields left unset keep this config's values.
    pub fn with_options(&self, options: &ConvertOptions) -> Result<Self, ConfigError> {
        let mut merged = *self;
        if let Some(capacity) = options.capacity {
            merged.capacity = capacity as usize;
        }
        if let Some(brightness) = options.brightness {
            merged.brightness = brightness_offset(brightness)?;
        }
        merged.validate()?;
        Ok(merged)
    }
}
