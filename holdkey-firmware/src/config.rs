//! Configuration loading
//!
//! The host stores the configuration as postcard binary data wherever it
//! keeps settings (usually a flash page). A missing or unreadable blob
//! falls back to the defaults so the display always comes up.

use serde::{Deserialize, Serialize};

use holdkey_core::TrackerConfig;
use holdkey_display::DisplayConfig;

/// Upper bound on an encoded configuration
pub const MAX_CONFIG_SIZE: usize = 16;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Stored bytes are not a valid configuration
    Decode,
    /// Output buffer too small
    Encode,
    /// Separator is a control character
    InvalidSeparator,
}

/// Complete Holdkey configuration
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct HoldkeyConfig {
    pub tracker: TrackerConfig,
    pub display: DisplayConfig,
}

impl HoldkeyConfig {
    /// Decode and validate a stored configuration
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: Self = postcard::from_bytes(bytes).map_err(|_| ConfigError::Decode)?;
        config.validate()?;
        Ok(config)
    }

    /// Encode into `buf`, returning the used part
    pub fn to_slice<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::Encode)
    }

    /// Check values the types alone don't rule out
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tracker.separator.is_control() {
            return Err(ConfigError::InvalidSeparator);
        }
        Ok(())
    }
}

/// Load the configuration, falling back to defaults
pub fn load_config(stored: Option<&[u8]>) -> HoldkeyConfig {
    let Some(bytes) = stored else {
        #[cfg(feature = "defmt")]
        defmt::info!("No stored configuration, using defaults");
        return HoldkeyConfig::default();
    };

    match HoldkeyConfig::from_bytes(bytes) {
        Ok(config) => {
            #[cfg(feature = "defmt")]
            defmt::info!("Loaded configuration: {}", config);
            config
        }
        Err(_err) => {
            #[cfg(feature = "defmt")]
            defmt::warn!("Stored configuration rejected ({}), using defaults", _err);
            HoldkeyConfig::default()
        }
    }
}

/// Encode the configuration into `buf` for the host to persist
///
/// Returns the used part of `buf`.
pub fn store_config<'a>(
    config: &HoldkeyConfig,
    buf: &'a mut [u8],
) -> Result<&'a [u8], ConfigError> {
    config.validate()?;
    Ok(config.to_slice(buf)?)
}
