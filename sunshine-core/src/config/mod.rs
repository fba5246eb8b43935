//! Configuration types
//!
//! Board-agnostic face configuration. The firmware authors it as TOML and
//! embeds it as postcard binary data.

pub mod locale;
pub mod style;

pub use locale::{Locale, LocaleId};
pub use style::{StyleTable, MAX_SAMPLE_LEN};

use crate::scheduler::DEFAULT_INTERVAL_MS;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Bytes are not a valid encoded config
    Deserialize,
    /// Output buffer too small
    Serialize,
    /// Decoded fine but the values cannot be used
    Invalid,
}

/// Everything that shapes the face
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FaceConfig {
    /// Redraw interval while interactive
    pub interval_ms: u32,
    pub locale: LocaleId,
    pub style: StyleTable,
}

impl Default for FaceConfig {
    fn default() -> Self {
        Self {
            interval_ms: DEFAULT_INTERVAL_MS,
            locale: LocaleId::default(),
            style: StyleTable::default(),
        }
    }
}

impl FaceConfig {
    /// Check the values are usable
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.interval_ms == 0 || !self.style.is_valid() {
            return Err(ConfigError::Invalid);
        }
        Ok(())
    }
}

#[cfg(feature = "serde")]
impl FaceConfig {
    /// Decode and validate a postcard blob
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ConfigError> {
        let config: FaceConfig =
            postcard::from_bytes(bytes).map_err(|_| ConfigError::Deserialize)?;
        config.validate()?;
        Ok(config)
    }

    /// Encode into `buf`, returning the used prefix
    pub fn to_slice<'a>(&self, buf: &'a mut [u8]) -> Result<&'a mut [u8], ConfigError> {
        postcard::to_slice(self, buf).map_err(|_| ConfigError::Serialize)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_validates() {
        assert_eq!(FaceConfig::default().validate(), Ok(()));
        assert_eq!(FaceConfig::default().interval_ms, 1000);
    }

    #[test]
    fn test_zero_interval_rejected() {
        let config = FaceConfig {
            interval_ms: 0,
            ..Default::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::Invalid));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_postcard_blob() {
        let config = FaceConfig {
            locale: LocaleId::German,
            ..Default::default()
        };
        let mut buf = [0u8; 256];
        let bytes = config.to_slice(&mut buf).unwrap();
        assert_eq!(FaceConfig::from_bytes(bytes), Ok(config));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_garbage_rejected() {
        assert_eq!(
            FaceConfig::from_bytes(&[0xFF; 3]),
            Err(ConfigError::Deserialize)
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_small_buffer() {
        let mut buf = [0u8; 4];
        assert_eq!(
            FaceConfig::default().to_slice(&mut buf).map(|b| b.len()),
            Err(ConfigError::Serialize)
        );
    }
}
