//! Weather state
//!
//! Holds the latest forecast pushed by the phone. There is no polling and no
//! history: each push replaces the previous sample outright.

pub mod icon;

use heapless::String;
use sunshine_protocol::datamap::MAX_TEXT_LEN;
use sunshine_protocol::WeatherPayload;

pub use icon::WeatherIcon;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Preformatted temperature text, e.g. `"75°"`
pub type Temperature = String<MAX_TEXT_LEN>;

/// One forecast as received
///
/// A sample is only drawable when it has both temperatures and a positive
/// condition code. Partial samples are still stored as-is so that they hide
/// the temperature block instead of leaving stale values on screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WeatherSample {
    pub high: Option<Temperature>,
    pub low: Option<Temperature>,
    pub condition_id: i32,
}

impl WeatherSample {
    /// The "nothing received yet" sentinel
    pub const fn empty() -> Self {
        Self {
            high: None,
            low: None,
            condition_id: 0,
        }
    }

    /// Build a sample from text temperatures; text longer than the wire
    /// limit is treated as absent
    pub fn new(high: Option<&str>, low: Option<&str>, condition_id: i32) -> Self {
        Self {
            high: high.and_then(|t| Temperature::try_from(t).ok()),
            low: low.and_then(|t| Temperature::try_from(t).ok()),
            condition_id,
        }
    }

    /// True when the temperature block may be drawn
    pub fn is_valid(&self) -> bool {
        self.condition_id > 0 && self.high.is_some() && self.low.is_some()
    }

    /// Both temperatures, only when the sample is valid
    pub fn temperatures(&self) -> Option<(&str, &str)> {
        if !self.is_valid() {
            return None;
        }
        match (&self.high, &self.low) {
            (Some(high), Some(low)) => Some((high.as_str(), low.as_str())),
            _ => None,
        }
    }
}

impl From<WeatherPayload> for WeatherSample {
    fn from(payload: WeatherPayload) -> Self {
        Self {
            high: payload.high,
            low: payload.low,
            condition_id: payload.weather_id,
        }
    }
}

/// Holder for the last received sample
#[derive(Debug, Clone, Default)]
pub struct WeatherState {
    current: WeatherSample,
    /// Number of samples received since start
    updates: u32,
}

impl WeatherState {
    /// Create a holder containing the empty sentinel
    pub const fn new() -> Self {
        Self {
            current: WeatherSample::empty(),
            updates: 0,
        }
    }

    /// Replace the stored sample; returns whether the new one is drawable
    pub fn update(&mut self, sample: WeatherSample) -> bool {
        self.current = sample;
        self.updates = self.updates.wrapping_add(1);
        self.current.is_valid()
    }

    /// Last stored sample, or the empty sentinel before the first update
    pub fn current(&self) -> &WeatherSample {
        &self.current
    }

    /// True once any sample has arrived, drawable or not
    pub fn has_received(&self) -> bool {
        self.updates > 0
    }
}
