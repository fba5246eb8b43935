//! Events delivered to the face controller

use crate::scheduler::TickToken;
use crate::weather::WeatherSample;

/// Everything that can happen to a face
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    // Lifecycle events
    /// Face instantiated by the host
    Created,
    /// Face torn down; nothing is handled afterwards
    Destroyed,

    // Display events
    /// Face shown or hidden
    VisibilityChanged(bool),
    /// Entered (`true`) or left ambient mode
    AmbientModeChanged(bool),
    /// Display capabilities reported by the host
    PropertiesChanged { low_bit_ambient: bool },

    // Time events
    /// System timezone changed
    TimezoneChanged,
    /// Host's once-a-minute tick; redraws only while visible
    TimeTick,
    /// A tick scheduled by the render scheduler came due
    Tick(TickToken),

    // Data layer events
    /// Push channel connected; start listening for data items
    DataLayerConnected,
    /// Push channel connection temporarily lost
    DataLayerSuspended,
    /// Push channel could not connect; carries the host's error code
    DataLayerFailed(i32),
    /// The phone wrote a new forecast
    WeatherPushReceived(WeatherSample),
}
