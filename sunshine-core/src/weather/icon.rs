//! Condition code to icon mapping
//!
//! Condition codes follow the OpenWeatherMap groups:
//! <https://openweathermap.org/weather-conditions>

/// Artwork the face can show next to the temperatures
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WeatherIcon {
    Clear,
    LightClouds,
    Clouds,
    LightRain,
    Rain,
    Snow,
    Fog,
    Storm,
}

impl WeatherIcon {
    /// Icon used for codes the table does not know
    pub const DEFAULT: WeatherIcon = WeatherIcon::Clear;

    /// Map a condition code to its icon, falling back to [`Self::DEFAULT`]
    pub fn for_condition(condition_id: i32) -> Self {
        match condition_id {
            200..=232 => WeatherIcon::Storm,
            300..=321 => WeatherIcon::LightRain,
            500..=504 => WeatherIcon::Rain,
            511 => WeatherIcon::Snow,
            520..=531 => WeatherIcon::Rain,
            600..=622 => WeatherIcon::Snow,
            701..=761 => WeatherIcon::Fog,
            781 => WeatherIcon::Storm,
            800 => WeatherIcon::Clear,
            801 => WeatherIcon::LightClouds,
            802..=804 => WeatherIcon::Clouds,
            _ => Self::DEFAULT,
        }
    }

    /// Size of the source artwork in pixels (width, height)
    ///
    /// Cloud shapes are wider than they are tall; the rest are square.
    pub const fn native_size(self) -> (u16, u16) {
        match self {
            WeatherIcon::LightClouds | WeatherIcon::Clouds | WeatherIcon::Fog => (64, 48),
            _ => (48, 48),
        }
    }
}
