//! Colors, sizes and layout offsets
//!
//! Vertical offsets are text baselines measured from the top of the
//! viewport. Horizontal positions are always derived from the viewport
//! center at draw time.

use heapless::String;

use crate::traits::{Color, LineStyle, TextStyle};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Maximum length of a layout sample string
pub const MAX_SAMPLE_LEN: usize = 12;

/// Immutable look of the face
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StyleTable {
    /// Interactive background fill; ambient is always black
    pub background: Color,
    /// Time, date and high temperature
    pub text: Color,
    /// Low temperature
    pub text_secondary: Color,
    /// Divider under the date
    pub accent: Color,

    pub time_size: u16,
    pub date_size: u16,
    pub high_size: u16,
    pub low_size: u16,

    /// Time baseline
    pub time_y: i32,
    /// Reference line for the date block
    pub date_y: i32,
    /// Date baseline, relative to `date_y`
    pub date_baseline_offset: i32,
    /// Divider position, relative to `date_y`
    pub divider_offset: i32,
    /// Divider extends this far either side of center
    pub divider_half_width: i32,
    pub divider_width: u16,
    /// Temperature baseline (also the icon's bottom edge)
    pub temp_y: i32,
    /// Space between the high and low temperature
    pub temp_gap: i32,
    /// Space between the low temperature and the icon
    pub icon_gap: i32,

    /// Widest interactive time, used to pin the time's left edge
    pub time_sample: String<MAX_SAMPLE_LEN>,
    /// Same for ambient
    pub time_sample_short: String<MAX_SAMPLE_LEN>,
}

impl Default for StyleTable {
    fn default() -> Self {
        Self {
            background: Color::rgb(0x03, 0xA9, 0xF4),
            text: Color::WHITE,
            text_secondary: Color::rgb(0xB3, 0xE5, 0xFC),
            accent: Color::rgb(0xB3, 0xE5, 0xFC),
            time_size: 40,
            date_size: 16,
            high_size: 24,
            low_size: 24,
            time_y: 96,
            date_y: 110,
            date_baseline_offset: 15,
            divider_offset: 30,
            divider_half_width: 40,
            divider_width: 1,
            temp_y: 190,
            temp_gap: 20,
            icon_gap: 10,
            time_sample: sample("00:00:00"),
            time_sample_short: sample("00:00"),
        }
    }
}

fn sample(text: &str) -> String<MAX_SAMPLE_LEN> {
    String::try_from(text).unwrap_or_default()
}

impl StyleTable {
    pub fn time_style(&self, anti_alias: bool) -> TextStyle {
        TextStyle {
            size: self.time_size,
            color: self.text,
            anti_alias,
        }
    }

    pub fn date_style(&self) -> TextStyle {
        TextStyle {
            size: self.date_size,
            color: self.text,
            anti_alias: true,
        }
    }

    pub fn high_style(&self) -> TextStyle {
        TextStyle {
            size: self.high_size,
            color: self.text,
            anti_alias: true,
        }
    }

    pub fn low_style(&self) -> TextStyle {
        TextStyle {
            size: self.low_size,
            color: self.text_secondary,
            anti_alias: true,
        }
    }

    pub fn divider_style(&self) -> LineStyle {
        LineStyle {
            color: self.accent,
            width: self.divider_width,
        }
    }

    /// True when every text size is drawable
    pub fn is_valid(&self) -> bool {
        self.time_size > 0
            && self.date_size > 0
            && self.high_size > 0
            && self.low_size > 0
            && self.divider_half_width >= 0
            && !self.time_sample.is_empty()
            && !self.time_sample_short.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        let style = StyleTable::default();
        assert!(style.is_valid());
        assert_eq!(style.time_sample, "00:00:00");
        assert_eq!(style.time_sample_short, "00:00");
    }

    #[test]
    fn test_zero_size_is_invalid() {
        let style = StyleTable {
            low_size: 0,
            ..Default::default()
        };
        assert!(!style.is_valid());
    }

    #[test]
    fn test_time_style_carries_anti_alias() {
        let style = StyleTable::default();
        assert!(style.time_style(true).anti_alias);
        assert!(!style.time_style(false).anti_alias);
        assert_eq!(style.low_style().color, style.text_secondary);
    }
}
