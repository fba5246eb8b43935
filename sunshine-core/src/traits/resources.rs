//! Artwork lookup

use super::canvas::Bitmap;
use crate::weather::WeatherIcon;

/// Source of the weather icon bitmaps
pub trait Resources {
    /// Bitmap for a condition code; unknown codes get the default icon
    fn icon(&self, condition_id: i32) -> Bitmap;
}

/// Built-in icon set at native artwork size
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardIcons;

impl Resources for StandardIcons {
    fn icon(&self, condition_id: i32) -> Bitmap {
        Bitmap::native(WeatherIcon::for_condition(condition_id))
    }
}
