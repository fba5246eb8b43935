//! Drawing surface trait
//!
//! Coordinates are integer pixels with the origin at the top left. Text is
//! positioned by its left edge and baseline.

use crate::weather::WeatherIcon;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// 32-bit ARGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Color(pub u32);

impl Color {
    pub const BLACK: Color = Color(0xFF00_0000);
    pub const WHITE: Color = Color(0xFFFF_FFFF);

    /// Opaque color from 8-bit channels
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color(0xFF00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn red(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn green(self) -> u8 {
        (self.0 >> 8) as u8
    }

    pub const fn blue(self) -> u8 {
        self.0 as u8
    }

    /// Rec. 601 luma, 0-255
    pub const fn luma(self) -> u8 {
        let weighted = 299 * self.red() as u32 + 587 * self.green() as u32 + 114 * self.blue() as u32;
        (weighted / 1000) as u8
    }
}

/// How a run of text is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TextStyle {
    /// Nominal text height in pixels
    pub size: u16,
    pub color: Color,
    /// Smooth glyph edges; off on low-bit ambient panels
    pub anti_alias: bool,
}

/// How a line is stroked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct LineStyle {
    pub color: Color,
    pub width: u16,
}

/// A weather icon at a concrete pixel size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Bitmap {
    pub icon: WeatherIcon,
    pub width: u16,
    pub height: u16,
}

impl Bitmap {
    /// Bitmap of `icon` at its native artwork size
    pub const fn native(icon: WeatherIcon) -> Self {
        let (width, height) = icon.native_size();
        Self { icon, width, height }
    }

    /// Same artwork scaled to `height`, keeping the aspect ratio
    ///
    /// A zero-height source stays zero-sized.
    pub fn scaled_to_height(self, height: u16) -> Self {
        if self.height == 0 {
            return Self {
                width: 0,
                height: 0,
                ..self
            };
        }
        let width = u32::from(self.width) * u32::from(height) / u32::from(self.height);
        Self {
            width: width.min(u32::from(u16::MAX)) as u16,
            height,
            ..self
        }
    }
}

/// Text measurement, the only thing layout needs from a canvas
pub trait TextMetrics {
    /// Width in pixels `text` would occupy when drawn with `style`
    fn measure_text(&self, text: &str, style: &TextStyle) -> u32;
}

/// A surface the face can be drawn onto
pub trait Canvas: TextMetrics {
    /// Backend failure (bus error, out of memory, ...)
    type Error;

    /// Cover the whole surface with `color`
    fn fill_background(&mut self, color: Color) -> Result<(), Self::Error>;

    /// Draw `text` with its left edge at `x` and baseline at `y`
    fn draw_text(&mut self, text: &str, x: i32, y: i32, style: &TextStyle)
        -> Result<(), Self::Error>;

    /// Stroke a straight line between two points
    fn draw_line(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        style: &LineStyle,
    ) -> Result<(), Self::Error>;

    /// Draw `bitmap` with its top left corner at (`x`, `y`)
    fn draw_bitmap(&mut self, bitmap: &Bitmap, x: i32, y: i32) -> Result<(), Self::Error>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_channels() {
        let c = Color::rgb(0x03, 0xA9, 0xF4);
        assert_eq!(c.alpha(), 0xFF);
        assert_eq!((c.red(), c.green(), c.blue()), (0x03, 0xA9, 0xF4));
        assert_eq!(Color::BLACK.luma(), 0);
        assert_eq!(Color::WHITE.luma(), 255);
    }

    #[test]
    fn test_scale_keeps_aspect() {
        let wide = Bitmap::native(WeatherIcon::Clouds);
        let scaled = wide.scaled_to_height(24);
        assert_eq!((scaled.width, scaled.height), (32, 24));

        let square = Bitmap::native(WeatherIcon::Rain).scaled_to_height(30);
        assert_eq!((square.width, square.height), (30, 30));
    }

    #[test]
    fn test_scale_zero_height_source() {
        let empty = Bitmap {
            icon: WeatherIcon::Clear,
            width: 10,
            height: 0,
        };
        let scaled = empty.scaled_to_height(20);
        assert_eq!((scaled.width, scaled.height), (0, 0));
    }
}
