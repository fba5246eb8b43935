//! Face color to panel color conversion

use embedded_graphics::pixelcolor::{BinaryColor, Rgb565};
use sunshine_core::traits::Color;

/// Monochrome panels light every pixel at or above mid grey
pub fn to_binary(color: Color) -> BinaryColor {
    if color.luma() >= 0x80 {
        BinaryColor::On
    } else {
        BinaryColor::Off
    }
}

/// Truncate to 5-6-5 bits
pub fn to_rgb565(color: Color) -> Rgb565 {
    Rgb565::new(color.red() >> 3, color.green() >> 2, color.blue() >> 3)
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::pixelcolor::RgbColor;

    #[test]
    fn test_binary_threshold() {
        assert_eq!(to_binary(Color::WHITE), BinaryColor::On);
        assert_eq!(to_binary(Color::BLACK), BinaryColor::Off);
        assert_eq!(to_binary(Color::rgb(0x20, 0x20, 0x20)), BinaryColor::Off);
    }

    #[test]
    fn test_rgb565_extremes() {
        assert_eq!(to_rgb565(Color::WHITE), Rgb565::WHITE);
        assert_eq!(to_rgb565(Color::BLACK), Rgb565::BLACK);
    }
}
