//! Text sizes to mono fonts
//!
//! Latin-1 glyph sets so `°` and accented month names draw as themselves.

use embedded_graphics::mono_font::iso_8859_1::{
    FONT_10X20, FONT_4X6, FONT_5X8, FONT_6X10, FONT_7X13, FONT_9X15,
};
use embedded_graphics::mono_font::MonoFont;

/// Available fonts, smallest first
static FONTS: [&MonoFont<'static>; 6] = [
    &FONT_4X6,
    &FONT_5X8,
    &FONT_6X10,
    &FONT_7X13,
    &FONT_9X15,
    &FONT_10X20,
];

/// Largest font no taller than `size` pixels, or the smallest one
pub fn font_for_size(size: u16) -> &'static MonoFont<'static> {
    FONTS
        .iter()
        .rev()
        .find(|font| font.character_size.height <= u32::from(size))
        .copied()
        .unwrap_or(FONTS[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_mapping() {
        assert_eq!(font_for_size(0).character_size.height, 6);
        assert_eq!(font_for_size(8).character_size.height, 8);
        assert_eq!(font_for_size(12).character_size.height, 10);
        assert_eq!(font_for_size(40).character_size.height, 20);
    }
}
