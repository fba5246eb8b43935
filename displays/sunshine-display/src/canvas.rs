//! Face canvas over an embedded-graphics draw target

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle, Rectangle};
use embedded_graphics::text::renderer::TextRenderer;
use embedded_graphics::text::{Baseline, Text};
use sunshine_core::traits::{Bitmap, Canvas, Color, LineStyle, TextMetrics, TextStyle};

use crate::fonts::font_for_size;
use crate::icons::draw_icon;

/// Errors that can occur while drawing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CanvasError {
    /// The draw target rejected a write
    Target,
}

/// Draws face commands onto any `DrawTarget`
///
/// Anti-aliasing requests are ignored; mono fonts have hard edges.
pub struct GraphicsCanvas<D: DrawTarget> {
    target: D,
    map_color: fn(Color) -> D::Color,
    icon_color: Color,
}

impl<D: DrawTarget> GraphicsCanvas<D> {
    /// Wrap `target`, converting face colors with `map_color`
    pub fn new(target: D, map_color: fn(Color) -> D::Color) -> Self {
        Self {
            target,
            map_color,
            icon_color: Color::WHITE,
        }
    }

    /// Color used for the weather icon shapes
    pub fn with_icon_color(mut self, color: Color) -> Self {
        self.icon_color = color;
        self
    }

    pub fn target(&self) -> &D {
        &self.target
    }

    pub fn target_mut(&mut self) -> &mut D {
        &mut self.target
    }

    pub fn into_inner(self) -> D {
        self.target
    }

    fn color(&self, color: Color) -> D::Color {
        (self.map_color)(color)
    }

    fn text_style(&self, style: &TextStyle) -> MonoTextStyle<'static, D::Color> {
        MonoTextStyle::new(font_for_size(style.size), self.color(style.color))
    }
}

impl<D: DrawTarget> TextMetrics for GraphicsCanvas<D> {
    fn measure_text(&self, text: &str, style: &TextStyle) -> u32 {
        self.text_style(style)
            .measure_string(text, Point::zero(), Baseline::Alphabetic)
            .bounding_box
            .size
            .width
    }
}

impl<D: DrawTarget> Canvas for GraphicsCanvas<D> {
    type Error = CanvasError;

    fn fill_background(&mut self, color: Color) -> Result<(), CanvasError> {
        let color = self.color(color);
        self.target.clear(color).map_err(|_| CanvasError::Target)
    }

    fn draw_text(
        &mut self,
        text: &str,
        x: i32,
        y: i32,
        style: &TextStyle,
    ) -> Result<(), CanvasError> {
        let style = self.text_style(style);
        Text::with_baseline(text, Point::new(x, y), style, Baseline::Alphabetic)
            .draw(&mut self.target)
            .map(|_| ())
            .map_err(|_| CanvasError::Target)
    }

    fn draw_line(
        &mut self,
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        style: &LineStyle,
    ) -> Result<(), CanvasError> {
        let stroke = PrimitiveStyle::with_stroke(self.color(style.color), u32::from(style.width));
        Line::new(Point::new(x1, y1), Point::new(x2, y2))
            .into_styled(stroke)
            .draw(&mut self.target)
            .map_err(|_| CanvasError::Target)
    }

    fn draw_bitmap(&mut self, bitmap: &Bitmap, x: i32, y: i32) -> Result<(), CanvasError> {
        let area = Rectangle::new(
            Point::new(x, y),
            Size::new(u32::from(bitmap.width), u32::from(bitmap.height)),
        );
        let color = self.color(self.icon_color);
        draw_icon(&mut self.target, bitmap.icon, area, color).map_err(|_| CanvasError::Target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::to_binary;
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::pixelcolor::BinaryColor;
    use sunshine_core::weather::WeatherIcon;

    fn canvas() -> GraphicsCanvas<MockDisplay<BinaryColor>> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display.set_allow_out_of_bounds_drawing(true);
        GraphicsCanvas::new(display, to_binary)
    }

    fn style(size: u16) -> TextStyle {
        TextStyle {
            size,
            color: Color::WHITE,
            anti_alias: true,
        }
    }

    #[test]
    fn test_measure_uses_font_width() {
        let canvas = canvas();
        assert_eq!(canvas.measure_text("12:34", &style(10)), 30);
        assert_eq!(canvas.measure_text("12:34", &style(20)), 50);
        assert_eq!(canvas.measure_text("", &style(20)), 0);
    }

    #[test]
    fn test_fill_background() {
        let mut canvas = canvas();
        canvas.fill_background(Color::WHITE).unwrap();
        let display = canvas.into_inner();
        assert_eq!(display.get_pixel(Point::new(0, 0)), Some(BinaryColor::On));
        assert_eq!(display.get_pixel(Point::new(63, 63)), Some(BinaryColor::On));
    }

    #[test]
    fn test_text_lands_above_baseline() {
        let mut canvas = canvas();
        canvas.draw_text("88", 2, 20, &style(10)).unwrap();
        let drawn = canvas.target().affected_area();
        assert!(drawn.top_left.y < 20);
        assert!(drawn.top_left.x >= 2);
    }

    #[test]
    fn test_line_and_bitmap() {
        let mut canvas = canvas();
        let line = LineStyle {
            color: Color::WHITE,
            width: 1,
        };
        canvas.draw_line(10, 30, 50, 30, &line).unwrap();
        assert_eq!(canvas.target().get_pixel(Point::new(30, 30)), Some(BinaryColor::On));

        let mut canvas = self::canvas();
        let bitmap = Bitmap::native(WeatherIcon::Clear).scaled_to_height(16);
        canvas.draw_bitmap(&bitmap, 0, 0).unwrap();
        let drawn = canvas.target().affected_area();
        assert!(drawn.size.width > 0 && drawn.size.width <= 17);
    }

    #[test]
    fn test_degree_sign_has_its_own_glyph() {
        let mut degree = canvas();
        degree.draw_text("75°", 0, 20, &style(10)).unwrap();
        let mut fallback = canvas();
        fallback.draw_text("75?", 0, 20, &style(10)).unwrap();
        assert_ne!(degree.target(), fallback.target());
    }

    #[test]
    fn test_accented_names_have_their_own_glyphs() {
        let mut accented = canvas();
        accented.draw_text("MIÉ MÄRZ", 0, 20, &style(10)).unwrap();
        let mut fallback = canvas();
        fallback.draw_text("MI? M?RZ", 0, 20, &style(10)).unwrap();
        assert_ne!(accented.target(), fallback.target());
    }

    #[test]
    fn test_full_face_replays() {
        use chrono::NaiveDate;
        use sunshine_core::clock::TimeSnapshot;
        use sunshine_core::config::{LocaleId, StyleTable};
        use sunshine_core::render::{FaceFrame, FaceRenderer, Viewport};
        use sunshine_core::traits::StandardIcons;
        use sunshine_core::weather::WeatherSample;

        let local = NaiveDate::from_ymd_opt(2025, 3, 5)
            .unwrap()
            .and_hms_opt(14, 5, 9)
            .unwrap();
        let weather = WeatherSample::new(Some("75°"), Some("60°"), 500);
        let frame = FaceFrame {
            time: TimeSnapshot::from_local(local, 0),
            mode: sunshine_core::state::DisplayMode::Interactive,
            time_anti_alias: true,
            weather: &weather,
            viewport: Viewport::new(64, 64),
        };
        let renderer = FaceRenderer::new(StyleTable::default(), LocaleId::English.table());

        let mut canvas = canvas();
        let list = renderer.render(&frame, &canvas, &StandardIcons);
        assert_eq!(list.len(), 7);
        assert_eq!(list.replay(&mut canvas), Ok(()));
    }
}
