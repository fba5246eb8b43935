//! Weather icons drawn from primitives
//!
//! Each icon is laid out on a 64x48 design grid and scaled into the target
//! box, so the same shapes serve any text size.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle};
use sunshine_core::weather::WeatherIcon;

/// Design grid size
const GRID_W: i32 = 64;
const GRID_H: i32 = 48;

/// Maps design grid coordinates into a box
struct Grid {
    origin: Point,
    width: i32,
    height: i32,
}

impl Grid {
    fn new(area: &Rectangle) -> Self {
        Self {
            origin: area.top_left,
            width: area.size.width as i32,
            height: area.size.height as i32,
        }
    }

    fn point(&self, x: i32, y: i32) -> Point {
        self.origin + Point::new(x * self.width / GRID_W, y * self.height / GRID_H)
    }

    /// Scale a length along the shorter axis
    fn len(&self, l: i32) -> u32 {
        let scaled = (l * self.width / GRID_W).min(l * self.height / GRID_H);
        scaled.max(1) as u32
    }

    fn circle<D: DrawTarget>(
        &self,
        target: &mut D,
        cx: i32,
        cy: i32,
        diameter: i32,
        style: PrimitiveStyle<D::Color>,
    ) -> Result<(), D::Error> {
        Circle::with_center(self.point(cx, cy), self.len(diameter))
            .into_styled(style)
            .draw(target)
    }

    fn line<D: DrawTarget>(
        &self,
        target: &mut D,
        from: (i32, i32),
        to: (i32, i32),
        style: PrimitiveStyle<D::Color>,
    ) -> Result<(), D::Error> {
        Line::new(self.point(from.0, from.1), self.point(to.0, to.1))
            .into_styled(style)
            .draw(target)
    }
}

/// Draw `icon` inside `area`
///
/// Empty areas draw nothing.
pub fn draw_icon<D>(
    target: &mut D,
    icon: WeatherIcon,
    area: Rectangle,
    color: D::Color,
) -> Result<(), D::Error>
where
    D: DrawTarget,
{
    if area.size.width == 0 || area.size.height == 0 {
        return Ok(());
    }
    let grid = Grid::new(&area);
    let fill = PrimitiveStyle::with_fill(color);
    let stroke = PrimitiveStyle::with_stroke(color, grid.len(3));

    match icon {
        WeatherIcon::Clear => sun(&grid, target, fill, stroke),
        WeatherIcon::LightClouds => {
            grid.circle(target, 22, 16, 18, fill)?;
            cloud(&grid, target, fill)
        }
        WeatherIcon::Clouds => cloud(&grid, target, fill),
        WeatherIcon::LightRain => {
            cloud(&grid, target, fill)?;
            grid.line(target, (30, 38), (26, 46), stroke)
        }
        WeatherIcon::Rain => {
            cloud(&grid, target, fill)?;
            for x in [20, 32, 44] {
                grid.line(target, (x, 38), (x - 4, 46), stroke)?;
            }
            Ok(())
        }
        WeatherIcon::Snow => {
            cloud(&grid, target, fill)?;
            for x in [20, 32, 44] {
                grid.circle(target, x, 42, 5, fill)?;
            }
            Ok(())
        }
        WeatherIcon::Fog => {
            for y in [10, 20, 30, 40] {
                grid.line(target, (6, y), (58, y), stroke)?;
            }
            Ok(())
        }
        WeatherIcon::Storm => {
            cloud(&grid, target, fill)?;
            grid.line(target, (34, 34), (26, 42), stroke)?;
            grid.line(target, (26, 42), (36, 42), stroke)?;
            grid.line(target, (36, 42), (28, 48), stroke)
        }
    }
}

fn sun<D: DrawTarget>(
    grid: &Grid,
    target: &mut D,
    fill: PrimitiveStyle<D::Color>,
    stroke: PrimitiveStyle<D::Color>,
) -> Result<(), D::Error> {
    grid.circle(target, 32, 24, 24, fill)?;
    let rays = [
        ((32, 2), (32, 8)),
        ((32, 40), (32, 46)),
        ((10, 24), (16, 24)),
        ((48, 24), (54, 24)),
        ((17, 9), (21, 13)),
        ((47, 9), (43, 13)),
        ((17, 39), (21, 35)),
        ((47, 39), (43, 35)),
    ];
    for (from, to) in rays {
        grid.line(target, from, to, stroke)?;
    }
    Ok(())
}

fn cloud<D: DrawTarget>(
    grid: &Grid,
    target: &mut D,
    fill: PrimitiveStyle<D::Color>,
) -> Result<(), D::Error> {
    grid.circle(target, 22, 24, 20, fill)?;
    grid.circle(target, 36, 18, 26, fill)?;
    grid.circle(target, 48, 26, 16, fill)?;
    Rectangle::with_corners(grid.point(14, 24), grid.point(54, 34))
        .into_styled(fill)
        .draw(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_graphics::mock_display::MockDisplay;
    use embedded_graphics::pixelcolor::BinaryColor;

    fn display() -> MockDisplay<BinaryColor> {
        let mut display = MockDisplay::new();
        display.set_allow_overdraw(true);
        display
    }

    const ALL: [WeatherIcon; 8] = [
        WeatherIcon::Clear,
        WeatherIcon::LightClouds,
        WeatherIcon::Clouds,
        WeatherIcon::LightRain,
        WeatherIcon::Rain,
        WeatherIcon::Snow,
        WeatherIcon::Fog,
        WeatherIcon::Storm,
    ];

    #[test]
    fn test_icons_stay_in_their_box() {
        let area = Rectangle::new(Point::new(4, 4), Size::new(32, 24));
        for icon in ALL {
            let mut display = display();
            draw_icon(&mut display, icon, area, BinaryColor::On).unwrap();
            let drawn = display.affected_area();
            assert!(drawn.size.width > 0, "{:?} drew nothing", icon);
            // Strokes may spill by a pixel at the edges
            let slack = area.offset(1);
            assert!(
                slack.contains(drawn.top_left)
                    && drawn.bottom_right().map_or(true, |p| slack.contains(p)),
                "{:?} escaped its box",
                icon
            );
        }
    }

    #[test]
    fn test_empty_area_draws_nothing() {
        let mut display = display();
        let area = Rectangle::new(Point::new(4, 4), Size::new(0, 10));
        draw_icon(&mut display, WeatherIcon::Rain, area, BinaryColor::On).unwrap();
        assert_eq!(display.affected_area().size, Size::zero());
    }
}
