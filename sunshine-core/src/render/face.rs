//! Face layout

use super::draw::{DrawCommand, DrawList, Text};
use super::format::{format_date, format_time};
use crate::clock::TimeSnapshot;
use crate::config::{Locale, StyleTable};
use crate::state::DisplayMode;
use crate::traits::{Color, Resources, TextMetrics};
use crate::weather::WeatherSample;

/// Size of the surface for one draw
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub const fn center_x(&self) -> i32 {
        (self.width / 2) as i32
    }
}

/// Everything one draw reads
#[derive(Debug, Clone, Copy)]
pub struct FaceFrame<'a> {
    pub time: TimeSnapshot,
    pub mode: DisplayMode,
    /// Smooth the time text (off for low-bit ambient)
    pub time_anti_alias: bool,
    pub weather: &'a WeatherSample,
    pub viewport: Viewport,
}

/// Stateless layout engine over a fixed style and locale
#[derive(Debug, Clone)]
pub struct FaceRenderer {
    style: StyleTable,
    locale: &'static Locale,
}

impl FaceRenderer {
    pub fn new(style: StyleTable, locale: &'static Locale) -> Self {
        Self { style, locale }
    }

    pub fn style(&self) -> &StyleTable {
        &self.style
    }

    pub fn locale(&self) -> &'static Locale {
        self.locale
    }

    /// Lay out one frame
    ///
    /// Missing or invalid weather skips the temperature block; nothing else
    /// depends on received data, so there is no failure path.
    pub fn render<M, R>(&self, frame: &FaceFrame<'_>, metrics: &M, resources: &R) -> DrawList
    where
        M: TextMetrics + ?Sized,
        R: Resources + ?Sized,
    {
        let style = &self.style;
        let interactive = frame.mode == DisplayMode::Interactive;
        let cx = frame.viewport.center_x();
        let mut list = DrawList::new();

        list.push(DrawCommand::FillBackground(if interactive {
            style.background
        } else {
            Color::BLACK
        }));

        // Time is pinned by the widest sample so it does not jitter
        let time_style = style.time_style(frame.time_anti_alias);
        let sample = if interactive {
            &style.time_sample
        } else {
            &style.time_sample_short
        };
        list.push(DrawCommand::Text {
            text: format_time(&frame.time, frame.mode),
            x: cx - half(metrics.measure_text(sample, &time_style)),
            y: style.time_y,
            style: time_style,
        });

        let date_style = style.date_style();
        let date = format_date(&frame.time, self.locale);
        list.push(DrawCommand::Text {
            x: cx - half(metrics.measure_text(&date, &date_style)),
            y: style.date_y + style.date_baseline_offset,
            text: date,
            style: date_style,
        });

        if !interactive {
            return list;
        }

        let divider_y = style.date_y + style.divider_offset;
        list.push(DrawCommand::Line {
            x1: cx - style.divider_half_width,
            y1: divider_y,
            x2: cx + style.divider_half_width,
            y2: divider_y,
            style: style.divider_style(),
        });

        if let Some((high, low)) = frame.weather.temperatures() {
            self.push_temperatures(&mut list, cx, high, low, frame.weather.condition_id, metrics, resources);
        }

        list
    }

    #[allow(clippy::too_many_arguments)]
    fn push_temperatures<M, R>(
        &self,
        list: &mut DrawList,
        cx: i32,
        high: &str,
        low: &str,
        condition_id: i32,
        metrics: &M,
        resources: &R,
    ) where
        M: TextMetrics + ?Sized,
        R: Resources + ?Sized,
    {
        let style = &self.style;
        let high_style = style.high_style();
        let low_style = style.low_style();
        let high_half = half(metrics.measure_text(high, &high_style));
        let low_x = cx + high_half + style.temp_gap;

        list.push(DrawCommand::Text {
            text: to_text(high),
            x: cx - high_half,
            y: style.temp_y,
            style: high_style,
        });
        list.push(DrawCommand::Text {
            text: to_text(low),
            x: low_x,
            y: style.temp_y,
            style: low_style,
        });

        let bitmap = resources.icon(condition_id).scaled_to_height(style.low_size);
        let low_width = metrics.measure_text(low, &low_style) as i32;
        list.push(DrawCommand::Bitmap {
            bitmap,
            x: low_x + low_width + style.icon_gap,
            y: style.temp_y - i32::from(bitmap.height),
        });
    }
}

fn half(width: u32) -> i32 {
    (width / 2) as i32
}

fn to_text(s: &str) -> Text {
    Text::try_from(s).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LocaleId;
    use crate::traits::{StandardIcons, TextStyle};
    use crate::weather::WeatherIcon;
    use chrono::NaiveDate;

    /// Every glyph is half the text size wide
    struct FixedWidth;

    impl TextMetrics for FixedWidth {
        fn measure_text(&self, text: &str, style: &TextStyle) -> u32 {
            text.chars().count() as u32 * u32::from(style.size) / 2
        }
    }

    fn wednesday() -> TimeSnapshot {
        let local = NaiveDate::from_ymd_opt(2025, 3, 5)
            .unwrap()
            .and_hms_opt(14, 5, 9)
            .unwrap();
        TimeSnapshot::from_local(local, 0)
    }

    fn renderer() -> FaceRenderer {
        FaceRenderer::new(StyleTable::default(), LocaleId::English.table())
    }

    fn render(mode: DisplayMode, weather: &WeatherSample) -> DrawList {
        let frame = FaceFrame {
            time: wednesday(),
            mode,
            time_anti_alias: true,
            weather,
            viewport: Viewport::new(320, 320),
        };
        renderer().render(&frame, &FixedWidth, &StandardIcons)
    }

    fn has_bitmap(list: &DrawList) -> bool {
        list.iter().any(|c| matches!(c, DrawCommand::Bitmap { .. }))
    }

    fn sunny() -> WeatherSample {
        WeatherSample::new(Some("75°"), Some("60°"), 800)
    }

    #[test]
    fn test_interactive_full_face() {
        let list = render(DisplayMode::Interactive, &sunny());
        let texts: std::vec::Vec<_> = list.texts().collect();
        assert_eq!(texts, ["14:05:09", "WED, MAR 5, 2025", "75°", "60°"]);
        assert!(has_bitmap(&list));
        assert!(list.iter().any(|c| matches!(c, DrawCommand::Line { .. })));
        assert_eq!(
            list.iter().next(),
            Some(&DrawCommand::FillBackground(StyleTable::default().background))
        );
    }

    #[test]
    fn test_ambient_reduced_face() {
        let list = render(DisplayMode::Ambient, &sunny());
        let texts: std::vec::Vec<_> = list.texts().collect();
        assert_eq!(texts, ["14:05", "WED, MAR 5, 2025"]);
        assert!(!has_bitmap(&list));
        assert!(!list.iter().any(|c| matches!(c, DrawCommand::Line { .. })));
        assert_eq!(
            list.iter().next(),
            Some(&DrawCommand::FillBackground(Color::BLACK))
        );
    }

    #[test]
    fn test_ambient_background_ignores_style() {
        let style = StyleTable {
            background: Color::WHITE,
            ..StyleTable::default()
        };
        let renderer = FaceRenderer::new(style, LocaleId::English.table());
        let weather = sunny();
        let frame = FaceFrame {
            time: wednesday(),
            mode: DisplayMode::Ambient,
            time_anti_alias: false,
            weather: &weather,
            viewport: Viewport::new(320, 320),
        };
        let list = renderer.render(&frame, &FixedWidth, &StandardIcons);
        assert_eq!(
            list.iter().next(),
            Some(&DrawCommand::FillBackground(Color::BLACK))
        );
    }

    #[test]
    fn test_invalid_weather_omits_block() {
        for sample in [
            WeatherSample::new(Some("75°"), Some("60°"), 0),
            WeatherSample::new(None, Some("60°"), 800),
            WeatherSample::new(Some("75°"), None, 800),
            WeatherSample::empty(),
        ] {
            let list = render(DisplayMode::Interactive, &sample);
            assert_eq!(list.texts().count(), 2);
            assert!(!has_bitmap(&list));
        }
    }

    #[test]
    fn test_time_anchored_on_sample() {
        let list = render(DisplayMode::Interactive, &WeatherSample::empty());
        // "00:00:00" at size 40 measures 160
        let Some(DrawCommand::Text { x, y, .. }) = list.iter().nth(1) else {
            panic!("expected time text");
        };
        assert_eq!((*x, *y), (160 - 80, StyleTable::default().time_y));
    }

    #[test]
    fn test_temperature_layout() {
        let style = StyleTable::default();
        let list = render(DisplayMode::Interactive, &sunny());
        let commands: std::vec::Vec<_> = list.iter().collect();

        // "75°" at size 24 is 36 wide, so half is 18
        let DrawCommand::Text { x: high_x, .. } = commands[4] else {
            panic!("expected high text");
        };
        let DrawCommand::Text { x: low_x, .. } = commands[5] else {
            panic!("expected low text");
        };
        assert_eq!(*high_x, 160 - 18);
        assert_eq!(*low_x, 160 + 18 + style.temp_gap);

        let DrawCommand::Bitmap { bitmap, x, y } = commands[6] else {
            panic!("expected icon");
        };
        assert_eq!(bitmap.icon, WeatherIcon::Clear);
        assert_eq!(bitmap.height, style.low_size);
        assert_eq!(*x, *low_x + 36 + style.icon_gap);
        assert_eq!(*y, style.temp_y - i32::from(style.low_size));
    }

    #[test]
    fn test_divider_centered() {
        let style = StyleTable::default();
        let list = render(DisplayMode::Interactive, &WeatherSample::empty());
        let line = list.iter().find_map(|c| match c {
            DrawCommand::Line { x1, y1, x2, y2, .. } => Some((*x1, *y1, *x2, *y2)),
            _ => None,
        });
        let y = style.date_y + style.divider_offset;
        assert_eq!(line, Some((120, y, 200, y)));
    }

    #[test]
    fn test_render_is_deterministic() {
        let weather = sunny();
        assert_eq!(
            render(DisplayMode::Interactive, &weather),
            render(DisplayMode::Interactive, &weather)
        );
    }
}
