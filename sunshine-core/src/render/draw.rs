//! Draw commands

use heapless::{String, Vec};

use crate::traits::{Bitmap, Canvas, Color, LineStyle, TextStyle};

/// Longest text a command can carry (bytes)
pub const MAX_TEXT_LEN: usize = 32;

/// Background, time, date, divider, high, low and icon
pub const MAX_DRAW_COMMANDS: usize = 8;

pub type Text = String<MAX_TEXT_LEN>;

/// One primitive drawing operation
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DrawCommand {
    FillBackground(Color),
    Text {
        text: Text,
        x: i32,
        y: i32,
        style: TextStyle,
    },
    Line {
        x1: i32,
        y1: i32,
        x2: i32,
        y2: i32,
        style: LineStyle,
    },
    Bitmap {
        bitmap: Bitmap,
        x: i32,
        y: i32,
    },
}

/// Ordered commands for one frame
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DrawList {
    commands: Vec<DrawCommand, MAX_DRAW_COMMANDS>,
}

impl DrawList {
    pub const fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Append a command; a full list drops it
    pub fn push(&mut self, command: DrawCommand) {
        let _ = self.commands.push(command);
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DrawCommand> {
        self.commands.iter()
    }

    /// Text of every text command, in draw order
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }

    /// Execute the commands on `canvas`, stopping at the first error
    pub fn replay<K: Canvas + ?Sized>(&self, canvas: &mut K) -> Result<(), K::Error> {
        for command in &self.commands {
            match command {
                DrawCommand::FillBackground(color) => canvas.fill_background(*color)?,
                DrawCommand::Text { text, x, y, style } => canvas.draw_text(text, *x, *y, style)?,
                DrawCommand::Line {
                    x1,
                    y1,
                    x2,
                    y2,
                    style,
                } => canvas.draw_line(*x1, *y1, *x2, *y2, style)?,
                DrawCommand::Bitmap { bitmap, x, y } => canvas.draw_bitmap(bitmap, *x, *y)?,
            }
        }
        Ok(())
    }
}

impl<'a> IntoIterator for &'a DrawList {
    type Item = &'a DrawCommand;
    type IntoIter = core::slice::Iter<'a, DrawCommand>;

    fn into_iter(self) -> Self::IntoIter {
        self.commands.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::traits::TextMetrics;
    use crate::weather::WeatherIcon;
    use std::vec::Vec as StdVec;

    /// Canvas that fails after a fixed number of operations
    struct FlakyCanvas {
        ops: StdVec<&'static str>,
        fail_at: usize,
    }

    impl FlakyCanvas {
        fn op(&mut self, name: &'static str) -> Result<(), ()> {
            if self.ops.len() == self.fail_at {
                return Err(());
            }
            self.ops.push(name);
            Ok(())
        }
    }

    impl TextMetrics for FlakyCanvas {
        fn measure_text(&self, text: &str, _style: &TextStyle) -> u32 {
            text.len() as u32
        }
    }

    impl Canvas for FlakyCanvas {
        type Error = ();

        fn fill_background(&mut self, _color: Color) -> Result<(), ()> {
            self.op("fill")
        }

        fn draw_text(&mut self, _t: &str, _x: i32, _y: i32, _s: &TextStyle) -> Result<(), ()> {
            self.op("text")
        }

        fn draw_line(&mut self, _: i32, _: i32, _: i32, _: i32, _: &LineStyle) -> Result<(), ()> {
            self.op("line")
        }

        fn draw_bitmap(&mut self, _b: &Bitmap, _x: i32, _y: i32) -> Result<(), ()> {
            self.op("bitmap")
        }
    }

    fn sample_list() -> DrawList {
        let style = TextStyle {
            size: 10,
            color: Color::WHITE,
            anti_alias: true,
        };
        let mut list = DrawList::new();
        list.push(DrawCommand::FillBackground(Color::BLACK));
        list.push(DrawCommand::Text {
            text: Text::try_from("12:00").unwrap(),
            x: 1,
            y: 2,
            style,
        });
        list.push(DrawCommand::Line {
            x1: 0,
            y1: 5,
            x2: 10,
            y2: 5,
            style: LineStyle {
                color: Color::WHITE,
                width: 1,
            },
        });
        list.push(DrawCommand::Bitmap {
            bitmap: Bitmap::native(WeatherIcon::Rain),
            x: 3,
            y: 4,
        });
        list
    }

    #[test]
    fn test_replay_in_order() {
        let mut canvas = FlakyCanvas {
            ops: StdVec::new(),
            fail_at: usize::MAX,
        };
        assert_eq!(sample_list().replay(&mut canvas), Ok(()));
        assert_eq!(canvas.ops, ["fill", "text", "line", "bitmap"]);
    }

    #[test]
    fn test_replay_stops_at_first_error() {
        let mut canvas = FlakyCanvas {
            ops: StdVec::new(),
            fail_at: 2,
        };
        assert_eq!(sample_list().replay(&mut canvas), Err(()));
        assert_eq!(canvas.ops, ["fill", "text"]);
    }

    #[test]
    fn test_texts() {
        let list = sample_list();
        assert_eq!(list.texts().collect::<StdVec<_>>(), ["12:00"]);
        assert_eq!(list.len(), 4);
    }
}
