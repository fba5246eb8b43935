//! Face renderer
//!
//! Turns the current state into a list of draw commands. Rendering is pure:
//! the same frame and metrics always yield the same list, and nothing here
//! writes to a canvas until the list is replayed.

pub mod draw;
pub mod face;
pub mod format;

pub use draw::{DrawCommand, DrawList, Text, MAX_DRAW_COMMANDS, MAX_TEXT_LEN};
pub use face::{FaceFrame, FaceRenderer, Viewport};
pub use format::{format_date, format_time};
