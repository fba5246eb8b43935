//! Collaborator traits
//!
//! These traits define the interface between the face logic and the
//! platform: the drawing surface, the artwork source and the host services
//! (clock, timer, data layer, invalidation).

pub mod canvas;
pub mod host;
pub mod resources;

pub use canvas::{Bitmap, Canvas, Color, LineStyle, TextMetrics, TextStyle};
pub use host::{FaceHost, TickTimer, WallClock};
pub use resources::{Resources, StandardIcons};
