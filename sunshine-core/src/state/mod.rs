//! Face lifecycle
//!
//! Every host callback arrives as one [`Event`] and is handled by the
//! [`FaceController`], which owns all mutable face state.

pub mod controller;
pub mod events;
pub mod mode;

pub use controller::{DataLayerState, FaceController, Lifecycle};
pub use events::Event;
pub use mode::DisplayMode;
