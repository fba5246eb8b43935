//! embedded-graphics backend for the Sunshine face
//!
//! This crate provides:
//! - `GraphicsCanvas`, a face canvas over any `DrawTarget`
//! - Text size to mono font mapping and the matching text metrics
//! - Primitive-drawn weather icons that scale to any box
//! - Color conversions for monochrome and RGB565 panels
//!
//! The face itself never sees embedded-graphics types; it only talks to the
//! `Canvas` trait from `sunshine-core`.

#![no_std]
#![deny(unsafe_code)]

pub mod canvas;
pub mod color;
pub mod fonts;
pub mod icons;

pub use canvas::{CanvasError, GraphicsCanvas};
pub use color::{to_binary, to_rgb565};
pub use fonts::font_for_size;
