//! Board-agnostic core logic for the Sunshine watch face
//!
//! This crate contains everything that decides *when* the face redraws,
//! *what* it draws and *how* outside events change the displayed state:
//!
//! - Clock source (wall clock + current timezone)
//! - Weather state (latest forecast pushed by the phone)
//! - Render scheduler (second-aligned ticks while interactive)
//! - Face renderer (pure state → draw commands)
//! - Lifecycle controller (single event entry point)
//! - Collaborator traits (canvas, resources, host) and configuration types
//!
//! Nothing here touches hardware; the firmware and display crates supply
//! the collaborators.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod clock;
pub mod config;
pub mod render;
pub mod scheduler;
pub mod state;
pub mod traits;
pub mod weather;
