//! Companion data-layer protocol
//!
//! This crate defines the link between the companion phone app and the
//! watch. The phone pushes data items (a path plus a small key/value map)
//! whenever its weather sync runs; the watch only listens and answers pings.
//!
//! # Protocol Overview
//!
//! All messages use a simple binary frame format:
//! ```text
//! ┌───────┬────────┬──────┬─────────────┬──────────┐
//! │ START │ LENGTH │ TYPE │ PAYLOAD     │ CHECKSUM │
//! │ 1B    │ 1B     │ 1B   │ 0–250B      │ 1B       │
//! └───────┴────────┴──────┴─────────────┴──────────┘
//! ```
//!
//! Delivery order across frames is not guaranteed by the phone side, so a
//! receiver must treat every data item as a full replacement of what it held
//! for that path.

#![no_std]
#![deny(unsafe_code)]

#[cfg(test)]
extern crate std;

pub mod datamap;
pub mod frame;
pub mod messages;

pub use datamap::{DataMap, DataValue};
pub use frame::{Frame, FrameError, FrameParser, FRAME_START, MAX_PAYLOAD_SIZE};
pub use messages::{DataItem, PeerMessage, WatchMessage, WeatherPayload, WEATHER_PATH};
