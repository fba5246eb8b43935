//! Wall clock for a board without a battery-backed RTC
//!
//! Starts from the build time and is corrected whenever the phone sends its
//! wall time.

use core::sync::atomic::Ordering;

use embassy_time::Instant;
use sunshine_core::traits::WallClock;

use crate::channels::{BOOT_EPOCH_MS, ZONE_OFFSET};

mod build_time {
    include!(concat!(env!("OUT_DIR"), "/build_time.rs"));
}

pub use build_time::BUILD_EPOCH_MS;

/// Move the clock so that it reads `epoch_ms` right now
pub fn set_wall_time(epoch_ms: i64) {
    let uptime_ms = Instant::now().as_millis() as i64;
    BOOT_EPOCH_MS.store(epoch_ms.saturating_sub(uptime_ms), Ordering::Relaxed);
}

/// Epoch at boot plus uptime, in the zone the phone last reported
pub struct UptimeClock;

impl UptimeClock {
    pub const fn new() -> Self {
        Self
    }
}

impl WallClock for UptimeClock {
    fn now_ms(&self) -> i64 {
        BOOT_EPOCH_MS.load(Ordering::Relaxed) + Instant::now().as_millis() as i64
    }

    fn system_zone(&self) -> i32 {
        ZONE_OFFSET.load(Ordering::Relaxed)
    }
}
