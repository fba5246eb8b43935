//! Inter-task communication channels
//!
//! Defines the static channels used for communication between Embassy tasks.
//! The face task is the only consumer of `EVENT_CHANNEL`, which makes it the
//! single serial queue every face event goes through.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;
use embassy_time::Instant;
use portable_atomic::{AtomicBool, AtomicI32, AtomicI64};

use sunshine_core::scheduler::TickToken;
use sunshine_core::state::Event;

/// Channel capacity for face events
const EVENT_CHANNEL_SIZE: usize = 16;

/// Every event for the face controller
pub static EVENT_CHANNEL: Channel<CriticalSectionRawMutex, Event, EVENT_CHANNEL_SIZE> =
    Channel::new();

/// Latest request for the tick task; a newer one replaces an unserved one
pub static TICK_REQUEST: Signal<CriticalSectionRawMutex, TickRequest> = Signal::new();

/// Face asked to be redrawn
pub static REDRAW: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Open or close the companion link
pub static LINK_CONTROL: Signal<CriticalSectionRawMutex, LinkCommand> = Signal::new();

/// A PING arrived and needs a PONG
pub static PONG_REQUEST: Signal<CriticalSectionRawMutex, ()> = Signal::new();

/// Wall time at boot in ms since the Unix epoch; the build time until the
/// phone sends its clock
pub static BOOT_EPOCH_MS: AtomicI64 = AtomicI64::new(crate::clock::BUILD_EPOCH_MS);

/// Timezone last reported by the phone, seconds east of UTC
pub static ZONE_OFFSET: AtomicI32 = AtomicI32::new(0);

/// Whether timezone changes should be forwarded to the face
pub static TIMEZONE_LISTENING: AtomicBool = AtomicBool::new(false);

/// Tick timer requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickRequest {
    /// Post `Event::Tick(token)` at `deadline`
    Schedule { token: TickToken, deadline: Instant },
    /// Drop the pending tick if it still carries `token`
    Cancel(TickToken),
}

/// Companion link requests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkCommand {
    Connect,
    Disconnect,
}
