//! Face host services backed by the firmware's channels

use core::sync::atomic::Ordering;

use defmt::*;
use embassy_time::{Duration, Instant};
use sunshine_core::scheduler::TickToken;
use sunshine_core::traits::{FaceHost, TickTimer};

use crate::channels::{
    LinkCommand, TickRequest, LINK_CONTROL, REDRAW, TICK_REQUEST, TIMEZONE_LISTENING,
};

/// Stateless bridge from the controller to the other tasks
pub struct FirmwareHost;

impl TickTimer for FirmwareHost {
    fn schedule_tick(&mut self, token: TickToken, delay_ms: u32) {
        let deadline = Instant::now() + Duration::from_millis(u64::from(delay_ms));
        TICK_REQUEST.signal(TickRequest::Schedule { token, deadline });
    }

    fn cancel_tick(&mut self, token: TickToken) {
        TICK_REQUEST.signal(TickRequest::Cancel(token));
    }
}

impl FaceHost for FirmwareHost {
    fn connect_data_layer(&mut self) {
        debug!("Connecting companion link");
        LINK_CONTROL.signal(LinkCommand::Connect);
    }

    fn disconnect_data_layer(&mut self) {
        debug!("Disconnecting companion link");
        LINK_CONTROL.signal(LinkCommand::Disconnect);
    }

    fn register_timezone_receiver(&mut self) {
        TIMEZONE_LISTENING.store(true, Ordering::Relaxed);
    }

    fn unregister_timezone_receiver(&mut self) {
        TIMEZONE_LISTENING.store(false, Ordering::Relaxed);
    }

    fn invalidate(&mut self) {
        REDRAW.signal(());
    }
}
