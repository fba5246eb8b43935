//! Timer tasks
//!
//! `tick_task` serves the render scheduler's one-shot ticks; `time_tick_task`
//! delivers the once-a-minute tick the face uses in ambient mode.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_time::{Instant, Timer};

use sunshine_core::scheduler::{aligned_delay_ms, TickToken};
use sunshine_core::state::Event;
use sunshine_core::traits::WallClock;

use crate::channels::{TickRequest, EVENT_CHANNEL, TICK_REQUEST};
use crate::clock::UptimeClock;

/// Ambient tick period
const MINUTE_MS: u32 = 60_000;

/// Holds at most one pending tick; newer requests supersede it
#[embassy_executor::task]
pub async fn tick_task() {
    info!("Tick task started");

    let mut pending: Option<(TickToken, Instant)> = None;

    loop {
        let request = match pending {
            None => TICK_REQUEST.wait().await,
            Some((token, deadline)) => {
                match select(Timer::at(deadline), TICK_REQUEST.wait()).await {
                    Either::First(()) => {
                        pending = None;
                        trace!("Tick {:?} due", token);
                        EVENT_CHANNEL.send(Event::Tick(token)).await;
                        continue;
                    }
                    Either::Second(request) => request,
                }
            }
        };

        match request {
            TickRequest::Schedule { token, deadline } => pending = Some((token, deadline)),
            TickRequest::Cancel(token) => {
                if pending.map(|(t, _)| t) == Some(token) {
                    pending = None;
                }
            }
        }
    }
}

/// Minute-aligned time ticks
#[embassy_executor::task]
pub async fn time_tick_task() {
    info!("Time tick task started");

    let clock = UptimeClock::new();
    loop {
        let delay = aligned_delay_ms(clock.now_ms(), MINUTE_MS);
        Timer::after_millis(u64::from(delay)).await;
        EVENT_CHANNEL.send(Event::TimeTick).await;
    }
}
