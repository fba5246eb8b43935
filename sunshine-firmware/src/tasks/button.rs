//! Wake button task
//!
//! Stands in for the wrist gestures a watch OS would report. A short press
//! wakes the face into interactive mode, and it drops back to ambient after
//! a stretch without presses. Holding the button hides or shows the face.

use defmt::*;
use embassy_rp::gpio::Input;
use embassy_time::{Duration, Ticker};

use sunshine_core::state::Event;

use crate::channels::EVENT_CHANNEL;

/// Poll period
const POLL_MS: u32 = 20;

/// Button behaviour
pub struct ButtonConfig {
    /// Samples a press must hold before it counts
    pub debounce_ms: u32,
    /// Hold time that turns a press into a visibility toggle
    pub long_press_ms: u32,
    /// Interactive time before the face falls back to ambient
    pub wake_ms: u32,
}

impl Default for ButtonConfig {
    fn default() -> Self {
        Self {
            debounce_ms: 40,
            long_press_ms: 2_000,
            wake_ms: 10_000,
        }
    }
}

/// Button task
///
/// The button is active low. Starts out assuming the face is visible and in
/// ambient mode, which is how `main` brings it up.
#[embassy_executor::task]
pub async fn button_task(button: Input<'static>, config: ButtonConfig) {
    info!("Button task started");

    let mut ticker = Ticker::every(Duration::from_millis(POLL_MS as u64));
    let debounce_ticks = (config.debounce_ms / POLL_MS).max(1);
    let long_ticks = config.long_press_ms / POLL_MS;
    let wake_ticks = config.wake_ms / POLL_MS;

    let mut held: u32 = 0;
    let mut idle: u32 = 0;
    let mut visible = true;
    let mut awake = false;

    loop {
        if button.is_low() {
            held = held.saturating_add(1);
            if held == long_ticks {
                visible = !visible;
                info!("Long press, visible={}", visible);
                EVENT_CHANNEL.send(Event::VisibilityChanged(visible)).await;
            }
        } else {
            if held >= debounce_ticks && held < long_ticks {
                debug!("Short press");
                idle = 0;
                if !visible {
                    visible = true;
                    EVENT_CHANNEL.send(Event::VisibilityChanged(true)).await;
                }
                if !awake {
                    awake = true;
                    EVENT_CHANNEL.send(Event::AmbientModeChanged(false)).await;
                }
            }
            held = 0;

            if awake {
                idle = idle.saturating_add(1);
                if idle >= wake_ticks {
                    awake = false;
                    idle = 0;
                    debug!("Idle, back to ambient");
                    EVENT_CHANNEL.send(Event::AmbientModeChanged(true)).await;
                }
            }
        }

        ticker.next().await;
    }
}
