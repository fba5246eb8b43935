//! Face task
//!
//! Owns the face controller and the display. Drains the event queue and
//! redraws whenever the controller invalidates; queued events are always
//! handled before a pending redraw.

use defmt::*;
use embassy_futures::select::{select, Either};
use embassy_rp::i2c::{Async, I2c};
use embassy_rp::peripherals::I2C0;

use sunshine_core::config::FaceConfig;
use sunshine_core::render::Viewport;
use sunshine_core::state::FaceController;
use sunshine_display::{to_binary, GraphicsCanvas};

use crate::channels::{EVENT_CHANNEL, REDRAW};
use crate::clock::UptimeClock;
use crate::host::FirmwareHost;
use crate::sh1106::{Sh1106, CONTRAST_AMBIENT, CONTRAST_INTERACTIVE, HEIGHT, WIDTH};

/// The board's panel
pub type Display = Sh1106<I2c<'static, I2C0, Async>>;

#[embassy_executor::task]
pub async fn face_task(config: FaceConfig, mut display: Display) {
    info!("Face task started");

    if let Err(e) = display.init().await {
        error!("Display init failed: {:?}", e);
    }

    let mut canvas = GraphicsCanvas::new(display, to_binary).with_icon_color(config.style.text);
    let mut face = FaceController::new(&config, UptimeClock::new(), FirmwareHost);
    let viewport = Viewport::new(WIDTH as u32, HEIGHT as u32);

    let mut panel_on = true;
    let mut dimmed = false;

    loop {
        match select(EVENT_CHANNEL.receive(), REDRAW.wait()).await {
            Either::First(event) => {
                debug!("Event: {:?}", event);
                face.handle_event(event);

                // Hidden faces keep the panel dark
                if face.is_visible() != panel_on {
                    panel_on = face.is_visible();
                    if let Err(e) = canvas.target_mut().set_display_on(panel_on).await {
                        warn!("Display power change failed: {:?}", e);
                    }
                }
            }
            Either::Second(()) => {
                let ambient = face.mode().is_ambient();
                if ambient != dimmed {
                    dimmed = ambient;
                    let contrast = if ambient {
                        CONTRAST_AMBIENT
                    } else {
                        CONTRAST_INTERACTIVE
                    };
                    if let Err(e) = canvas.target_mut().set_contrast(contrast).await {
                        warn!("Contrast change failed: {:?}", e);
                    }
                }

                if let Err(e) = face.draw_to(viewport, &mut canvas) {
                    warn!("Draw failed: {:?}", e);
                    continue;
                }
                if let Err(e) = canvas.target_mut().flush().await {
                    warn!("Display flush failed: {:?}", e);
                }
            }
        }
    }
}
