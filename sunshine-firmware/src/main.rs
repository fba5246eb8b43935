//! Sunshine - weather watch face firmware
//!
//! Runs the Sunshine face on an RP2040 board with a 128x64 SH1106 OLED.
//! A companion phone on UART0 pushes the forecast and its timezone; a push
//! button stands in for the wrist gestures that wake a watch.

#![no_std]
#![no_main]

use defmt::*;
use embassy_executor::Spawner;
use embassy_rp::bind_interrupts;
use embassy_rp::gpio::{Input, Pull};
use embassy_rp::i2c::{self, I2c};
use embassy_rp::peripherals::{I2C0, UART0};
use embassy_rp::uart::{BufferedInterruptHandler, Config as UartConfig, Uart};
use static_cell::StaticCell;
use {defmt_rtt as _, panic_probe as _};

use sunshine_core::config::FaceConfig;
use sunshine_core::state::Event;

use crate::channels::EVENT_CHANNEL;
use crate::sh1106::Sh1106;

mod channels;
mod clock;
mod host;
mod sh1106;
mod tasks;

bind_interrupts!(struct Irqs {
    UART0_IRQ => BufferedInterruptHandler<UART0>;
    I2C0_IRQ => i2c::InterruptHandler<I2C0>;
});

/// Face configuration, validated and encoded from face.toml at build time
static FACE_CONFIG: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/face.bin"));

// Static cells for UART buffers (must live forever)
static TX_BUF: StaticCell<[u8; 64]> = StaticCell::new();
static RX_BUF: StaticCell<[u8; 256]> = StaticCell::new();

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("Sunshine firmware starting...");

    let p = embassy_rp::init(Default::default());
    info!("Peripherals initialized");

    let config = match FaceConfig::from_bytes(FACE_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            warn!("Embedded face config rejected ({:?}), using defaults", e);
            FaceConfig::default()
        }
    };
    info!(
        "Face config: interval={}ms locale={:?}",
        config.interval_ms, config.locale
    );

    // Companion link, 115200 baud default
    let tx_buf = TX_BUF.init([0u8; 64]);
    let rx_buf = RX_BUF.init([0u8; 256]);
    let uart = Uart::new_blocking(p.UART0, p.PIN_0, p.PIN_1, UartConfig::default());
    let uart = uart.into_buffered(Irqs, tx_buf, rx_buf);
    let (tx, rx) = uart.split();
    info!("UART initialized for companion link");

    // SH1106 on I2C0 (SDA=GPIO4, SCL=GPIO5)
    let i2c = I2c::new_async(p.I2C0, p.PIN_5, p.PIN_4, Irqs, i2c::Config::default());
    let display = Sh1106::new(i2c);

    let button = Input::new(p.PIN_15, Pull::Up);

    spawner.spawn(tasks::face_task(config, display)).unwrap();
    spawner.spawn(tasks::tick_task()).unwrap();
    spawner.spawn(tasks::time_tick_task()).unwrap();
    spawner.spawn(tasks::peer_rx_task(rx)).unwrap();
    spawner.spawn(tasks::peer_tx_task(tx)).unwrap();
    spawner
        .spawn(tasks::button_task(button, tasks::ButtonConfig::default()))
        .unwrap();
    info!("Tasks spawned");

    // Bring the face up the way a watch does after boot: created, visible,
    // then dozing until the wearer looks at it
    EVENT_CHANNEL.send(Event::Created).await;
    EVENT_CHANNEL
        .send(Event::PropertiesChanged {
            low_bit_ambient: true,
        })
        .await;
    EVENT_CHANNEL.send(Event::VisibilityChanged(true)).await;
    EVENT_CHANNEL.send(Event::AmbientModeChanged(true)).await;
}
