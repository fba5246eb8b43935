//! Companion link receive task
//!
//! Parses frames from the phone. While the face has the link open and a
//! frame has been seen, weather items are forwarded as face events.

use core::sync::atomic::Ordering;

use defmt::*;
use embassy_futures::select::{select3, Either3};
use embassy_rp::uart::BufferedUartRx;
use embassy_time::{Duration, Instant, Timer};
use embedded_io_async::Read;

use sunshine_core::state::Event;
use sunshine_core::weather::WeatherSample;
use sunshine_protocol::{FrameParser, PeerMessage};

use crate::channels::{
    LinkCommand, EVENT_CHANNEL, LINK_CONTROL, PONG_REQUEST, TIMEZONE_LISTENING, ZONE_OFFSET,
};
use crate::clock;

/// Buffer size for UART receive
const RX_BUF_SIZE: usize = 64;

/// The phone pings every second; give it a few before giving up
const CONNECT_TIMEOUT: Duration = Duration::from_secs(5);

/// Reported with `DataLayerFailed` when no frame arrives in time
pub const ERROR_TIMEOUT: i32 = 15;

/// Link state as seen by this task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
enum Link {
    Closed,
    /// Waiting for the first good frame
    Connecting { deadline: Instant },
    Open,
}

#[embassy_executor::task]
pub async fn peer_rx_task(mut rx: BufferedUartRx) {
    info!("Peer RX task started");

    let mut parser = FrameParser::new();
    let mut buf = [0u8; RX_BUF_SIZE];
    let mut link = Link::Closed;

    loop {
        let deadline = match link {
            Link::Connecting { deadline } => deadline,
            _ => Instant::MAX,
        };

        match select3(rx.read(&mut buf), LINK_CONTROL.wait(), Timer::at(deadline)).await {
            Either3::First(Ok(n)) => {
                trace!("RX: {} bytes", n);
                for &byte in &buf[..n] {
                    match parser.feed(byte) {
                        Ok(Some(frame)) => match PeerMessage::from_frame(&frame) {
                            Ok(message) => {
                                if let Link::Connecting { .. } = link {
                                    info!("Companion link up");
                                    link = Link::Open;
                                    EVENT_CHANNEL.send(Event::DataLayerConnected).await;
                                }
                                handle_message(message, link == Link::Open).await;
                            }
                            Err(e) => warn!("Failed to parse peer message: {:?}", e),
                        },
                        Ok(None) => {}
                        Err(e) => warn!("Frame parse error: {:?}", e),
                    }
                }
            }
            Either3::First(Err(e)) => {
                warn!("UART read error: {:?}", e);
            }
            Either3::Second(LinkCommand::Connect) => {
                // A disconnect may have been overwritten by this request, so
                // an open link still has to report itself again
                link = Link::Connecting {
                    deadline: Instant::now() + CONNECT_TIMEOUT,
                };
            }
            Either3::Second(LinkCommand::Disconnect) => {
                link = Link::Closed;
                parser.reset();
            }
            Either3::Third(()) => {
                warn!("Companion link timed out");
                link = Link::Closed;
                EVENT_CHANNEL.send(Event::DataLayerFailed(ERROR_TIMEOUT)).await;
            }
        }
    }
}

/// Act on one message from the phone
async fn handle_message(message: PeerMessage, open: bool) {
    match message {
        PeerMessage::Ping => {
            trace!("PING received");
            PONG_REQUEST.signal(());
        }
        PeerMessage::TimeSync { epoch_ms } => {
            debug!("Wall time set to {=i64}ms", epoch_ms);
            clock::set_wall_time(epoch_ms);
            // The shown minute may have jumped
            EVENT_CHANNEL.send(Event::TimeTick).await;
        }
        PeerMessage::Timezone { offset_secs } => {
            let previous = ZONE_OFFSET.swap(offset_secs, Ordering::Relaxed);
            if previous != offset_secs && TIMEZONE_LISTENING.load(Ordering::Relaxed) {
                EVENT_CHANNEL.send(Event::TimezoneChanged).await;
            }
        }
        PeerMessage::DataChanged(item) => match item.weather() {
            Some(payload) if open => {
                debug!("Weather item: {:?}", payload);
                EVENT_CHANNEL
                    .send(Event::WeatherPushReceived(WeatherSample::from(payload)))
                    .await;
            }
            Some(_) => debug!("Weather item while link closed, dropped"),
            None => debug!("Ignoring data item {}", item.path.as_str()),
        },
        PeerMessage::DataDeleted(path) => {
            debug!("Data item {} deleted", path.as_str());
        }
    }
}
