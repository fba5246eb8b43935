//! Companion link transmit task
//!
//! Answers heartbeats from the phone.

use defmt::*;
use embassy_rp::uart::BufferedUartTx;
use embedded_io_async::Write;

use sunshine_protocol::frame::MAX_FRAME_SIZE;
use sunshine_protocol::WatchMessage;

use crate::channels::PONG_REQUEST;

#[embassy_executor::task]
pub async fn peer_tx_task(mut tx: BufferedUartTx) {
    info!("Peer TX task started");

    loop {
        PONG_REQUEST.wait().await;
        send(&mut tx, WatchMessage::Pong).await;
    }
}

async fn send(tx: &mut BufferedUartTx, message: WatchMessage) {
    let mut buf = [0u8; MAX_FRAME_SIZE];
    match message.to_frame().encode(&mut buf) {
        Ok(len) => {
            if let Err(e) = tx.write_all(&buf[..len]).await {
                warn!("Failed to send {:?}: {:?}", message, e);
            } else {
                trace!("{:?} sent", message);
            }
        }
        Err(e) => warn!("Failed to encode {:?}: {:?}", message, e),
    }
}
