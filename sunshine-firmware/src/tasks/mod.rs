//! Embassy async tasks
//!
//! Each task runs independently and communicates via channels/signals.

pub mod button;
pub mod face;
pub mod peer_rx;
pub mod peer_tx;
pub mod tick;

pub use button::{button_task, ButtonConfig};
pub use face::{face_task, Display};
pub use peer_rx::peer_rx_task;
pub use peer_tx::peer_tx_task;
pub use tick::{tick_task, time_tick_task};
