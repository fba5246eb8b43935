//! Host services the face calls out to

use crate::scheduler::TickToken;

/// System wall clock
pub trait WallClock {
    /// Milliseconds since the Unix epoch, UTC
    fn now_ms(&self) -> i64;

    /// Current system timezone as seconds east of UTC
    fn system_zone(&self) -> i32;
}

/// One-shot delayed self-post onto the face's event queue
///
/// When the delay elapses the host delivers `Event::Tick(token)` back to the
/// controller. Cancelling must stop a not-yet-delivered tick; a tick that
/// already left the timer is filtered out by its token instead.
pub trait TickTimer {
    fn schedule_tick(&mut self, token: TickToken, delay_ms: u32);

    fn cancel_tick(&mut self, token: TickToken);
}

/// Everything the controller asks of the platform
pub trait FaceHost: TickTimer {
    /// Start connecting the push channel; the result arrives later as a
    /// `DataLayerConnected`, `DataLayerSuspended` or `DataLayerFailed` event
    fn connect_data_layer(&mut self);

    /// Detach the data listener (if any) and drop the connection
    fn disconnect_data_layer(&mut self);

    /// Start delivering `TimezoneChanged` events
    fn register_timezone_receiver(&mut self);

    fn unregister_timezone_receiver(&mut self);

    /// Ask for a draw pass; the host calls back into `draw` when it can
    fn invalidate(&mut self);
}
