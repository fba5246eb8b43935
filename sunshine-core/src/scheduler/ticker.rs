//! Tick state machine

use super::{TickToken, DEFAULT_INTERVAL_MS};
use crate::state::DisplayMode;
use crate::traits::TickTimer;

/// Whether periodic ticks are running
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SchedulerState {
    Running,
    Stopped,
}

/// What a delivered tick meant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TickOutcome {
    /// The pending tick fired; the face should redraw
    Fired,
    /// Cancelled or superseded; ignore it
    Stale,
}

/// Delay until the next multiple of `interval_ms` after `now_ms`
///
/// Always in `1..=interval_ms`; an instant exactly on a boundary waits a
/// full interval.
pub fn aligned_delay_ms(now_ms: i64, interval_ms: u32) -> u32 {
    let interval = i64::from(interval_ms.max(1));
    (interval - now_ms.rem_euclid(interval)) as u32
}

/// Running/Stopped machine with at most one pending tick
#[derive(Debug, Clone)]
pub struct RenderScheduler {
    state: SchedulerState,
    pending: Option<TickToken>,
    next_token: u32,
    interval_ms: u32,
}

impl Default for RenderScheduler {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL_MS)
    }
}

impl RenderScheduler {
    pub const fn new(interval_ms: u32) -> Self {
        Self {
            state: SchedulerState::Stopped,
            pending: None,
            next_token: 0,
            interval_ms: if interval_ms == 0 { 1 } else { interval_ms },
        }
    }

    /// Ticks run only while visible and interactive
    pub fn should_run(visible: bool, mode: DisplayMode) -> bool {
        visible && mode == DisplayMode::Interactive
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SchedulerState::Running
    }

    /// Token of the tick currently waiting in the timer
    pub fn pending(&self) -> Option<TickToken> {
        self.pending
    }

    pub fn interval_ms(&self) -> u32 {
        self.interval_ms
    }

    /// Re-evaluate after `visible` or `mode` may have changed
    ///
    /// Any pending tick is cancelled first. When the machine should run, a
    /// fresh tick is scheduled with the delay aligned from `now_ms`.
    pub fn evaluate<T: TickTimer + ?Sized>(
        &mut self,
        visible: bool,
        mode: DisplayMode,
        now_ms: i64,
        timer: &mut T,
    ) -> SchedulerState {
        self.cancel_pending(timer);
        if Self::should_run(visible, mode) {
            self.state = SchedulerState::Running;
            self.schedule(now_ms, timer);
        } else {
            self.state = SchedulerState::Stopped;
        }
        self.state
    }

    /// Handle a tick delivered by the timer
    ///
    /// Only the pending token counts. When it fires and the machine is still
    /// running, the next aligned tick is scheduled.
    pub fn on_tick<T: TickTimer + ?Sized>(
        &mut self,
        token: TickToken,
        now_ms: i64,
        timer: &mut T,
    ) -> TickOutcome {
        if self.pending != Some(token) {
            return TickOutcome::Stale;
        }
        self.pending = None;
        if self.is_running() {
            self.schedule(now_ms, timer);
        }
        TickOutcome::Fired
    }

    /// Stop and cancel whatever is pending (teardown)
    pub fn cancel<T: TickTimer + ?Sized>(&mut self, timer: &mut T) {
        self.cancel_pending(timer);
        self.state = SchedulerState::Stopped;
    }

    fn cancel_pending<T: TickTimer + ?Sized>(&mut self, timer: &mut T) {
        if let Some(token) = self.pending.take() {
            timer.cancel_tick(token);
        }
    }

    fn schedule<T: TickTimer + ?Sized>(&mut self, now_ms: i64, timer: &mut T) {
        let token = TickToken(self.next_token);
        self.next_token = self.next_token.wrapping_add(1);
        self.pending = Some(token);
        timer.schedule_tick(token, aligned_delay_ms(now_ms, self.interval_ms));
    }
}
