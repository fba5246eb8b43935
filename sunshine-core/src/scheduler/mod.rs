//! Render scheduler
//!
//! Decides whether the periodic redraw tick runs and when the next one
//! fires. Ticks only run while the face is visible and interactive, and they
//! land on whole-interval boundaries of the wall clock.

pub mod ticker;

pub use ticker::{aligned_delay_ms, RenderScheduler, SchedulerState, TickOutcome};

/// Default redraw interval while interactive
pub const DEFAULT_INTERVAL_MS: u32 = 1000;

/// Identifies one scheduled tick
///
/// Tokens increase monotonically per scheduler, so a tick posted before a
/// cancel can never be mistaken for the one scheduled after it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TickToken(pub u32);
