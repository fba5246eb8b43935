//! Clock source
//!
//! Wraps the wall clock and the timezone the face is currently showing.
//! The zone is only re-read from the system when told to, which mirrors how
//! the host announces timezone changes as discrete events.

use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, Offset, Timelike, Utc};

use crate::traits::WallClock;

/// A single instant broken down in the face's current timezone
///
/// Never stored across draws; take a fresh one with [`ClockSource::now`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeSnapshot {
    /// Milliseconds since the Unix epoch (UTC) this snapshot was taken at
    epoch_ms: i64,
    /// Local wall time in the zone active at capture
    local: NaiveDateTime,
}

impl TimeSnapshot {
    /// Break `epoch_ms` down in a zone `offset_secs` east of UTC
    ///
    /// Offsets outside ±24h are treated as UTC, and instants chrono cannot
    /// represent collapse to the epoch.
    pub fn from_epoch_ms(epoch_ms: i64, offset_secs: i32) -> Self {
        let zone = FixedOffset::east_opt(offset_secs).unwrap_or_else(|| Utc.fix());
        let utc = DateTime::<Utc>::from_timestamp_millis(epoch_ms).unwrap_or_default();
        Self {
            epoch_ms,
            local: utc.with_timezone(&zone).naive_local(),
        }
    }

    /// Build a snapshot straight from a local calendar time (tests, replay)
    pub fn from_local(local: NaiveDateTime, offset_secs: i32) -> Self {
        let epoch_ms = local.and_utc().timestamp_millis() - i64::from(offset_secs) * 1000;
        Self { epoch_ms, local }
    }

    pub fn epoch_ms(&self) -> i64 {
        self.epoch_ms
    }

    /// Hour of day, 0-23
    pub fn hour(&self) -> u32 {
        self.local.hour()
    }

    pub fn minute(&self) -> u32 {
        self.local.minute()
    }

    pub fn second(&self) -> u32 {
        self.local.second()
    }

    /// Day of week, 0 = Monday
    pub fn weekday0(&self) -> u32 {
        self.local.weekday().num_days_from_monday()
    }

    /// Day of month, 1-31
    pub fn day(&self) -> u32 {
        self.local.day()
    }

    /// Month, 0 = January
    pub fn month0(&self) -> u32 {
        self.local.month0()
    }

    pub fn year(&self) -> i32 {
        self.local.year()
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TimeSnapshot {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "{=i32}-{=u32}-{=u32} {=u32}:{=u32}:{=u32}",
            self.year(),
            self.month0() + 1,
            self.day(),
            self.hour(),
            self.minute(),
            self.second()
        );
    }
}

/// Wall clock plus the timezone currently applied to it
#[derive(Debug)]
pub struct ClockSource<C> {
    clock: C,
    /// Offset east of UTC in seconds, as of the last zone refresh
    offset_secs: i32,
}

impl<C: WallClock> ClockSource<C> {
    /// Create a clock source using the system zone at this moment
    pub fn new(clock: C) -> Self {
        let offset_secs = clock.system_zone();
        Self { clock, offset_secs }
    }

    /// Current instant in the active zone
    pub fn now(&self) -> TimeSnapshot {
        TimeSnapshot::from_epoch_ms(self.clock.now_ms(), self.offset_secs)
    }

    /// Raw wall-clock milliseconds, used for tick alignment
    pub fn now_ms(&self) -> i64 {
        self.clock.now_ms()
    }

    /// Re-read the system zone; every later [`ClockSource::now`] uses it
    pub fn on_timezone_changed(&mut self) {
        self.offset_secs = self.clock.system_zone();
    }

    /// Offset currently applied, seconds east of UTC
    pub fn offset_secs(&self) -> i32 {
        self.offset_secs
    }

    pub fn wall_clock(&self) -> &C {
        &self.clock
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use core::cell::Cell;

    /// Settable clock for tests
    struct FakeClock {
        now_ms: Cell<i64>,
        zone: Cell<i32>,
    }

    impl WallClock for FakeClock {
        fn now_ms(&self) -> i64 {
            self.now_ms.get()
        }

        fn system_zone(&self) -> i32 {
            self.zone.get()
        }
    }

    fn fake(now_ms: i64, zone: i32) -> FakeClock {
        FakeClock {
            now_ms: Cell::new(now_ms),
            zone: Cell::new(zone),
        }
    }

    // 2025-03-05 14:05:09 UTC
    const MARCH_5_2025: i64 = 1_741_183_509_000;

    #[test]
    fn test_snapshot_fields() {
        let snap = TimeSnapshot::from_epoch_ms(MARCH_5_2025, 0);
        assert_eq!((snap.hour(), snap.minute(), snap.second()), (14, 5, 9));
        assert_eq!((snap.year(), snap.month0(), snap.day()), (2025, 2, 5));
        assert_eq!(snap.weekday0(), 2); // Wednesday
    }

    #[test]
    fn test_offset_applies() {
        let snap = TimeSnapshot::from_epoch_ms(MARCH_5_2025, -5 * 3600);
        assert_eq!(snap.hour(), 9);
        assert_eq!(snap.epoch_ms(), MARCH_5_2025);
    }

    #[test]
    fn test_offset_crosses_midnight() {
        let snap = TimeSnapshot::from_epoch_ms(MARCH_5_2025, 10 * 3600 + 1800);
        assert_eq!((snap.day(), snap.hour(), snap.minute()), (6, 0, 35));
        assert_eq!(snap.weekday0(), 3);
    }

    #[test]
    fn test_invalid_offset_falls_back_to_utc() {
        let snap = TimeSnapshot::from_epoch_ms(MARCH_5_2025, 90_000);
        assert_eq!(snap.hour(), 14);
    }

    #[test]
    fn test_from_local_matches_epoch() {
        let local = NaiveDate::from_ymd_opt(2025, 3, 5)
            .unwrap()
            .and_hms_opt(15, 5, 9)
            .unwrap();
        let snap = TimeSnapshot::from_local(local, 3600);
        assert_eq!(snap.epoch_ms(), MARCH_5_2025);
        assert_eq!(snap, TimeSnapshot::from_epoch_ms(MARCH_5_2025, 3600));
    }

    #[test]
    fn test_zone_only_changes_on_notification() {
        let mut source = ClockSource::new(fake(MARCH_5_2025, 0));
        assert_eq!(source.now().hour(), 14);

        // System zone moves, but the face keeps the old one until told
        source.wall_clock().zone.set(2 * 3600);
        assert_eq!(source.now().hour(), 14);

        source.on_timezone_changed();
        assert_eq!(source.offset_secs(), 7200);
        assert_eq!(source.now().hour(), 16);
    }

    #[test]
    fn test_now_is_fresh_each_call() {
        let source = ClockSource::new(fake(MARCH_5_2025, 0));
        let first = source.now();
        source.wall_clock().now_ms.set(MARCH_5_2025 + 1000);
        let second = source.now();
        assert_eq!(second.second(), first.second() + 1);
    }
}
