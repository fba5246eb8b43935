//! Time and date strings

use core::fmt::Write;

use super::draw::Text;
use crate::clock::TimeSnapshot;
use crate::config::Locale;
use crate::state::DisplayMode;

/// `HH:MM:SS` when interactive, `HH:MM` in ambient; 24-hour, zero padded
pub fn format_time(time: &TimeSnapshot, mode: DisplayMode) -> Text {
    let mut text = Text::new();
    let _ = match mode {
        DisplayMode::Interactive => write!(
            text,
            "{:02}:{:02}:{:02}",
            time.hour(),
            time.minute(),
            time.second()
        ),
        DisplayMode::Ambient => write!(text, "{:02}:{:02}", time.hour(), time.minute()),
    };
    text
}

/// `WED, MAR 5, 2025` in the given locale, uppercased
pub fn format_date(time: &TimeSnapshot, locale: &Locale) -> Text {
    let mut plain = Text::new();
    let _ = write!(
        plain,
        "{}, {} {}, {}",
        locale.weekday(time.weekday0()),
        locale.month(time.month0()),
        time.day(),
        time.year()
    );

    let mut text = Text::new();
    for c in plain.chars().flat_map(char::to_uppercase) {
        if text.push(c).is_err() {
            break;
        }
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LocaleId;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> TimeSnapshot {
        let local = NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, min, s)
            .unwrap();
        TimeSnapshot::from_local(local, 0)
    }

    #[test]
    fn test_time_by_mode() {
        let t = at(2025, 3, 5, 14, 5, 9);
        assert_eq!(format_time(&t, DisplayMode::Interactive), "14:05:09");
        assert_eq!(format_time(&t, DisplayMode::Ambient), "14:05");
    }

    #[test]
    fn test_time_is_24_hour_padded() {
        let t = at(2025, 1, 1, 0, 0, 7);
        assert_eq!(format_time(&t, DisplayMode::Interactive), "00:00:07");
        let t = at(2025, 1, 1, 23, 59, 59);
        assert_eq!(format_time(&t, DisplayMode::Ambient), "23:59");
    }

    #[test]
    fn test_date_english() {
        let t = at(2025, 3, 5, 14, 5, 9);
        assert_eq!(format_date(&t, LocaleId::English.table()), "WED, MAR 5, 2025");
    }

    #[test]
    fn test_date_localized() {
        let t = at(2025, 3, 5, 14, 5, 9);
        assert_eq!(format_date(&t, LocaleId::German.table()), "MI, MÄRZ 5, 2025");
        assert_eq!(format_date(&t, LocaleId::Spanish.table()), "MIÉ, MAR 5, 2025");
    }
}
