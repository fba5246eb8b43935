//! Weekday and month names for the date line

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Available name tables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LocaleId {
    #[default]
    English,
    Spanish,
    German,
}

/// Short display names, Monday first and January first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    pub weekdays: [&'static str; 7],
    pub months: [&'static str; 12],
}

pub const ENGLISH: Locale = Locale {
    weekdays: ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"],
    months: [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ],
};

pub const SPANISH: Locale = Locale {
    weekdays: ["lun", "mar", "mié", "jue", "vie", "sáb", "dom"],
    months: [
        "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sept", "oct", "nov", "dic",
    ],
};

pub const GERMAN: Locale = Locale {
    weekdays: ["Mo", "Di", "Mi", "Do", "Fr", "Sa", "So"],
    months: [
        "Jan", "Feb", "März", "Apr", "Mai", "Juni", "Juli", "Aug", "Sept", "Okt", "Nov", "Dez",
    ],
};

impl LocaleId {
    pub const fn table(self) -> &'static Locale {
        match self {
            LocaleId::English => &ENGLISH,
            LocaleId::Spanish => &SPANISH,
            LocaleId::German => &GERMAN,
        }
    }
}

impl Locale {
    /// Short weekday name, 0 = Monday; out of range wraps
    pub fn weekday(&self, weekday0: u32) -> &'static str {
        self.weekdays[weekday0 as usize % 7]
    }

    /// Short month name, 0 = January; out of range wraps
    pub fn month(&self, month0: u32) -> &'static str {
        self.months[month0 as usize % 12]
    }
}

impl Default for Locale {
    fn default() -> Self {
        ENGLISH
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup() {
        let en = LocaleId::English.table();
        assert_eq!(en.weekday(2), "Wed");
        assert_eq!(en.month(2), "Mar");
        assert_eq!(LocaleId::German.table().month(2), "März");
        assert_eq!(LocaleId::Spanish.table().weekday(6), "dom");
    }

    #[test]
    fn test_out_of_range_wraps() {
        assert_eq!(ENGLISH.weekday(7), "Mon");
        assert_eq!(ENGLISH.month(13), "Feb");
    }
}
