//! Display mode

/// Power state of the display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayMode {
    /// Full detail, redrawn every second
    #[default]
    Interactive,
    /// Low power: no seconds, no divider, no weather block
    Ambient,
}

impl DisplayMode {
    pub const fn from_ambient(in_ambient: bool) -> Self {
        if in_ambient {
            DisplayMode::Ambient
        } else {
            DisplayMode::Interactive
        }
    }

    pub const fn is_ambient(self) -> bool {
        matches!(self, DisplayMode::Ambient)
    }
}
