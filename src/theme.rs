//! Day/night theme policy.

use embedded_graphics::pixelcolor::BinaryColor;

/// Night begins at 6PM and ends at 5AM.
pub const NIGHT_START_HOUR: u8 = 18;
pub const NIGHT_END_HOUR: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ThemeMode {
    Day,
    Night,
}

impl ThemeMode {
    /// Classifies an hour of the day. Night covers [18,24) and [0,5).
    pub fn classify(hour: u8) -> Self {
        if hour >= NIGHT_START_HOUR || hour < NIGHT_END_HOUR {
            ThemeMode::Night
        } else {
            ThemeMode::Day
        }
    }

    /// Color pair for this mode: white-on-black at night, black-on-white by
    /// day. `BinaryColor::On` is the lit (white) state of the panel.
    pub fn palette(self) -> Palette {
        match self {
            ThemeMode::Day => Palette {
                background: BinaryColor::On,
                ink: BinaryColor::Off,
            },
            ThemeMode::Night => Palette {
                background: BinaryColor::Off,
                ink: BinaryColor::On,
            },
        }
    }
}

/// Matched background/foreground pair. Every element of a render (surface
/// background, the three text regions, the midnight marker and the progress
/// ring) takes its color from a single palette, so they cannot disagree
/// within one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub background: BinaryColor,
    pub ink: BinaryColor,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn night_spans_evening_and_early_morning() {
        assert_eq!(ThemeMode::classify(18), ThemeMode::Night);
        assert_eq!(ThemeMode::classify(23), ThemeMode::Night);
        assert_eq!(ThemeMode::classify(0), ThemeMode::Night);
        assert_eq!(ThemeMode::classify(4), ThemeMode::Night);
    }

    #[test]
    fn day_spans_five_to_six_pm() {
        assert_eq!(ThemeMode::classify(5), ThemeMode::Day);
        assert_eq!(ThemeMode::classify(12), ThemeMode::Day);
        assert_eq!(ThemeMode::classify(17), ThemeMode::Day);
    }

    #[test]
    fn palettes_are_inverted_pairs() {
        let day = ThemeMode::Day.palette();
        let night = ThemeMode::Night.palette();
        assert_eq!(day.background, BinaryColor::On);
        assert_eq!(day.ink, BinaryColor::Off);
        assert_eq!(night.background, BinaryColor::Off);
        assert_eq!(night.ink, BinaryColor::On);
    }

    #[test]
    fn reapplying_a_mode_is_a_no_op() {
        let first = ThemeMode::Night.palette();
        let second = ThemeMode::Night.palette();
        assert_eq!(first, second);
    }
}
