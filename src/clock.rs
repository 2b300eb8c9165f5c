//! Host clock seam: broken-down wall time, the clock source trait and the
//! coalesced change-unit set delivered with each tick.

use enumset::EnumSetType;

/// Local wall-clock time broken down for display. Sampled fresh from the
/// host clock at each tick and treated as immutable while the tick is
/// processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct WallTime {
    pub year: u16,
    /// 0-23.
    pub hour: u8,
    /// 0-59.
    pub minute: u8,
    /// 0 = Sunday.
    pub weekday: u8,
    pub day_of_month: u8,
    /// 1-based ordinal day within the year, 1 = Jan 1.
    pub day_of_year: u16,
}

pub fn weekday_name(weekday: u8) -> &'static str {
    const WEEK_NAMES: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];
    WEEK_NAMES[weekday as usize % 7]
}

/// Source of the current wall-clock time. The host clock contract is
/// trusted: values are always in range, so reads cannot fail.
pub trait ClockSource {
    fn now(&mut self) -> WallTime;
}

/// Time units that changed since the previous notification. The host
/// delivers these as a coalesced set at minute granularity; a day rollover
/// arrives together with the minute that caused it.
#[derive(EnumSetType, Debug)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TimeUnit {
    Minute,
    Hour,
    Day,
    Month,
    Year,
}
