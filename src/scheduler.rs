//! Event-coalescing update scheduler.
//!
//! Two independent staleness axes: minute-resolution (theme, time text, ring
//! geometry) and day-resolution (date text, year countdown). A one-shot
//! first-run override forces both axes on the very first notification, no
//! matter which units the host reports as changed.

use core::fmt::Write;

use enumset::EnumSet;
use heapless::String;

use crate::calendar;
use crate::clock::{TimeUnit, WallTime, weekday_name};
use crate::config::TimeStyle;
use crate::theme::ThemeMode;

/// Last hour/minute handed to the renderer, plus the first-run flag. Owned
/// and mutated only by the scheduler; the renderer reads it between ticks,
/// so a forced repaint before any tick sees midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayState {
    pub hour: u8,
    pub minute: u8,
    pub first_render: bool,
}

impl Default for DisplayState {
    fn default() -> Self {
        Self {
            hour: 0,
            minute: 0,
            first_render: true,
        }
    }
}

/// Display text cached between qualifying ticks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormattedStrings {
    /// "23:59" or "11:59".
    pub time_text: String<5>,
    /// Weekday abbreviation plus day of month, e.g. "Thu 12".
    pub date_text: String<6>,
    /// Days remaining in the year; negative in the degenerate case.
    pub days_left_text: String<8>,
}

pub struct UpdateScheduler {
    time_style: TimeStyle,
    state: DisplayState,
    strings: FormattedStrings,
    theme: ThemeMode,
    redraw_wanted: bool,
}

impl UpdateScheduler {
    pub fn new(time_style: TimeStyle) -> Self {
        Self {
            time_style,
            state: DisplayState::default(),
            strings: FormattedStrings::default(),
            theme: ThemeMode::classify(0),
            redraw_wanted: false,
        }
    }

    pub fn state(&self) -> &DisplayState {
        &self.state
    }

    pub fn strings(&self) -> &FormattedStrings {
        &self.strings
    }

    /// Mode applied by the most recent minute-axis update.
    pub fn theme(&self) -> ThemeMode {
        self.theme
    }

    /// Consumes the pending redraw request, if any.
    pub fn take_redraw(&mut self) -> bool {
        core::mem::take(&mut self.redraw_wanted)
    }

    /// Handles one coalesced time notification. The minute axis runs before
    /// the day axis; each checks its own trigger, and both may fire in the
    /// same notification (a day rollover always arrives with its minute).
    pub fn notify(&mut self, now: &WallTime, changed: EnumSet<TimeUnit>) {
        if changed.contains(TimeUnit::Minute) || self.state.first_render {
            self.minute_update(now);
        }
        if changed.contains(TimeUnit::Day) || self.state.first_render {
            self.day_update(now);
        }
    }

    fn minute_update(&mut self, now: &WallTime) {
        self.theme = ThemeMode::classify(now.hour);

        let hour = match self.time_style {
            TimeStyle::H24 => now.hour,
            TimeStyle::H12 => match now.hour % 12 {
                0 => 12,
                h => h,
            },
        };
        self.strings.time_text.clear();
        write!(self.strings.time_text, "{:02}:{:02}", hour, now.minute).ok();

        self.state.hour = now.hour;
        self.state.minute = now.minute;
        self.redraw_wanted = true;

        crate::debug!(
            "minute update: {} theme={:?}",
            self.strings.time_text.as_str(),
            self.theme
        );
    }

    fn day_update(&mut self, now: &WallTime) {
        let days_left = calendar::days_remaining(now.year, now.day_of_year);

        self.strings.date_text.clear();
        write!(
            self.strings.date_text,
            "{} {:02}",
            weekday_name(now.weekday),
            now.day_of_month
        )
        .ok();

        self.strings.days_left_text.clear();
        write!(self.strings.days_left_text, "{}", days_left).ok();

        if self.state.first_render {
            self.state.first_render = false;
        }

        crate::debug!(
            "day update: {} days left after {}",
            days_left,
            self.strings.date_text.as_str()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_time() -> WallTime {
        // Thu Feb 29 2024, 20:15.
        WallTime {
            year: 2024,
            hour: 20,
            minute: 15,
            weekday: 4,
            day_of_month: 29,
            day_of_year: 60,
        }
    }

    #[test]
    fn first_notification_fires_both_axes() {
        let mut scheduler = UpdateScheduler::new(TimeStyle::H24);
        scheduler.notify(&sample_time(), EnumSet::empty());

        assert_eq!(scheduler.strings().time_text.as_str(), "20:15");
        assert_eq!(scheduler.strings().date_text.as_str(), "Thu 29");
        assert_eq!(scheduler.strings().days_left_text.as_str(), "306");
        assert_eq!(scheduler.state().hour, 20);
        assert_eq!(scheduler.state().minute, 15);
        assert!(!scheduler.state().first_render);
        assert_eq!(scheduler.theme(), ThemeMode::Night);
        assert!(scheduler.take_redraw());
    }

    #[test]
    fn first_run_override_is_cleared_permanently() {
        let mut scheduler = UpdateScheduler::new(TimeStyle::H24);
        scheduler.notify(&sample_time(), EnumSet::empty());
        scheduler.take_redraw();

        // A later empty notification must not re-run either axis.
        let mut later = sample_time();
        later.minute = 16;
        scheduler.notify(&later, EnumSet::empty());
        assert_eq!(scheduler.state().minute, 15);
        assert!(!scheduler.take_redraw());
    }

    #[test]
    fn minute_change_updates_time_but_not_date() {
        let mut scheduler = UpdateScheduler::new(TimeStyle::H24);
        scheduler.notify(&sample_time(), EnumSet::empty());
        scheduler.take_redraw();

        let mut later = sample_time();
        later.minute = 16;
        later.day_of_month = 1;
        scheduler.notify(&later, TimeUnit::Minute.into());

        assert_eq!(scheduler.strings().time_text.as_str(), "20:16");
        assert_eq!(scheduler.strings().date_text.as_str(), "Thu 29");
        assert!(scheduler.take_redraw());
    }

    #[test]
    fn day_change_updates_date_without_requesting_redraw() {
        let mut scheduler = UpdateScheduler::new(TimeStyle::H24);
        scheduler.notify(&sample_time(), EnumSet::empty());
        scheduler.take_redraw();

        let mut next_day = sample_time();
        next_day.weekday = 5;
        next_day.day_of_month = 1;
        next_day.day_of_year = 61;
        scheduler.notify(&next_day, TimeUnit::Day.into());

        assert_eq!(scheduler.strings().date_text.as_str(), "Fri 01");
        assert_eq!(scheduler.strings().days_left_text.as_str(), "305");
        // Geometry depends only on hour/minute, so no repaint is forced.
        assert!(!scheduler.take_redraw());
    }

    #[test]
    fn midnight_rollover_fires_both_axes() {
        let mut scheduler = UpdateScheduler::new(TimeStyle::H24);
        scheduler.notify(&sample_time(), EnumSet::empty());
        scheduler.take_redraw();

        let rollover = WallTime {
            year: 2024,
            hour: 0,
            minute: 0,
            weekday: 5,
            day_of_month: 1,
            day_of_year: 61,
        };
        scheduler.notify(
            &rollover,
            TimeUnit::Minute | TimeUnit::Hour | TimeUnit::Day,
        );

        assert_eq!(scheduler.strings().time_text.as_str(), "00:00");
        assert_eq!(scheduler.strings().date_text.as_str(), "Fri 01");
        assert_eq!(scheduler.theme(), ThemeMode::Night);
        assert!(scheduler.take_redraw());
    }

    #[test]
    fn twelve_hour_style_maps_zero_and_noon_to_twelve() {
        let mut scheduler = UpdateScheduler::new(TimeStyle::H12);

        let mut midnight = sample_time();
        midnight.hour = 0;
        scheduler.notify(&midnight, EnumSet::empty());
        assert_eq!(scheduler.strings().time_text.as_str(), "12:15");

        let mut noon = sample_time();
        noon.hour = 12;
        scheduler.notify(&noon, TimeUnit::Minute.into());
        assert_eq!(scheduler.strings().time_text.as_str(), "12:15");

        let mut evening = sample_time();
        evening.hour = 21;
        scheduler.notify(&evening, TimeUnit::Minute.into());
        assert_eq!(scheduler.strings().time_text.as_str(), "09:15");
    }

    #[test]
    fn degenerate_day_of_year_formats_a_negative_countdown() {
        let mut scheduler = UpdateScheduler::new(TimeStyle::H24);
        let mut odd = sample_time();
        odd.year = 2023;
        odd.day_of_year = 366;
        scheduler.notify(&odd, EnumSet::empty());
        assert_eq!(scheduler.strings().days_left_text.as_str(), "-1");
    }
}
