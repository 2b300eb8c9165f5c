//! Pure calendar math for the year countdown.

/// Gregorian leap-year rule.
pub fn is_leap_year(year: u16) -> bool {
    year % 400 == 0 || (year % 4 == 0 && year % 100 != 0)
}

/// Number of days in `year`.
pub fn year_length(year: u16) -> u16 {
    if is_leap_year(year) { 366 } else { 365 }
}

/// Days left in `year` after the 1-based `day_of_year` (1 = Jan 1).
///
/// The calendar source is trusted, so the input is not range-checked; a
/// day-of-year past the end of the year yields a negative count.
pub fn days_remaining(year: u16, day_of_year: u16) -> i16 {
    year_length(year) as i16 - day_of_year as i16
}
