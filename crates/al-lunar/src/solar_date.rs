//! `SolarDate` — a validated civil calendar date.
//!
//! Dates on or after 1582-10-15 are Gregorian; earlier dates are Julian,
//! matching the calendar actually in force. The ten days skipped at the
//! Gregorian adoption (1582-10-05 through 1582-10-14) are rejected.

use std::fmt;

use al_core::errors::{Error, Result};

/// A date in the civil (hybrid Julian/Gregorian) calendar.
///
/// Construction validates the day-of-month against the calendar in force
/// for the year, so every value of this type names a day that actually
/// occurred (or will). There is no enforced lower bound on the year;
/// dates before recorded civil calendars are accepted and treated
/// proleptically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SolarDate {
    year: i32,
    month: u8,
    day: u8,
}

impl SolarDate {
    /// Create a date from year, month (1–12), and day-of-month.
    pub fn from_ymd(year: i32, month: u8, day: u8) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::Date(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        if year == 1582 && month == 10 && (5..=14).contains(&day) {
            return Err(Error::Date(format!(
                "1582-10-{day:02} was skipped at the Gregorian calendar adoption"
            )));
        }
        Ok(SolarDate { year, month, day })
    }

    /// Return the year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Return the day of the month (1–31).
    pub fn day(&self) -> u8 {
        self.day
    }
}

impl fmt::Display for SolarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

/// Return `true` if `year` is a leap year in the calendar in force that
/// year: the Julian rule (every fourth year) through 1582, the Gregorian
/// century rule after.
pub fn is_leap_year(year: i32) -> bool {
    if year <= 1582 {
        year.rem_euclid(4) == 0
    } else {
        year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
    }
}

/// Return the number of days in the given month.
pub fn days_in_month(year: i32, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}
