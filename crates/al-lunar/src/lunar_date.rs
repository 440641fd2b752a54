//! `LunarDate` — a date in the Vietnamese lunisolar calendar.

use std::fmt;

use al_core::errors::{Error, Result};

/// A lunisolar calendar date.
///
/// `year` is the *lunar* year, which differs from the Gregorian year of
/// the same day near the new-year boundary (the weeks between January 1
/// and Tết belong to the previous lunar year). A leap month repeats its
/// predecessor's number with `is_leap_month` set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LunarDate {
    /// Day of the lunar month (1–30).
    pub day: u8,
    /// Lunar month (1–12).
    pub month: u8,
    /// Lunar year.
    pub year: i32,
    /// `true` if this date falls in the intercalary (leap) month.
    pub is_leap_month: bool,
}

impl LunarDate {
    /// Create a lunar date, validating field ranges.
    ///
    /// Range validation only: a structurally valid lunar date may still
    /// not occur in its year (a 30th day of a 29-day month, or a leap
    /// flag on the wrong month). [`LunarCalendar::lunar_to_solar`]
    /// reports those as [`Error::NonexistentLunarDate`].
    ///
    /// [`LunarCalendar::lunar_to_solar`]: crate::convert::LunarCalendar::lunar_to_solar
    /// [`Error::NonexistentLunarDate`]: al_core::Error::NonexistentLunarDate
    pub fn new(day: u8, month: u8, year: i32, is_leap_month: bool) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::Date(format!(
                "lunar month {month} out of range [1, 12]"
            )));
        }
        if !(1..=30).contains(&day) {
            return Err(Error::Date(format!("lunar day {day} out of range [1, 30]")));
        }
        Ok(LunarDate {
            day,
            month,
            year,
            is_leap_month,
        })
    }
}

impl fmt::Display for LunarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}/{}", self.day, self.month, self.year)?;
        if self.is_leap_month {
            write!(f, " (leap month)")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_validation() {
        assert!(LunarDate::new(1, 1, 2024, false).is_ok());
        assert!(LunarDate::new(30, 12, 2024, false).is_ok());
        assert!(LunarDate::new(0, 1, 2024, false).is_err());
        assert!(LunarDate::new(31, 1, 2024, false).is_err());
        assert!(LunarDate::new(15, 0, 2024, false).is_err());
        assert!(LunarDate::new(15, 13, 2024, false).is_err());
    }

    #[test]
    fn display_format() {
        let common = LunarDate::new(10, 3, 2025, false).unwrap();
        assert_eq!(common.to_string(), "10/3/2025");
        let leap = LunarDate::new(1, 2, 2023, true).unwrap();
        assert_eq!(leap.to_string(), "1/2/2023 (leap month)");
    }
}
