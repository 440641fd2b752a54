//! Gregorian ↔ lunisolar conversion.
//!
//! The lunar year is anchored on month 11, the month containing (or
//! starting at) the winter solstice. Two successive month-11 starts more
//! than 365 days apart bracket a leap year; the inserted month is the
//! first one after the anchor whose span contains no major solar term.
//! Everything below works on integer local day numbers, so the choice of
//! UTC offset decides which calendar day each new moon falls on — and
//! occasionally shifts a month boundary or Tết itself by a day relative
//! to neighbouring zones.

use al_core::errors::{Error, Result};

use crate::julian;
use crate::lunar_date::LunarDate;
use crate::moon::{self, NEW_MOON_EPOCH, SYNODIC_MONTH};
use crate::solar_date::SolarDate;
use crate::sun;

/// UTC offset of Indochina Time, the zone the Vietnamese calendar is
/// defined against.
pub const INDOCHINA_UTC_OFFSET_HOURS: f64 = 7.0;

/// Lunisolar calendar computations for a fixed UTC offset.
///
/// The astronomy is offset-agnostic; the offset only decides which local
/// calendar day a new moon falls on, and therefore where each lunar
/// month begins. [`Default`] uses UTC+7 (Indochina Time).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarCalendar {
    utc_offset_hours: f64,
}

impl Default for LunarCalendar {
    fn default() -> Self {
        LunarCalendar {
            utc_offset_hours: INDOCHINA_UTC_OFFSET_HOURS,
        }
    }
}

impl LunarCalendar {
    /// Calendar computed in a zone `utc_offset_hours` east of UTC.
    pub fn with_utc_offset(utc_offset_hours: f64) -> Self {
        LunarCalendar { utc_offset_hours }
    }

    /// The UTC offset this calendar computes in.
    pub fn utc_offset_hours(&self) -> f64 {
        self.utc_offset_hours
    }

    /// Return the local day number on which lunar month 11 of `year`
    /// begins.
    ///
    /// The candidate is the new moon nearest December 31. If the sun has
    /// already entered the post-solstice sextant at that new moon, the
    /// solstice month began one lunation earlier, so the previous new
    /// moon is returned instead.
    pub fn month11_day(&self, year: i32) -> i64 {
        let dec31 = SolarDate::from_ymd(year, 12, 31).expect("December 31 is always valid");
        let off = julian::day_number_from_date(&dec31) - 2_415_021;
        let k = (off as f64 / SYNODIC_MONTH).floor() as i64;
        let mut nm = moon::new_moon_day(k, self.utc_offset_hours);
        if sun::major_term_index(nm, self.utc_offset_hours) >= 9 {
            nm = moon::new_moon_day(k - 1, self.utc_offset_hours);
        }
        nm
    }

    /// Return the 1-based offset from the month-11 anchor starting at
    /// local day `a11` to the leap month.
    ///
    /// Scans forward one lunation at a time (capped at 14), classifying
    /// each month start into a major-term sextant; the first month whose
    /// sextant repeats its predecessor's contains no major term and is
    /// the inserted month. Callers must already have established that
    /// the anchor pair spans more than 365 days, which guarantees such a
    /// month exists inside the scan window.
    pub fn leap_month_offset(&self, a11: i64) -> i64 {
        let tz = self.utc_offset_hours;
        let k = ((a11 as f64 - NEW_MOON_EPOCH) / SYNODIC_MONTH + 0.5).floor() as i64;
        let mut i = 1;
        let mut arc = sun::major_term_index(moon::new_moon_day(k + i, tz), tz);
        loop {
            let last = arc;
            i += 1;
            arc = sun::major_term_index(moon::new_moon_day(k + i, tz), tz);
            if arc == last || i >= 14 {
                return i - 1;
            }
        }
    }

    /// Convert a civil date to its lunisolar equivalent.
    ///
    /// Total: every valid [`SolarDate`] maps to a structurally valid
    /// [`LunarDate`].
    pub fn solar_to_lunar(&self, date: &SolarDate) -> LunarDate {
        let tz = self.utc_offset_hours;
        let day_number = julian::day_number_from_date(date);
        let k = ((day_number as f64 - NEW_MOON_EPOCH) / SYNODIC_MONTH).floor() as i64;
        let mut month_start = moon::new_moon_day(k + 1, tz);
        if month_start > day_number {
            month_start = moon::new_moon_day(k, tz);
        }
        let mut a11 = self.month11_day(date.year());
        let mut b11 = a11;
        let mut lunar_year;
        if a11 >= month_start {
            lunar_year = date.year();
            a11 = self.month11_day(date.year() - 1);
        } else {
            lunar_year = date.year() + 1;
            b11 = self.month11_day(date.year() + 1);
        }
        let lunar_day = day_number - month_start + 1;
        // Whole lunations between the anchor and this month's start
        let diff = (month_start - a11) / 29;
        let mut is_leap = false;
        let mut lunar_month = diff + 11;
        if b11 - a11 > 365 {
            let leap_diff = self.leap_month_offset(a11);
            if diff >= leap_diff {
                lunar_month = diff + 10;
                if diff == leap_diff {
                    is_leap = true;
                }
            }
        }
        if lunar_month > 12 {
            lunar_month -= 12;
        }
        // Months 11 and 12 close to the anchor belong to the previous
        // lunar year
        if lunar_month >= 11 && diff < 4 {
            lunar_year -= 1;
        }
        LunarDate {
            day: lunar_day as u8,
            month: lunar_month as u8,
            year: lunar_year,
            is_leap_month: is_leap,
        }
    }

    /// Return the Gregorian date a lunisolar date falls on.
    ///
    /// # Errors
    ///
    /// [`Error::NonexistentLunarDate`] when the date does not occur in
    /// that lunar year: the leap flag names a month that is not the
    /// year's leap month (or the year has none), or the day is beyond
    /// the month's actual length.
    pub fn lunar_to_solar(&self, lunar: &LunarDate) -> Result<SolarDate> {
        let tz = self.utc_offset_hours;
        let (a11, b11) = if lunar.month < 11 {
            (
                self.month11_day(lunar.year - 1),
                self.month11_day(lunar.year),
            )
        } else {
            (
                self.month11_day(lunar.year),
                self.month11_day(lunar.year + 1),
            )
        };
        let k = ((a11 as f64 - NEW_MOON_EPOCH) / SYNODIC_MONTH + 0.5).floor() as i64;
        let mut off = i64::from(lunar.month) - 11;
        if off < 0 {
            off += 12;
        }
        if b11 - a11 > 365 {
            let leap_off = self.leap_month_offset(a11);
            let mut leap_month = leap_off - 2;
            if leap_month < 0 {
                leap_month += 12;
            }
            if lunar.is_leap_month && i64::from(lunar.month) != leap_month {
                return Err(nonexistent(lunar));
            }
            if lunar.is_leap_month || off >= leap_off {
                off += 1;
            }
        } else if lunar.is_leap_month {
            return Err(nonexistent(lunar));
        }
        let month_start = moon::new_moon_day(k + off, tz);
        let month_len = moon::new_moon_day(k + off + 1, tz) - month_start;
        if i64::from(lunar.day) > month_len {
            return Err(nonexistent(lunar));
        }
        Ok(julian::date_from_day_number(
            month_start + i64::from(lunar.day) - 1,
        ))
    }
}

fn nonexistent(lunar: &LunarDate) -> Error {
    Error::NonexistentLunarDate {
        day: lunar.day,
        month: lunar.month,
        year: lunar.year,
        leap: lunar.is_leap_month,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::date_from_day_number;

    fn date(y: i32, m: u8, d: u8) -> SolarDate {
        SolarDate::from_ymd(y, m, d).unwrap()
    }

    fn lunar(d: u8, m: u8, y: i32, leap: bool) -> LunarDate {
        LunarDate::new(d, m, y, leap).unwrap()
    }

    #[test]
    fn month11_anchors() {
        let cal = LunarCalendar::default();
        assert_eq!(date_from_day_number(cal.month11_day(2021)), date(2021, 12, 4));
        assert_eq!(date_from_day_number(cal.month11_day(2022)), date(2022, 11, 24));
        assert_eq!(date_from_day_number(cal.month11_day(2023)), date(2023, 12, 13));
        assert_eq!(date_from_day_number(cal.month11_day(2024)), date(2024, 12, 1));
    }

    #[test]
    fn tet_dates() {
        let cal = LunarCalendar::default();
        for (solar, year) in [
            (date(2000, 2, 5), 2000),
            (date(2020, 1, 25), 2020),
            (date(2023, 1, 22), 2023),
            (date(2024, 2, 10), 2024),
            (date(2025, 1, 29), 2025),
        ] {
            let l = cal.solar_to_lunar(&solar);
            assert_eq!(
                (l.day, l.month, l.year, l.is_leap_month),
                (1, 1, year, false),
                "Tet mismatch for {solar}"
            );
            assert_eq!(cal.lunar_to_solar(&lunar(1, 1, year, false)).unwrap(), solar);
        }
    }

    #[test]
    fn tet_1968_depends_on_offset() {
        // The 1968 new year fell on different days in Hanoi (UTC+7) and
        // Beijing (UTC+8): the new moon landed just before midnight in
        // Indochina and just after it further east.
        let tet = lunar(1, 1, 1968, false);
        let hanoi = LunarCalendar::default();
        assert_eq!(hanoi.lunar_to_solar(&tet).unwrap(), date(1968, 1, 29));
        let beijing = LunarCalendar::with_utc_offset(8.0);
        assert_eq!(beijing.lunar_to_solar(&tet).unwrap(), date(1968, 1, 30));
    }

    #[test]
    fn lunar_year_boundary() {
        let cal = LunarCalendar::default();
        // New Year's Day 2024 is still in lunar year 2023 (month 11)
        let l = cal.solar_to_lunar(&date(2024, 1, 1));
        assert_eq!((l.month, l.year), (11, 2023));
        // The eve of Tet is the last day of lunar month 12 of 2023
        let eve = cal.solar_to_lunar(&date(2024, 2, 9));
        assert_eq!((l.is_leap_month, eve.month, eve.year), (false, 12, 2023));
    }

    #[test]
    fn leap_month_detection_2023() {
        let cal = LunarCalendar::default();
        let a11 = cal.month11_day(2022);
        let b11 = cal.month11_day(2023);
        assert!(b11 - a11 > 365, "2022/2023 anchor pair must span a leap year");
        // Offset 4 from month 11 of 2022, i.e. the month after month 2
        assert_eq!(cal.leap_month_offset(a11), 4);
        // First day of the intercalary month
        let l = cal.solar_to_lunar(&date(2023, 3, 22));
        assert_eq!((l.day, l.month, l.year, l.is_leap_month), (1, 2, 2023, true));
    }

    #[test]
    fn leap_flag_on_wrong_month() {
        let cal = LunarCalendar::default();
        // 2023's leap month is month 2; a leap month 3 does not exist
        assert_eq!(
            cal.lunar_to_solar(&lunar(1, 3, 2023, true)),
            Err(Error::NonexistentLunarDate {
                day: 1,
                month: 3,
                year: 2023,
                leap: true,
            })
        );
        // 2024 has no leap month at all
        assert!(cal.lunar_to_solar(&lunar(1, 4, 2024, true)).is_err());
    }

    #[test]
    fn day_beyond_month_length() {
        let cal = LunarCalendar::default();
        // The leap second month of 2023 runs 2023-03-22 through
        // 2023-04-19: 29 days, so there is no 30th
        assert!(cal.lunar_to_solar(&lunar(29, 2, 2023, true)).is_ok());
        assert!(cal.lunar_to_solar(&lunar(30, 2, 2023, true)).is_err());
    }

    #[test]
    fn thirty_day_leap_month() {
        let cal = LunarCalendar::default();
        // Leap month 6 of 2017 runs 2017-07-23 through 2017-08-21: a
        // full 30 days, so its 30th exists and round-trips
        let d = cal.lunar_to_solar(&lunar(30, 6, 2017, true)).unwrap();
        assert_eq!(d, date(2017, 8, 21));
        assert_eq!(cal.solar_to_lunar(&d), lunar(30, 6, 2017, true));
    }

    #[test]
    fn leap_month_follows_its_regular_month() {
        let cal = LunarCalendar::default();
        // 2020: regular month 4 spans 2020-04-23..2020-05-22, the
        // intercalary month begins at the next new moon
        let regular = cal.solar_to_lunar(&date(2020, 4, 23));
        assert_eq!(regular, lunar(1, 4, 2020, false));
        let leap = cal.solar_to_lunar(&date(2020, 5, 23));
        assert_eq!(leap, lunar(1, 4, 2020, true));
    }

    #[test]
    fn kitchen_god_day_straddles_new_year() {
        let cal = LunarCalendar::default();
        // 23rd of the 12th month of lunar 2024 falls in January 2025
        let d = cal.lunar_to_solar(&lunar(23, 12, 2024, false)).unwrap();
        assert_eq!(d, date(2025, 1, 22));
    }
}
