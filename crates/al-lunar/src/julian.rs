//! Julian Day Number codec.
//!
//! A Julian Day Number is a continuous count of days, used here as the
//! calendar-agnostic time axis every other computation runs on. The codec
//! switches between the Julian and Gregorian formulas at the adoption
//! boundary: 1582-10-15 is the first Gregorian day, JDN 2299161.

use crate::solar_date::SolarDate;

/// Julian Day Number of 1582-10-15, the first day of the Gregorian
/// calendar.
pub const GREGORIAN_START: i64 = 2_299_161;

/// Return the (integer, noon-based) Julian Day Number of a calendar date.
///
/// Total over every [`SolarDate`]; the arithmetic is consistent down to
/// year −4712, below which the result is still deterministic but no
/// longer a meaningful day count.
pub fn day_number_from_date(date: &SolarDate) -> i64 {
    let dd = i64::from(date.day());
    let mm = i64::from(date.month());
    let yy = i64::from(date.year());
    let a = (14 - mm) / 12;
    let y = yy + 4800 - a;
    let m = mm + 12 * a - 3;
    let jd = dd + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045;
    if jd < GREGORIAN_START {
        // Before the adoption boundary the Julian formula applies.
        dd + (153 * m + 2) / 5 + 365 * y + y / 4 - 32083
    } else {
        jd
    }
}

/// Return the calendar date of a Julian Day Number.
///
/// Inverse of [`day_number_from_date`]: for every valid date `d`,
/// `date_from_day_number(day_number_from_date(&d)) == d`.
pub fn date_from_day_number(jd: i64) -> SolarDate {
    let (b, c) = if jd >= GREGORIAN_START {
        let a = jd + 32044;
        let b = (4 * a + 3) / 146097;
        (b, a - (b * 146097) / 4)
    } else {
        (0, jd + 32082)
    };
    let d = (4 * c + 3) / 1461;
    let e = c - (1461 * d) / 4;
    let m = (5 * e + 2) / 153;
    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = b * 100 + d - 4800 + m / 10;
    SolarDate::from_ymd(year as i32, month as u8, day as u8)
        .expect("day number arithmetic yields a valid calendar date")
}
