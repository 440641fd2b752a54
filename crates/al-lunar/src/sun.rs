//! Apparent solar longitude from a truncated solar theory.
//!
//! The series evaluates the sun's mean longitude and mean anomaly as
//! polynomials in Julian centuries since J2000, applies the equation of
//! center and a nutation/aberration correction, and normalizes the
//! result. Precision is a small fraction of a degree over the years of
//! interest — far more than enough to place a longitude in the correct
//! 30°-wide major-term sextant, which is all the calendar computation
//! asks of it.

use std::f64::consts::PI;

/// Degrees to radians.
const DR: f64 = PI / 180.0;

/// Return the apparent ecliptic longitude of the sun in degrees,
/// normalized to `[0, 360)`.
///
/// `jd` is a Julian Day instant (fractional days). Pure function.
pub fn apparent_longitude(jd: f64) -> f64 {
    // Julian centuries since J2000.0
    let t = (jd - 2_451_545.0) / 36_525.0;
    let t2 = t * t;
    // Mean anomaly of the sun, degrees
    let m = 357.52910 + 35_999.05030 * t - 0.000_155_9 * t2 - 0.000_000_48 * t * t2;
    // Mean longitude, degrees
    let l0 = 280.46645 + 36_000.76983 * t + 0.000_303_2 * t2;
    // Equation of center
    let mut dl = (1.914_600 - 0.004_817 * t - 0.000_014 * t2) * (DR * m).sin();
    dl += (0.019_993 - 0.000_101 * t) * (DR * 2.0 * m).sin() + 0.000_290 * (DR * 3.0 * m).sin();
    // Nutation and aberration
    let omega = 125.04 - 1934.136 * t;
    let l = l0 + dl - 0.005_69 - 0.004_78 * (omega * DR).sin();
    l.rem_euclid(360.0)
}

/// Return the major-term sextant (0–11) of the sun at local midnight of
/// `day_number`.
///
/// `day_number` is a local calendar day (integer JDN in the zone
/// `utc_offset_hours` east of UTC); the longitude is evaluated at the
/// UTC instant that local midnight corresponds to. Sextant `n` covers
/// longitudes `[30n, 30n + 30)`; sextant 9 begins at the winter solstice
/// (270°).
pub fn major_term_index(day_number: i64, utc_offset_hours: f64) -> i64 {
    let jd = day_number as f64 - 0.5 - utc_offset_hours / 24.0;
    (apparent_longitude(jd) / 30.0).floor() as i64
}
