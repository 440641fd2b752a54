//! New-moon times from a truncated periodic series.
//!
//! [`new_moon`] returns the Julian Day of the k-th mean conjunction
//! counted from the reference new moon of early January 1900 (k = 0),
//! corrected by periodic terms in the sun's mean anomaly, the moon's
//! mean anomaly, and the argument of latitude, and by a ΔT polynomial
//! (uniform time vs. earth-rotation time) whose form switches for dates
//! more than eleven centuries before 1900.

use std::f64::consts::PI;

/// Degrees to radians.
const DR: f64 = PI / 180.0;

/// Mean length of the synodic month in days.
pub const SYNODIC_MONTH: f64 = 29.530_588_853;

/// Julian Day of the k = 0 reference new moon (1900 January 1, ~13:52 UTC).
pub const NEW_MOON_EPOCH: f64 = 2_415_021.076_998_695;

/// Return the Julian Day of the k-th new moon.
///
/// Deterministic, pure, total over any `k`.
pub fn new_moon(k: i64) -> f64 {
    let kf = k as f64;
    // Time in Julian centuries from 1900 January 0.5
    let t = kf / 1236.85;
    let t2 = t * t;
    let t3 = t2 * t;
    // Mean phase
    let mut jd1 = 2_415_020.759_33 + 29.530_588_68 * kf + 0.000_117_8 * t2 - 0.000_000_155 * t3;
    jd1 += 0.000_33 * ((166.56 + 132.87 * t - 0.009_173 * t2) * DR).sin();
    // Sun's mean anomaly
    let m = 359.2242 + 29.105_356_08 * kf - 0.000_033_3 * t2 - 0.000_003_47 * t3;
    // Moon's mean anomaly
    let mpr = 306.0253 + 385.816_918_06 * kf + 0.010_730_6 * t2 + 0.000_012_36 * t3;
    // Moon's argument of latitude
    let f = 21.2964 + 390.670_506_46 * kf - 0.001_652_8 * t2 - 0.000_002_39 * t3;
    // Periodic corrections to the true phase
    let mut c1 = (0.1734 - 0.000_393 * t) * (m * DR).sin() + 0.0021 * (2.0 * DR * m).sin();
    c1 = c1 - 0.4068 * (mpr * DR).sin() + 0.0161 * (DR * 2.0 * mpr).sin();
    c1 -= 0.0004 * (DR * 3.0 * mpr).sin();
    c1 = c1 + 0.0104 * (DR * 2.0 * f).sin() - 0.0051 * (DR * (m + mpr)).sin();
    c1 = c1 - 0.0074 * (DR * (m - mpr)).sin() + 0.0004 * (DR * (2.0 * f + m)).sin();
    c1 = c1 - 0.0004 * (DR * (2.0 * f - m)).sin() - 0.0006 * (DR * (2.0 * f + mpr)).sin();
    c1 = c1 + 0.0010 * (DR * (2.0 * f - mpr)).sin() + 0.0005 * (DR * (2.0 * mpr + m)).sin();
    // ΔT: uniform time minus earth-rotation time
    let deltat = if t < -11.0 {
        0.001 + 0.000_839 * t + 0.000_226_1 * t2 - 0.000_008_45 * t3 - 0.000_000_081 * t * t3
    } else {
        -0.000_278 + 0.000_265 * t + 0.000_262 * t2
    };
    jd1 + c1 - deltat
}

/// Return the local calendar day (integer JDN) on which the k-th new
/// moon falls, for a zone `utc_offset_hours` east of UTC.
pub fn new_moon_day(k: i64, utc_offset_hours: f64) -> i64 {
    (new_moon(k) + 0.5 + utc_offset_hours / 24.0).floor() as i64
}
