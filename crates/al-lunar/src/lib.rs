//! # al-lunar
//!
//! Conversion between the Gregorian calendar and the Vietnamese lunisolar
//! calendar.
//!
//! The pipeline is built leaf-first: a Julian Day codec over the hybrid
//! Julian/Gregorian civil calendar, a truncated solar-longitude theory, a
//! periodic new-moon series, and on top of those the month-11 anchor and
//! leap-month logic that together implement [`LunarCalendar::solar_to_lunar`]
//! and [`LunarCalendar::lunar_to_solar`]. All of it is pure arithmetic —
//! no state, no IO — and safe to call from any thread.
//!
//! ```rust
//! use al_lunar::{LunarCalendar, SolarDate};
//!
//! let calendar = LunarCalendar::default(); // UTC+7, Indochina Time
//! let tet = calendar.solar_to_lunar(&SolarDate::from_ymd(2024, 2, 10).unwrap());
//! assert_eq!((tet.day, tet.month, tet.year), (1, 1, 2024));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Memoized per-date conversions.
pub mod cache;

/// The Gregorian ↔ lunisolar converter.
pub mod convert;

/// Julian Day Number codec.
pub mod julian;

/// `LunarDate` value type.
pub mod lunar_date;

/// New-moon times.
pub mod moon;

/// `SolarDate` value type.
pub mod solar_date;

/// Apparent solar longitude.
pub mod sun;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use cache::LunarDateCache;
pub use convert::{LunarCalendar, INDOCHINA_UTC_OFFSET_HOURS};
pub use lunar_date::LunarDate;
pub use solar_date::SolarDate;
