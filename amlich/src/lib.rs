//! # amlich
//!
//! Conversion between the Gregorian calendar and the Vietnamese lunisolar
//! calendar (âm lịch), plus holiday resolution on top of it.
//!
//! This crate is a **façade** that re-exports the public items of the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `al-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! amlich = "0.1"
//! ```
//!
//! ```rust
//! use amlich::lunar::{LunarCalendar, SolarDate};
//!
//! let calendar = LunarCalendar::default(); // UTC+7, Indochina Time
//! let tet = calendar.solar_to_lunar(&SolarDate::from_ymd(2024, 2, 10).unwrap());
//! assert_eq!((tet.day, tet.month, tet.year), (1, 1, 2024));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Shared error types and the `Result` alias.
pub use al_core as core;

/// Gregorian ↔ lunisolar conversion and the per-date cache.
pub use al_lunar as lunar;

/// Holiday catalog, resolver, and update manager.
pub use al_holidays as holidays;
