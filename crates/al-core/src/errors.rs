//! Error types for the amlich workspace.
//!
//! A single `thiserror`-derived enum covers the whole failure taxonomy:
//! malformed calendar input, lunar dates that do not occur in their year,
//! and the data-layer failures (file IO, JSON parsing, remote fetch).
//! The astronomical routines are total functions and never produce an
//! error for structurally valid input.

use thiserror::Error;

/// The error type used throughout the amlich crates.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A calendar date that does not represent a valid day.
    #[error("invalid date: {0}")]
    Date(String),

    /// A structurally valid lunar date that does not occur in its year.
    ///
    /// Distinct from [`Error::Date`]: the fields are in range, but the
    /// requested day/month combination is absent from that lunar year —
    /// a leap flag on a month that is not the year's leap month, or a
    /// 30th day in a 29-day month.
    #[error("lunar date {day}/{month}/{year} (leap: {leap}) does not occur in that year")]
    NonexistentLunarDate {
        /// Requested day of the lunar month.
        day: u8,
        /// Requested lunar month.
        month: u8,
        /// Requested lunar year.
        year: i32,
        /// Whether the leap month was requested.
        leap: bool,
    },

    /// File read/write failure in the holiday data layer.
    #[error("io error: {0}")]
    Io(String),

    /// Malformed catalog or metadata content.
    #[error("parse error: {0}")]
    Parse(String),

    /// Remote catalog fetch failure.
    #[error("fetch error: {0}")]
    Fetch(String),
}

/// Shorthand `Result` type used throughout the amlich crates.
pub type Result<T, E = Error> = std::result::Result<T, E>;
