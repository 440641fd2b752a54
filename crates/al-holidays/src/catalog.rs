//! Holiday catalog data model.
//!
//! The wire format is one JSON document shared by all three sources
//! (bundled asset, locally cached download, remote URL):
//!
//! ```json
//! {
//!   "version": "1.2.0",
//!   "lastUpdated": "2025-01-15T00:00:00Z",
//!   "holidays": {
//!     "solar": [ { "id": "national-day", "name": "Ngày Quốc khánh",
//!                  "month": 9, "day": 2, "isPublicHoliday": true } ],
//!     "lunar": [ { "id": "tet-1", "name": "Tết Nguyên Đán",
//!                  "lunarMonth": 1, "lunarDay": 1, "isPublicHoliday": true } ]
//!   }
//! }
//! ```
//!
//! Unknown fields are ignored for forward compatibility; `description`,
//! `isPublicHoliday`, and `color` default to `""`, `false`, and
//! `"#FF0000"` when missing.

use al_core::errors::{Error, Result};
use al_lunar::SolarDate;
use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// A versioned holiday catalog.
///
/// Versions are compared as plain strings (lexicographically) by the
/// update manager to decide whether a remote catalog supersedes the
/// local one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HolidayCatalog {
    /// Catalog version.
    pub version: String,
    /// ISO-8601 timestamp of the last catalog edit.
    #[serde(rename = "lastUpdated")]
    pub last_updated: String,
    /// The holiday rules, split by recurrence calendar.
    pub holidays: HolidaySections,
}

impl HolidayCatalog {
    /// Parse a catalog from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).map_err(|e| Error::Parse(e.to_string()))
    }

    /// The `lastUpdated` stamp as a parsed timestamp, if well-formed.
    pub fn last_updated_time(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(&self.last_updated).ok()
    }
}

/// Solar- and lunar-recurring rule lists.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HolidaySections {
    /// Holidays fixed in the Gregorian calendar.
    pub solar: Vec<SolarRule>,
    /// Holidays fixed in the lunisolar calendar.
    pub lunar: Vec<LunarRule>,
}

/// A holiday recurring on a fixed Gregorian month and day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SolarRule {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Gregorian month (1–12).
    pub month: u8,
    /// Gregorian day of month.
    pub day: u8,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Whether this is a public (non-working) holiday.
    #[serde(rename = "isPublicHoliday", default)]
    pub is_public_holiday: bool,
    /// Display color, `#RRGGBB`.
    #[serde(default = "default_color")]
    pub color: String,
}

/// A holiday recurring on a fixed lunar month and day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LunarRule {
    /// Stable identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Lunar month (1–12).
    #[serde(rename = "lunarMonth")]
    pub lunar_month: u8,
    /// Day of the lunar month (1–30).
    #[serde(rename = "lunarDay")]
    pub lunar_day: u8,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Whether this is a public (non-working) holiday.
    #[serde(rename = "isPublicHoliday", default)]
    pub is_public_holiday: bool,
    /// Display color, `#RRGGBB`.
    #[serde(default = "default_color")]
    pub color: String,
}

fn default_color() -> String {
    "#FF0000".to_string()
}

/// A holiday instantiated on a concrete Gregorian date.
///
/// Produced fresh for each resolved year, never mutated.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedHoliday {
    /// Display name.
    pub name: String,
    /// The Gregorian date the holiday falls on that year.
    pub date: SolarDate,
    /// Whether the rule recurs in the lunar calendar.
    pub is_lunar: bool,
    /// Free-text description.
    pub description: String,
    /// Whether this is a public (non-working) holiday.
    pub is_public_holiday: bool,
}
