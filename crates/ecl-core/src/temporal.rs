//! # Temporal Types — Calendar Dates
//!
//! Catalog dates are day-precision. A [`CalendarDate`] is parsed only from
//! the strict `YYYY-MM-DD` form; two renderings exist downstream:
//!
//! - `YYYY-MM-DD` for schema.org `datePublished` / `dateModified`
//! - `YYYY/MM/DD` for `citation_*` meta fields
//!
//! Sloppy inputs such as `2026-2-17` or `2026-02-17T00:00:00Z` are rejected
//! at construction rather than normalized, so the stored form always
//! round-trips exactly.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// A day-precision calendar date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    /// Parse a date from the strict `YYYY-MM-DD` form.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidDate`] for any other shape or for a
    /// day that does not exist (e.g. `2026-02-30`).
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        let shape_ok = s.len() == 10
            && s.bytes().enumerate().all(|(i, b)| match i {
                4 | 7 => b == b'-',
                _ => b.is_ascii_digit(),
            });
        if !shape_ok {
            return Err(ValidationError::InvalidDate {
                value: s.to_string(),
                reason: "expected YYYY-MM-DD".to_string(),
            });
        }
        NaiveDate::parse_from_str(s, "%Y-%m-%d")
            .map(Self)
            .map_err(|e| ValidationError::InvalidDate {
                value: s.to_string(),
                reason: e.to_string(),
            })
    }

    /// Create a date from year, month and day.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, ValidationError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidDate {
                value: format!("{year:04}-{month:02}-{day:02}"),
                reason: "no such calendar day".to_string(),
            })
    }

    /// Render as `YYYY-MM-DD`.
    pub fn to_iso(&self) -> String {
        self.0.format("%Y-%m-%d").to_string()
    }

    /// Render as `YYYY/MM/DD` for citation meta fields.
    pub fn to_citation(&self) -> String {
        self.0.format("%Y/%m/%d").to_string()
    }

    /// Calendar year.
    pub fn year(&self) -> i32 {
        self.0.year()
    }
}

impl std::fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_iso())
    }
}

impl std::str::FromStr for CalendarDate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for CalendarDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_iso())
    }
}

impl<'de> Deserialize<'de> for CalendarDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}
