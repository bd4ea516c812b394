//! Calendar-day identity and the locked-date comparison.
//!
//! Every day record is addressed by a [`DateKey`], the `YYYY-MM-DD` form of
//! a date's calendar fields. Anything implementing [`Datelike`] can be keyed:
//! a `DateTime<Local>` is keyed by its local calendar day, a `NaiveDateTime`
//! by its own date, and time-of-day never participates.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// First day of the semester; earlier days are locked by default.
pub const DEFAULT_SEMESTER_START: NaiveDate = match NaiveDate::from_ymd_opt(2025, 9, 2) {
    Some(date) => date,
    None => panic!("invalid default semester start"),
};

/// Canonical `YYYY-MM-DD` key of a calendar day.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DateKey(String);

impl DateKey {
    /// Parse and normalize an externally supplied `YYYY-MM-DD` string.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(|date| canonical_key(&date))
            .map_err(|_| ValidationError::InvalidDateKey(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The calendar day this key names, if it names one.
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.0, "%Y-%m-%d").ok()
    }
}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for DateKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for DateKey {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for DateKey {
    fn from(date: NaiveDate) -> Self {
        canonical_key(&date)
    }
}

/// Key for the calendar day `date` falls on.
pub fn canonical_key<D: Datelike>(date: &D) -> DateKey {
    DateKey(format!(
        "{:04}-{:02}-{:02}",
        date.year(),
        date.month(),
        date.day()
    ))
}

/// Whether two dates fall on the same calendar day.
pub fn is_same_day<A: Datelike, B: Datelike>(a: &A, b: &B) -> bool {
    calendar_day(a) == calendar_day(b)
}

/// True iff `date`'s calendar day is strictly before `threshold`'s.
pub fn is_locked<D: Datelike, T: Datelike>(date: &D, threshold: &T) -> bool {
    calendar_day(date) < calendar_day(threshold)
}

fn calendar_day<D: Datelike>(date: &D) -> (i32, u32, u32) {
    (date.year(), date.month(), date.day())
}
