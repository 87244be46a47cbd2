//! Calendar dates and date arithmetic.
//!
//! [`CalendarDate`] wraps a [`chrono::NaiveDate`]: there is no time of day,
//! so day differences are exact.
//!
//! Month and year arithmetic **clamps** the day to the last day of the target
//! month: Jan 31 + 1 month is Feb 28 (Feb 29 in leap years), and Feb 29 + 1
//! year is Feb 28. Nothing ever rolls over into the following month.
//!
//! Every operation is total. Results beyond chrono's representable range
//! saturate at [`CalendarDate::MIN`] / [`CalendarDate::MAX`].

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Days, Months, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A day on the proleptic Gregorian calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CalendarDate(NaiveDate);

impl CalendarDate {
    pub const MIN: Self = Self(NaiveDate::MIN);
    pub const MAX: Self = Self(NaiveDate::MAX);

    /// Build a date from year, month (1-12) and day (1-31).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidDate`] when the triple does not name
    /// a real day (e.g. Feb 30, month 13).
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, ValidationError> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Self)
            .ok_or_else(|| ValidationError::InvalidDate(format!("{year:04}-{month:02}-{day:02}")))
    }

    /// `n` calendar days later; `n` may be negative.
    #[must_use]
    pub fn add_days(self, n: i64) -> Self {
        let magnitude = Days::new(n.unsigned_abs());
        let shifted = if n >= 0 {
            self.0.checked_add_days(magnitude)
        } else {
            self.0.checked_sub_days(magnitude)
        };
        shifted.map_or_else(|| Self::saturated(n >= 0), Self)
    }

    /// Same as `add_days(7 * n)`.
    #[must_use]
    pub fn add_weeks(self, n: i64) -> Self {
        self.add_days(n.saturating_mul(7))
    }

    /// Advance the month field by `n`, carrying into the year and clamping
    /// the day to the length of the target month.
    #[must_use]
    pub fn add_months(self, n: i32) -> Self {
        let magnitude = Months::new(n.unsigned_abs());
        let shifted = if n >= 0 {
            self.0.checked_add_months(magnitude)
        } else {
            self.0.checked_sub_months(magnitude)
        };
        shifted.map_or_else(|| Self::saturated(n >= 0), Self)
    }

    /// Advance the year field by `n`; Feb 29 clamps to Feb 28 on non-leap
    /// target years.
    #[must_use]
    pub fn add_years(self, n: i32) -> Self {
        match n.checked_mul(12) {
            Some(months) => self.add_months(months),
            None => Self::saturated(n >= 0),
        }
    }

    /// Signed number of whole days from `from` to `to`.
    #[must_use]
    pub fn days_between(from: Self, to: Self) -> i64 {
        to.0.signed_duration_since(from.0).num_days()
    }

    /// Signed number of whole days from `self` until `other`.
    #[must_use]
    pub fn days_until(self, other: Self) -> i64 {
        Self::days_between(self, other)
    }

    fn saturated(forward: bool) -> Self {
        if forward { Self::MAX } else { Self::MIN }
    }
}

impl From<NaiveDate> for CalendarDate {
    fn from(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl From<CalendarDate> for NaiveDate {
    fn from(date: CalendarDate) -> Self {
        date.0
    }
}

impl fmt::Display for CalendarDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for CalendarDate {
    type Err = ValidationError;

    /// Accepts `YYYY-MM-DD`, an RFC 3339 timestamp, or a local
    /// `YYYY-MM-DDTHH:MM:SS` timestamp. A timestamp keeps the date as written
    /// in its own offset; the time of day is dropped.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(Self(date));
        }
        if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
            return Ok(Self(ts.date_naive()));
        }
        NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
            .map(|ts| Self(ts.date()))
            .map_err(|_| ValidationError::InvalidDate(s.to_string()))
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<CalendarDate> for String {
    fn from(date: CalendarDate) -> Self {
        date.to_string()
    }
}
