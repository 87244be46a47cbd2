//! Time and "today" helpers.

use chrono::Utc;

use crate::calendar::CalendarDate;

/// Return today's date in UTC.
#[must_use]
pub fn today() -> CalendarDate {
    CalendarDate::from(Utc::now().date_naive())
}
