//! Clock port: the current date as seen by the use-cases.

use petcare_domain::calendar::CalendarDate;

/// Source of "today" for due-date offsets.
pub trait Clock: Send + Sync {
    fn today(&self) -> CalendarDate;
}
