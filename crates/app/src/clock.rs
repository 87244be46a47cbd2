//! In-process [`Clock`] implementations.

use petcare_domain::calendar::CalendarDate;

use crate::ports::Clock;

/// Wall clock in UTC.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> CalendarDate {
        petcare_domain::time::today()
    }
}

/// A clock pinned to one date, for tests and reproducible reports.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub CalendarDate);

impl Clock for FixedClock {
    fn today(&self) -> CalendarDate {
        self.0
    }
}
