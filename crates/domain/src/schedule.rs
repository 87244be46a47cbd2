//! Reminder scheduling: age-banded cadence rules for recurring services.
//!
//! A [`CadenceTable`] is an ordered list of half-open age bands. The first
//! band whose upper bound is strictly greater than the pet's age wins; ages
//! past every bound use the table's open-ended cadence.
//!
//! | Service | Age band (years) | Cadence |
//! |---|---|---|
//! | vaccination | `< 0.33` | +3 weeks |
//! | vaccination | `0.33 ..< 1.33` | +6 months |
//! | vaccination | `>= 1.33` | +1 year |
//! | deworming | `< 0.5` | +1 month |
//! | deworming | `0.5 ..< 1` | +2 months |
//! | deworming | `>= 1` | +3 months |
//!
//! Every cadence is strictly positive, so a next due date is later than the
//! last service date, except that results saturate at [`CalendarDate::MAX`]:
//! a last date within one cadence of the maximum is due on `MAX` itself.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::age::AgeYears;
use crate::calendar::CalendarDate;
use crate::service::ServiceKind;
use crate::species::Species;

/// A fixed offset added to the last service date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "unit", content = "count", rename_all = "snake_case")]
pub enum Cadence {
    Weeks(u32),
    Months(u32),
    Years(u32),
}

impl Cadence {
    /// Apply this cadence to `date`. Months and years clamp to the end of
    /// the target month (see [`crate::calendar`]).
    #[must_use]
    pub fn apply(self, date: CalendarDate) -> CalendarDate {
        match self {
            Self::Weeks(n) => date.add_weeks(i64::from(n)),
            Self::Months(n) => date.add_months(i32::try_from(n).unwrap_or(i32::MAX)),
            Self::Years(n) => date.add_years(i32::try_from(n).unwrap_or(i32::MAX)),
        }
    }
}

impl fmt::Display for Cadence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (n, unit) = match self {
            Self::Weeks(n) => (n, "week"),
            Self::Months(n) => (n, "month"),
            Self::Years(n) => (n, "year"),
        };
        let plural = if *n == 1 { "" } else { "s" };
        write!(f, "+{n} {unit}{plural}")
    }
}

/// Ages strictly below `below` years use `cadence`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AgeBand {
    pub below: f64,
    pub cadence: Cadence,
}

/// Ordered age bands plus the cadence for every older pet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CadenceTable {
    pub bands: &'static [AgeBand],
    pub otherwise: Cadence,
}

impl CadenceTable {
    /// Pick the cadence for `age`: first band that contains it, else
    /// [`otherwise`](Self::otherwise).
    #[must_use]
    pub fn cadence_for(&self, age: AgeYears) -> Cadence {
        let years = age.get();
        self.bands
            .iter()
            .find(|band| years < band.below)
            .map_or(self.otherwise, |band| band.cadence)
    }

    /// Next due date for a pet of `age` whose last service was on `last`.
    #[must_use]
    pub fn next_due(&self, last: CalendarDate, age: AgeYears) -> CalendarDate {
        self.cadence_for(age).apply(last)
    }
}

/// Vaccination cadence shared by every species.
pub const VACCINATION: CadenceTable = CadenceTable {
    bands: &[
        // roughly under 16 weeks
        AgeBand {
            below: 0.33,
            cadence: Cadence::Weeks(3),
        },
        AgeBand {
            below: 1.33,
            cadence: Cadence::Months(6),
        },
    ],
    otherwise: Cadence::Years(1),
};

/// Deworming cadence shared by every species.
pub const DEWORMING: CadenceTable = CadenceTable {
    bands: &[
        AgeBand {
            below: 0.5,
            cadence: Cadence::Months(1),
        },
        AgeBand {
            below: 1.0,
            cadence: Cadence::Months(2),
        },
    ],
    otherwise: Cadence::Months(3),
};

/// Chooses the cadence table for a service and species.
///
/// This is the seam for species-specific schedules; [`StandardCadence`]
/// uses the same tables for every species.
pub trait CadencePolicy {
    fn table(&self, kind: ServiceKind, species: &Species) -> &CadenceTable;
}

/// The universal veterinary schedule ([`VACCINATION`], [`DEWORMING`]).
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCadence;

impl CadencePolicy for StandardCadence {
    fn table(&self, kind: ServiceKind, _species: &Species) -> &CadenceTable {
        match kind {
            ServiceKind::Vaccination => &VACCINATION,
            ServiceKind::Deworming => &DEWORMING,
        }
    }
}

/// Next vaccination due date under the standard schedule.
#[must_use]
pub fn next_vaccination_date(
    last: CalendarDate,
    age: AgeYears,
    species: &Species,
) -> CalendarDate {
    next_due_date(ServiceKind::Vaccination, last, age, species)
}

/// Next deworming due date under the standard schedule.
#[must_use]
pub fn next_deworming_date(last: CalendarDate, age: AgeYears) -> CalendarDate {
    next_due_date(ServiceKind::Deworming, last, age, &Species::default())
}

/// Next due date for any service under the standard schedule.
#[must_use]
pub fn next_due_date(
    kind: ServiceKind,
    last: CalendarDate,
    age: AgeYears,
    species: &Species,
) -> CalendarDate {
    next_due_date_with(&StandardCadence, kind, last, age, species)
}

/// Next due date using a caller-supplied [`CadencePolicy`].
#[must_use]
pub fn next_due_date_with<P: CadencePolicy + ?Sized>(
    policy: &P,
    kind: ServiceKind,
    last: CalendarDate,
    age: AgeYears,
    species: &Species,
) -> CalendarDate {
    policy.table(kind, species).next_due(last, age)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> CalendarDate {
        CalendarDate::from_ymd(y, m, d).unwrap()
    }

    fn age(years: f64) -> AgeYears {
        AgeYears::new(years).unwrap()
    }

    fn vaccination(last: CalendarDate, years: f64) -> CalendarDate {
        next_vaccination_date(last, age(years), &Species::Dog)
    }

    #[test]
    fn should_schedule_puppy_vaccination_three_weeks_out() {
        assert_eq!(vaccination(date(2024, 1, 15), 0.2), date(2024, 2, 5));
    }

    #[test]
    fn should_switch_vaccination_bands_at_exact_bounds() {
        let last = date(2024, 1, 15);
        assert_eq!(vaccination(last, 0.0), last.add_weeks(3));
        assert_eq!(vaccination(last, 0.32), last.add_weeks(3));
        assert_eq!(vaccination(last, 0.33), last.add_months(6));
        assert_eq!(vaccination(last, 1.32), last.add_months(6));
        assert_eq!(vaccination(last, 1.33), last.add_years(1));
        assert_eq!(vaccination(last, 14.0), last.add_years(1));
    }

    #[test]
    fn should_switch_deworming_bands_at_exact_bounds() {
        let last = date(2024, 1, 15);
        assert_eq!(next_deworming_date(last, age(0.49)), date(2024, 2, 15));
        assert_eq!(next_deworming_date(last, age(0.5)), date(2024, 3, 15));
        assert_eq!(next_deworming_date(last, age(0.99)), date(2024, 3, 15));
        assert_eq!(next_deworming_date(last, age(1.0)), date(2024, 4, 15));
    }

    #[test]
    fn should_clamp_month_end_when_deworming_from_january_31() {
        assert_eq!(
            next_deworming_date(date(2023, 1, 31), age(0.2)),
            date(2023, 2, 28)
        );
    }

    #[test]
    fn should_always_schedule_after_last_date() {
        let starts = [
            date(2024, 1, 31),
            date(2024, 2, 29),
            date(2023, 12, 31),
            date(2025, 6, 30),
        ];
        let ages = [0.0, 0.1, 0.32, 0.33, 0.49, 0.5, 0.99, 1.0, 1.32, 1.33, 7.5, 30.0];
        for last in starts {
            for years in ages {
                for kind in ServiceKind::ALL {
                    let due = next_due_date(kind, last, age(years), &Species::Cat);
                    assert!(due > last, "{kind} at {years}y from {last} gave {due}");
                }
            }
        }
    }

    #[test]
    fn should_saturate_at_latest_representable_date() {
        for kind in ServiceKind::ALL {
            let due = next_due_date(kind, CalendarDate::MAX, age(2.0), &Species::Dog);
            assert_eq!(due, CalendarDate::MAX);

            let near_end = CalendarDate::MAX.add_days(-10);
            let due = next_due_date(kind, near_end, age(2.0), &Species::Dog);
            assert!(due > near_end);
            assert_eq!(due, CalendarDate::MAX);
        }
    }

    #[test]
    fn should_ignore_species_in_standard_policy() {
        let last = date(2024, 5, 1);
        let dog = next_vaccination_date(last, age(0.5), &Species::Dog);
        let rabbit = next_vaccination_date(last, age(0.5), &Species::Other("rabbit".into()));
        assert_eq!(dog, rabbit);
    }

    #[test]
    fn should_use_custom_policy_when_supplied() {
        const CAT_VACCINATION: CadenceTable = CadenceTable {
            bands: &[],
            otherwise: Cadence::Years(3),
        };

        struct CatsEveryThreeYears;

        impl CadencePolicy for CatsEveryThreeYears {
            fn table(&self, kind: ServiceKind, species: &Species) -> &CadenceTable {
                match (kind, species) {
                    (ServiceKind::Vaccination, Species::Cat) => &CAT_VACCINATION,
                    (ServiceKind::Vaccination, _) => &VACCINATION,
                    (ServiceKind::Deworming, _) => &DEWORMING,
                }
            }
        }

        let last = date(2024, 5, 1);
        let policy = CatsEveryThreeYears;
        assert_eq!(
            next_due_date_with(&policy, ServiceKind::Vaccination, last, age(4.0), &Species::Cat),
            date(2027, 5, 1)
        );
        assert_eq!(
            next_due_date_with(&policy, ServiceKind::Vaccination, last, age(4.0), &Species::Dog),
            date(2025, 5, 1)
        );
    }

    #[test]
    fn should_display_cadence_with_unit() {
        assert_eq!(Cadence::Weeks(3).to_string(), "+3 weeks");
        assert_eq!(Cadence::Years(1).to_string(), "+1 year");
    }
}
