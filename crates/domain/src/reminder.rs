//! Reminder: a pet's next due service, with its formatted message.

use serde::{Deserialize, Serialize};

use crate::calendar::CalendarDate;
use crate::id::PetId;
use crate::message::{Priority, ReminderKind, ReminderMessage, reminder_message};
use crate::pet::Pet;
use crate::schedule::{CadencePolicy, next_due_date_with};
use crate::service::ServiceKind;

/// The next due occurrence of one service for one pet, as seen from `today`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reminder {
    pub pet_id: PetId,
    pub pet_name: String,
    pub kind: ServiceKind,
    pub last_date: CalendarDate,
    pub due_date: CalendarDate,
    pub days_until_due: i64,
    pub message: ReminderMessage,
}

impl Reminder {
    /// Build the reminder for `kind`, or `None` when the pet has no
    /// recorded date for that service.
    #[must_use]
    pub fn for_pet<P: CadencePolicy + ?Sized>(
        pet: &Pet,
        kind: ServiceKind,
        today: CalendarDate,
        policy: &P,
    ) -> Option<Self> {
        let last_date = pet.last_service_date(kind)?;
        let due_date = next_due_date_with(policy, kind, last_date, pet.age_years, &pet.species);
        let days_until_due = CalendarDate::days_between(today, due_date);
        let message = reminder_message(&ReminderKind::from(kind), days_until_due, &pet.name);

        Some(Self {
            pet_id: pet.id,
            pet_name: pet.name.clone(),
            kind,
            last_date,
            due_date,
            days_until_due,
            message,
        })
    }

    /// Reminders for every service the pet has a history for.
    #[must_use]
    pub fn all_for_pet<P: CadencePolicy + ?Sized>(
        pet: &Pet,
        today: CalendarDate,
        policy: &P,
    ) -> Vec<Self> {
        ServiceKind::ALL
            .into_iter()
            .filter_map(|kind| Self::for_pet(pet, kind, today, policy))
            .collect()
    }

    #[must_use]
    pub fn priority(&self) -> Priority {
        self.message.priority
    }

    #[must_use]
    pub fn is_overdue(&self) -> bool {
        self.days_until_due < 0
    }
}
