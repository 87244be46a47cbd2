//! Reminder service: next-due reminders for one pet or the whole roster.

use petcare_domain::age::AgeYears;
use petcare_domain::calendar::CalendarDate;
use petcare_domain::error::{NotFoundError, PetCareError};
use petcare_domain::id::PetId;
use petcare_domain::reminder::Reminder;
use petcare_domain::schedule::{Cadence, CadencePolicy, StandardCadence};
use petcare_domain::service::ServiceKind;
use petcare_domain::species::Species;

use crate::ports::{Clock, PetRepository};

/// Computes reminders from stored pets, today's date and a cadence policy.
pub struct ReminderService<R, C, P = StandardCadence> {
    repo: R,
    clock: C,
    policy: P,
}

impl<R: PetRepository, C: Clock> ReminderService<R, C, StandardCadence> {
    /// Create a service using the standard cadence tables.
    pub fn new(repo: R, clock: C) -> Self {
        Self::with_policy(repo, clock, StandardCadence)
    }
}

impl<R, C, P> ReminderService<R, C, P>
where
    R: PetRepository,
    C: Clock,
    P: CadencePolicy + Send + Sync,
{
    /// Create a service with a custom [`CadencePolicy`].
    pub fn with_policy(repo: R, clock: C, policy: P) -> Self {
        Self {
            repo,
            clock,
            policy,
        }
    }

    /// Today's date according to the service clock.
    pub fn today(&self) -> CalendarDate {
        self.clock.today()
    }

    /// Cadence this service applies to `kind` for a pet of `age` and `species`.
    pub fn cadence_for(&self, kind: ServiceKind, age: AgeYears, species: &Species) -> Cadence {
        self.policy.table(kind, species).cadence_for(age)
    }

    /// Reminders for one pet, one per service it has a history for.
    ///
    /// # Errors
    ///
    /// Returns [`PetCareError::NotFound`] when no pet with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn reminders_for_pet(&self, id: PetId) -> Result<Vec<Reminder>, PetCareError> {
        let pet = self.repo.get_by_id(id).await?.ok_or_else(|| NotFoundError {
            entity: "Pet",
            id: id.to_string(),
        })?;
        let mut reminders = Reminder::all_for_pet(&pet, self.clock.today(), &self.policy);
        sort_by_urgency(&mut reminders);
        Ok(reminders)
    }

    /// Reminders across every pet, limited to those due within
    /// `horizon_days` (overdue ones always included). `None` keeps all.
    ///
    /// Sorted by priority, then days until due, then pet name.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn upcoming(&self, horizon_days: Option<i64>) -> Result<Vec<Reminder>, PetCareError> {
        let today = self.clock.today();
        let pets = self.repo.get_all().await?;

        let mut reminders: Vec<Reminder> = pets
            .iter()
            .flat_map(|pet| Reminder::all_for_pet(pet, today, &self.policy))
            .filter(|r| {
                r.is_overdue() || horizon_days.is_none_or(|horizon| r.days_until_due <= horizon)
            })
            .collect();
        sort_by_urgency(&mut reminders);

        let overdue = reminders.iter().filter(|r| r.is_overdue()).count();
        tracing::debug!(
            pets = pets.len(),
            reminders = reminders.len(),
            overdue,
            %today,
            "computed upcoming reminders"
        );
        Ok(reminders)
    }
}

fn sort_by_urgency(reminders: &mut [Reminder]) {
    reminders.sort_by(|a, b| {
        a.priority()
            .cmp(&b.priority())
            .then(a.days_until_due.cmp(&b.days_until_due))
            .then_with(|| a.pet_name.cmp(&b.pet_name))
    });
}
