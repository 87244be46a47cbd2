//! # petcare-domain
//!
//! Pure domain model for the petcare reminder system.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions, dates
//! - **DateMath** ([`calendar`]): calendar-correct date offsetting
//! - **ReminderScheduler** ([`schedule`]): age-banded cadence rules for
//!   vaccination and deworming
//! - **MessageFormatter** ([`message`]): bilingual, priority-tiered reminder text
//! - Define **Pets** and the **Reminders** derived from their service history
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod time;

pub mod age;
pub mod calendar;
pub mod message;
pub mod pet;
pub mod reminder;
pub mod schedule;
pub mod service;
pub mod species;
