//! # petcare-app
//!
//! Application layer: use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `PetRepository`: CRUD for pets
//!   - `Clock`: what "today" is
//! - Define **driving/inbound ports** as use-case structs:
//!   - `PetService`: register, list, get, record a service
//!   - `ReminderService`: per-pet and roster-wide reminders
//! - Orchestrate domain objects without knowing *how* persistence or IO works
//!
//! ## Dependency rule
//! Depends on `petcare-domain` only.
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod clock;
pub mod ports;
pub mod services;
