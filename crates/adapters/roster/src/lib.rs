//! # petcare-adapter-roster
//!
//! In-memory implementation of the `PetRepository` port, optionally seeded
//! from a TOML roster file.
//!
//! ## Roster format
//!
//! ```toml
//! [[pets]]
//! name = "Rex"
//! species = "dog"            # optional, defaults to dog
//! age_years = 0.2
//! last_vaccination_date = 2024-01-15
//! last_deworming_date = "2024-01-20T09:30:00+07:00"
//! ```
//!
//! Dates may be bare TOML dates, quoted `YYYY-MM-DD` strings or RFC 3339
//! timestamps. An `id` (UUID) may be given to keep identifiers stable
//! across restarts; otherwise a fresh one is generated.
//!
//! ## Dependency rule
//! Depends on `petcare-app` (for port traits) and `petcare-domain` (for domain types).
//! The `app` and `domain` crates must never reference this adapter.

pub mod error;
pub mod repo;
pub mod roster;

pub use error::RosterError;
pub use repo::InMemoryPetRepository;
