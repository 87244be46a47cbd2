//! # petcare-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** for pets and their reminders
//!   (`/api/pets`, `/api/pets/{id}/reminders`, `/api/reminders`, …)
//! - Expose the pure calculators (`/api/calculate/next-due`,
//!   `/api/calculate/message`) for callers that hold their own pet records
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results and errors into HTTP responses
//!
//! ## Dependency rule
//! Depends on `petcare-app` (for port traits and services) and `petcare-domain`
//! (for domain types used in request/response mapping). Never leaks axum types
//! into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;
