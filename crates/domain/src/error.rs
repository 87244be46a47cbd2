//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into
//! [`PetCareError`] via `#[from]` or an explicit `From` impl.

/// Top-level error returned by services and ports.
#[derive(Debug, thiserror::Error)]
pub enum PetCareError {
    #[error("validation error")]
    Validation(#[from] ValidationError),

    #[error("not found")]
    NotFound(#[from] NotFoundError),

    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A domain invariant was violated.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("age must be a finite number, got {0}")]
    NonFiniteAge(f64),

    #[error("age must not be negative, got {0}")]
    NegativeAge(f64),

    #[error("invalid calendar date: {0}")]
    InvalidDate(String),

    #[error("unknown service kind: {0}")]
    UnknownServiceKind(String),

    #[error("invalid identifier: {0}")]
    InvalidId(String),

    #[error("service date {date} is in the future")]
    FutureServiceDate { date: String },
}

/// A lookup by identifier found nothing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{entity} {id} not found")]
pub struct NotFoundError {
    pub entity: &'static str,
    pub id: String,
}
