//! Crate-level error taxonomy.
//!
//! Two kinds are user-correctable (`Validation`, the NotFound pair); the
//! rest are internal. Provider failures have their own error type that
//! never leaves the provider chain — see `providers::ProviderError`.

use uuid::Uuid;

/// Field-level registration/turn input failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} cannot be empty")]
    EmptyField(&'static str),
    #[error("Age must be between 1 and 150, got {0}")]
    AgeOutOfRange(i64),
    #[error("Message cannot be empty")]
    EmptyMessage,
}

/// Errors surfaced by the store and the session service.
#[derive(Debug, thiserror::Error)]
pub enum ConsultError {
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),
    #[error("Patient not found: {0}")]
    PatientNotFound(Uuid),
    #[error("Unknown specialization: {0}")]
    UnknownSpecialization(String),
    #[error("Internal lock error")]
    LockPoisoned,
}

impl ConsultError {
    /// Whether the caller can fix this by changing the request.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, ConsultError::LockPoisoned)
    }
}
