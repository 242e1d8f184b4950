use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ValidationError;

/// Age bounds accepted at registration, inclusive.
pub const MIN_AGE: i64 = 1;
pub const MAX_AGE: i64 = 150;

/// A registered patient. Immutable after creation; owned by the store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Patient {
    pub id: Uuid,
    pub name: String,
    pub age: u32,
    pub gender: String,
    pub phone: String,
    pub medical_history: Option<String>,
    pub current_medications: Option<String>,
    pub allergies: Option<String>,
    pub registered_at: DateTime<Utc>,
}

/// Registration input — everything a `Patient` carries except the fields
/// the store generates (`id`, `registered_at`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PatientDraft {
    pub name: String,
    /// Signed so that out-of-range input (including negatives) reaches
    /// validation instead of failing at deserialization.
    pub age: i64,
    pub gender: String,
    pub phone: String,
    #[serde(default)]
    pub medical_history: Option<String>,
    #[serde(default)]
    pub current_medications: Option<String>,
    #[serde(default)]
    pub allergies: Option<String>,
}

impl PatientDraft {
    /// Check required fields. Whitespace-only strings count as empty.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.trim().is_empty() {
            return Err(ValidationError::EmptyField("name"));
        }
        if self.gender.trim().is_empty() {
            return Err(ValidationError::EmptyField("gender"));
        }
        if self.phone.trim().is_empty() {
            return Err(ValidationError::EmptyField("phone"));
        }
        if self.age < MIN_AGE || self.age > MAX_AGE {
            return Err(ValidationError::AgeOutOfRange(self.age));
        }
        Ok(())
    }

    /// Build the patient record this draft describes. Trims every string
    /// field and normalizes blank optionals to `None`.
    ///
    /// Callers must `validate()` first; this does not re-check.
    pub fn into_patient(self, id: Uuid, registered_at: DateTime<Utc>) -> Patient {
        Patient {
            id,
            name: self.name.trim().to_string(),
            age: self.age as u32,
            gender: self.gender.trim().to_string(),
            phone: self.phone.trim().to_string(),
            medical_history: normalize_optional(self.medical_history),
            current_medications: normalize_optional(self.current_medications),
            allergies: normalize_optional(self.allergies),
            registered_at,
        }
    }
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
