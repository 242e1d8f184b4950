use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::Specialization;

/// One patient-message / doctor-response exchange.
///
/// Immutable once created; lives in exactly one patient's log and is only
/// ever removed by a bulk clear of that log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsultationTurn {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub specialization: Specialization,
    /// Stored verbatim — not required to be a subset of the catalog list.
    pub selected_symptoms: Vec<String>,
    pub patient_message: String,
    pub doctor_response: String,
    /// Label of the responder tier that produced `doctor_response`.
    pub provider_used: String,
    pub timestamp: DateTime<Utc>,
}

impl ConsultationTurn {
    pub fn new(
        patient_id: Uuid,
        specialization: Specialization,
        selected_symptoms: Vec<String>,
        patient_message: String,
        doctor_response: String,
        provider_used: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            patient_id,
            specialization,
            selected_symptoms,
            patient_message,
            doctor_response,
            provider_used,
            timestamp: Utc::now(),
        }
    }
}
