//! Shared API state and response DTOs.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{ConsultationTurn, Patient};
use crate::service::SessionService;

/// Shared state handed to every endpoint handler.
#[derive(Clone)]
pub struct ApiContext {
    pub service: Arc<SessionService>,
}

impl ApiContext {
    pub fn new(service: Arc<SessionService>) -> Self {
        Self { service }
    }
}

/// `GET /` liveness body.
#[derive(Serialize)]
pub struct RootResponse {
    pub message: &'static str,
    pub status: &'static str,
}

#[derive(Serialize)]
pub struct SpecializationsResponse {
    pub specializations: Vec<&'static str>,
}

#[derive(Serialize)]
pub struct SymptomsResponse {
    pub symptoms: Vec<&'static str>,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub patient_id: Uuid,
    pub message: String,
    pub status: &'static str,
}

#[derive(Deserialize)]
pub struct ConsultRequest {
    pub patient_id: Uuid,
    pub specialization: String,
    #[serde(default)]
    pub selected_symptoms: Vec<String>,
    pub message: String,
}

#[derive(Serialize)]
pub struct ConsultResponse {
    pub doctor_response: String,
    pub timestamp: DateTime<Utc>,
    pub provider_used: String,
}

impl From<ConsultationTurn> for ConsultResponse {
    fn from(turn: ConsultationTurn) -> Self {
        Self {
            doctor_response: turn.doctor_response,
            timestamp: turn.timestamp,
            provider_used: turn.provider_used,
        }
    }
}

#[derive(Serialize)]
pub struct HistoryResponse {
    pub patient: Patient,
    pub consultations: Vec<ConsultationTurn>,
}

#[derive(Serialize)]
pub struct ExportResponse {
    pub report: String,
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
