//! Endpoint handlers — thin adapters over `SessionService`.
//!
//! Validation and session rules live in the core; handlers only translate
//! between HTTP shapes and service calls. The consult handler bridges the
//! blocking provider chain with `spawn_blocking` so a slow upstream tier
//! never stalls the async runtime.

use axum::extract::{Path, State};
use axum::Json;
use uuid::Uuid;

use crate::api::error::ApiError;
use crate::api::types::{
    ApiContext, ConsultRequest, ConsultResponse, ExportResponse, HistoryResponse, MessageResponse,
    RegisterResponse, RootResponse, SpecializationsResponse, SymptomsResponse,
};
use crate::models::PatientDraft;

/// `GET /` — liveness.
pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Medical Consultation API",
        status: "active",
    })
}

/// `GET /specializations` — catalog labels in stable order.
pub async fn specializations(State(ctx): State<ApiContext>) -> Json<SpecializationsResponse> {
    Json(SpecializationsResponse {
        specializations: ctx.service.list_specializations(),
    })
}

/// `GET /symptoms/:specialization` — symptom labels for one specialization.
pub async fn symptoms(
    State(ctx): State<ApiContext>,
    Path(specialization): Path<String>,
) -> Result<Json<SymptomsResponse>, ApiError> {
    let symptoms = ctx.service.list_symptoms(&specialization)?;
    Ok(Json(SymptomsResponse {
        symptoms: symptoms.to_vec(),
    }))
}

/// `POST /register` — register a new patient.
pub async fn register(
    State(ctx): State<ApiContext>,
    Json(draft): Json<PatientDraft>,
) -> Result<Json<RegisterResponse>, ApiError> {
    let registration = ctx.service.register_patient(draft)?;
    Ok(Json(RegisterResponse {
        patient_id: registration.patient_id,
        message: registration.message,
        status: "success",
    }))
}

/// `POST /consult` — run one consultation turn.
pub async fn consult(
    State(ctx): State<ApiContext>,
    Json(req): Json<ConsultRequest>,
) -> Result<Json<ConsultResponse>, ApiError> {
    let service = ctx.service.clone();
    let turn = tokio::task::spawn_blocking(move || {
        service.submit_turn(
            req.patient_id,
            &req.specialization,
            req.selected_symptoms,
            &req.message,
        )
    })
    .await
    .map_err(|e| ApiError::Internal(format!("consultation task failed: {e}")))??;

    Ok(Json(turn.into()))
}

/// `GET /patient/:id/history` — the patient's full consultation log.
pub async fn history(
    State(ctx): State<ApiContext>,
    Path(patient_id): Path<Uuid>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let patient = ctx.service.get_patient(patient_id)?;
    let consultations = ctx.service.get_history(patient_id)?;
    Ok(Json(HistoryResponse {
        patient,
        consultations,
    }))
}

/// `GET /patient/:id/export` — formatted text report.
pub async fn export(
    State(ctx): State<ApiContext>,
    Path(patient_id): Path<Uuid>,
) -> Result<Json<ExportResponse>, ApiError> {
    let report = ctx.service.export_report(patient_id)?;
    Ok(Json(ExportResponse { report }))
}

/// `DELETE /patient/:id/clear-history` — wipe the patient's log.
pub async fn clear_history(
    State(ctx): State<ApiContext>,
    Path(patient_id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    ctx.service.clear_history(patient_id)?;
    Ok(Json(MessageResponse {
        message: "Consultation history cleared successfully",
    }))
}
