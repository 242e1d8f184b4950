//! Session orchestration facade.
//!
//! Owns the store and the provider chain; every front-end operation goes
//! through here. All failures are typed `ConsultError`s — the chain's
//! fallback guarantee means a submitted turn can only fail on validation
//! or an unknown patient/specialization, never on provider availability.

use std::sync::Arc;

use uuid::Uuid;

use crate::catalog;
use crate::error::{ConsultError, ValidationError};
use crate::models::{ConsultationTurn, Patient, PatientDraft, Specialization};
use crate::prompt::build_consultation_prompt;
use crate::providers::{ProviderChain, TurnContext};
use crate::report;
use crate::store::ConsultationStore;

/// Outcome of a successful registration.
#[derive(Debug, Clone)]
pub struct Registration {
    pub patient_id: Uuid,
    pub message: String,
}

pub struct SessionService {
    store: Arc<ConsultationStore>,
    chain: ProviderChain,
}

impl SessionService {
    pub fn new(store: Arc<ConsultationStore>, chain: ProviderChain) -> Self {
        Self { store, chain }
    }

    /// Register a new patient and greet them.
    pub fn register_patient(&self, draft: PatientDraft) -> Result<Registration, ConsultError> {
        let patient_id = self.store.register(draft)?;
        let patient = self.store.get_patient(patient_id)?;

        Ok(Registration {
            patient_id,
            message: format!(
                "Patient registered successfully! Welcome, {}!",
                patient.name,
            ),
        })
    }

    pub fn get_patient(&self, patient_id: Uuid) -> Result<Patient, ConsultError> {
        self.store.get_patient(patient_id)
    }

    /// Specialization labels in stable enumeration order.
    pub fn list_specializations(&self) -> Vec<&'static str> {
        catalog::specializations()
            .iter()
            .map(|s| s.label())
            .collect()
    }

    /// The symptom list for a specialization label.
    pub fn list_symptoms(&self, specialization: &str) -> Result<&'static [&'static str], ConsultError> {
        let spec: Specialization = specialization.parse()?;
        Ok(catalog::symptoms(spec))
    }

    /// Run one consultation turn: validate, build the prompt, resolve a
    /// response through the provider chain, and append to the log.
    pub fn submit_turn(
        &self,
        patient_id: Uuid,
        specialization: &str,
        selected_symptoms: Vec<String>,
        message: &str,
    ) -> Result<ConsultationTurn, ConsultError> {
        let patient = self.store.get_patient(patient_id)?;
        let spec: Specialization = specialization.parse()?;

        let message = message.trim();
        if message.is_empty() {
            return Err(ValidationError::EmptyMessage.into());
        }

        let prompt = build_consultation_prompt(&patient, spec, &selected_symptoms, message);
        let reply = self.chain.respond(
            &prompt,
            &TurnContext {
                patient: &patient,
                specialization: spec,
                symptoms: &selected_symptoms,
                message,
            },
        );

        let turn = ConsultationTurn::new(
            patient_id,
            spec,
            selected_symptoms,
            message.to_string(),
            reply.text,
            reply.provider,
        );

        let stored = self.store.append_turn(patient_id, turn)?;
        tracing::info!(
            patient_id = %patient_id,
            specialization = %spec,
            provider = %stored.provider_used,
            "Consultation turn completed"
        );
        Ok(stored)
    }

    pub fn get_history(&self, patient_id: Uuid) -> Result<Vec<ConsultationTurn>, ConsultError> {
        self.store.history(patient_id)
    }

    /// Render the patient's log as a text report. Returns the "no data"
    /// sentinel for an empty log.
    pub fn export_report(&self, patient_id: Uuid) -> Result<String, ConsultError> {
        let patient = self.store.get_patient(patient_id)?;
        let turns = self.store.history(patient_id)?;
        Ok(report::render_report(&patient, &turns))
    }

    pub fn clear_history(&self, patient_id: Uuid) -> Result<(), ConsultError> {
        self.store.clear(patient_id)
    }
}
