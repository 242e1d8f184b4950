//! In-memory patient and consultation-log store.
//!
//! Single source of truth for session state, constructed once at startup
//! and injected into the session service. The outer map is write-locked
//! only to register a patient; each patient record carries its own log
//! mutex, so appends and clears for one patient serialize against each
//! other while different patients never contend.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, RwLock};

use chrono::Utc;
use uuid::Uuid;

use crate::error::ConsultError;
use crate::models::{ConsultationTurn, Patient, PatientDraft};

struct PatientRecord {
    patient: Patient,
    log: Mutex<Vec<ConsultationTurn>>,
}

/// Owner of all patient records and per-patient ordered consultation logs.
pub struct ConsultationStore {
    patients: RwLock<HashMap<Uuid, Arc<PatientRecord>>>,
}

impl ConsultationStore {
    pub fn new() -> Self {
        Self {
            patients: RwLock::new(HashMap::new()),
        }
    }

    /// Validate the draft, assign a fresh id, and persist the patient with
    /// an empty consultation log.
    pub fn register(&self, draft: PatientDraft) -> Result<Uuid, ConsultError> {
        draft.validate()?;

        let id = Uuid::new_v4();
        let patient = draft.into_patient(id, Utc::now());

        let mut patients = self
            .patients
            .write()
            .map_err(|_| ConsultError::LockPoisoned)?;
        patients.insert(
            id,
            Arc::new(PatientRecord {
                patient,
                log: Mutex::new(Vec::new()),
            }),
        );

        tracing::debug!(patient_id = %id, "Patient registered");
        Ok(id)
    }

    pub fn get_patient(&self, patient_id: Uuid) -> Result<Patient, ConsultError> {
        Ok(self.record(patient_id)?.patient.clone())
    }

    /// Append a turn to the patient's log, preserving insertion order.
    ///
    /// Timestamps are clamped to be non-decreasing within the log, so a
    /// backwards clock read cannot break chronological ordering.
    pub fn append_turn(
        &self,
        patient_id: Uuid,
        mut turn: ConsultationTurn,
    ) -> Result<ConsultationTurn, ConsultError> {
        let record = self.record(patient_id)?;
        let mut log = record.log.lock().map_err(|_| ConsultError::LockPoisoned)?;

        if let Some(last) = log.last() {
            if turn.timestamp < last.timestamp {
                turn.timestamp = last.timestamp;
            }
        }

        log.push(turn.clone());
        Ok(turn)
    }

    /// The patient's full log in chronological order. Empty for a
    /// registered patient with no turns — distinct from `PatientNotFound`.
    pub fn history(&self, patient_id: Uuid) -> Result<Vec<ConsultationTurn>, ConsultError> {
        let record = self.record(patient_id)?;
        let log = record.log.lock().map_err(|_| ConsultError::LockPoisoned)?;
        Ok(log.clone())
    }

    /// Replace the patient's log with an empty one. Idempotent.
    pub fn clear(&self, patient_id: Uuid) -> Result<(), ConsultError> {
        let record = self.record(patient_id)?;
        let mut log = record.log.lock().map_err(|_| ConsultError::LockPoisoned)?;
        log.clear();
        tracing::debug!(patient_id = %patient_id, "Consultation history cleared");
        Ok(())
    }

    /// Number of registered patients.
    pub fn patient_count(&self) -> Result<usize, ConsultError> {
        Ok(self
            .patients
            .read()
            .map_err(|_| ConsultError::LockPoisoned)?
            .len())
    }

    fn record(&self, patient_id: Uuid) -> Result<Arc<PatientRecord>, ConsultError> {
        self.patients
            .read()
            .map_err(|_| ConsultError::LockPoisoned)?
            .get(&patient_id)
            .cloned()
            .ok_or(ConsultError::PatientNotFound(patient_id))
    }
}

impl Default for ConsultationStore {
    fn default() -> Self {
        Self::new()
    }
}
