//! Consultation prompt assembly.
//!
//! Pure text construction — no I/O, no clock. The same inputs always
//! produce the same prompt, which keeps the provider tiers interchangeable
//! and the output testable.

use crate::models::{Patient, Specialization};

/// Fixed guidelines embedded in every consultation prompt.
pub const CONSULTATION_GUIDELINES: &str = "Guidelines:
1. Be professional, empathetic, and thorough
2. Ask relevant follow-up questions if needed
3. Provide medical advice based on symptoms and patient history
4. Suggest appropriate medications when necessary (include dosage and duration)
5. Recommend when to seek immediate medical attention
6. Always remind that this is a consultation and not a replacement for in-person examination
7. Be specific about medication names, dosages, and instructions";

/// Build the full prompt for one consultation turn.
pub fn build_consultation_prompt(
    patient: &Patient,
    specialization: Specialization,
    symptoms: &[String],
    message: &str,
) -> String {
    let mut prompt = String::new();

    prompt.push_str(&format!(
        "You are an experienced {specialization} providing medical consultation.\n\n",
    ));

    prompt.push_str("Patient Information:\n");
    prompt.push_str(&format!("- Name: {}\n", patient.name));
    prompt.push_str(&format!("- Age: {}\n", patient.age));
    prompt.push_str(&format!("- Gender: {}\n", patient.gender));
    prompt.push_str(&format!(
        "- Medical History: {}\n",
        patient.medical_history.as_deref().unwrap_or("None provided"),
    ));
    prompt.push_str(&format!(
        "- Current Medications: {}\n",
        patient.current_medications.as_deref().unwrap_or("None"),
    ));
    prompt.push_str(&format!(
        "- Allergies: {}\n",
        patient.allergies.as_deref().unwrap_or("None"),
    ));
    prompt.push('\n');

    prompt.push_str(&format!("Selected Symptoms: {}\n\n", join_symptoms(symptoms)));

    prompt.push_str(CONSULTATION_GUIDELINES);
    prompt.push_str("\n\n");

    prompt.push_str(&format!("Patient's message: {message}\n\n"));
    prompt.push_str("Doctor's response:");

    prompt
}

/// Comma-joined symptom list, or the fixed sentinel when nothing was picked.
fn join_symptoms(symptoms: &[String]) -> String {
    if symptoms.is_empty() {
        "None selected".to_string()
    } else {
        symptoms.join(", ")
    }
}
