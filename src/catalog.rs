//! Specialization → symptom reference data.
//!
//! Static at runtime. Every specialization carries an ordered,
//! duplicate-free list of symptom labels shown to the patient as
//! pre-consultation checkboxes.

use crate::models::Specialization;

static DERMATOLOGIST_SYMPTOMS: &[&str] = &[
    "Skin rash",
    "Acne",
    "Dry skin",
    "Itching",
    "Skin discoloration",
    "Hair loss",
    "Nail problems",
    "Moles/skin growths",
    "Eczema",
    "Psoriasis",
];

static GYNECOLOGIST_SYMPTOMS: &[&str] = &[
    "Irregular periods",
    "Heavy bleeding",
    "Pelvic pain",
    "Vaginal discharge",
    "Painful periods",
    "Missed periods",
    "Breast pain",
    "Urinary issues",
    "Menopause symptoms",
    "Fertility concerns",
];

static CARDIOLOGIST_SYMPTOMS: &[&str] = &[
    "Chest pain",
    "Shortness of breath",
    "Heart palpitations",
    "Dizziness",
    "Fatigue",
    "Swollen legs/ankles",
    "High blood pressure",
    "Irregular heartbeat",
    "Fainting",
    "Exercise intolerance",
];

static NEUROLOGIST_SYMPTOMS: &[&str] = &[
    "Headaches",
    "Memory problems",
    "Seizures",
    "Numbness/tingling",
    "Muscle weakness",
    "Balance problems",
    "Vision changes",
    "Speech difficulties",
    "Tremors",
    "Sleep disorders",
];

static ORTHOPEDIST_SYMPTOMS: &[&str] = &[
    "Joint pain",
    "Back pain",
    "Neck pain",
    "Muscle pain",
    "Stiffness",
    "Limited range of motion",
    "Swelling",
    "Bone pain",
    "Sports injury",
    "Arthritis",
];

/// All specializations, in stable enumeration order.
pub fn specializations() -> &'static [Specialization] {
    Specialization::ALL
}

/// The symptom list for a specialization.
///
/// Total over the closed enum — unknown labels are rejected earlier, at
/// `Specialization::from_str`.
pub fn symptoms(specialization: Specialization) -> &'static [&'static str] {
    match specialization {
        Specialization::Dermatologist => DERMATOLOGIST_SYMPTOMS,
        Specialization::Gynecologist => GYNECOLOGIST_SYMPTOMS,
        Specialization::Cardiologist => CARDIOLOGIST_SYMPTOMS,
        Specialization::Neurologist => NEUROLOGIST_SYMPTOMS,
        Specialization::Orthopedist => ORTHOPEDIST_SYMPTOMS,
    }
}
