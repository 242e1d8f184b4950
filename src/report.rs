//! Consultation report rendering.
//!
//! Deterministic text assembly: the report is a pure function of the
//! patient record and the turn slice, so repeated exports of an unchanged
//! log are byte-identical. The only timestamps in the output are the ones
//! stored on the data itself.

use chrono::{DateTime, Utc};

use crate::models::{ConsultationTurn, Patient};

/// Returned instead of a report when the patient has no turns. Callers
/// must treat this as "nothing to export", not as an error.
pub const EMPTY_REPORT_SENTINEL: &str = "No consultation data to export";

const HEAVY_RULE: &str =
    "═══════════════════════════════════════════════════════════════════";
const LIGHT_RULE: &str =
    "────────────────────────────────────────────────────────────────────";

const MEDICAL_DISCLAIMER: &str = "MEDICAL DISCLAIMER:
This virtual consultation is for informational purposes only and does not
replace professional medical advice, diagnosis, or treatment. Always seek
the advice of qualified healthcare providers for any medical concerns.";

/// Render the patient's full consultation log as a formatted text report.
pub fn render_report(patient: &Patient, turns: &[ConsultationTurn]) -> String {
    if turns.is_empty() {
        return EMPTY_REPORT_SENTINEL.to_string();
    }

    let mut report = String::new();

    banner(&mut report, "MEDICAL CONSULTATION REPORT");
    report.push('\n');

    report.push_str("PATIENT INFORMATION:\n");
    report.push_str(LIGHT_RULE);
    report.push('\n');
    field(&mut report, "Name:", &patient.name);
    field(&mut report, "Age:", &format!("{} years", patient.age));
    field(&mut report, "Gender:", &patient.gender);
    field(&mut report, "Phone:", &patient.phone);
    field(&mut report, "Registration Date:", &stamp(patient.registered_at));
    report.push('\n');
    field(
        &mut report,
        "Medical History:",
        patient.medical_history.as_deref().unwrap_or("None provided"),
    );
    field(
        &mut report,
        "Current Medications:",
        patient.current_medications.as_deref().unwrap_or("None"),
    );
    field(
        &mut report,
        "Known Allergies:",
        patient.allergies.as_deref().unwrap_or("None"),
    );
    report.push('\n');

    banner(&mut report, "CONSULTATION HISTORY");
    report.push('\n');

    for (i, turn) in turns.iter().enumerate() {
        let symptoms = if turn.selected_symptoms.is_empty() {
            "None".to_string()
        } else {
            turn.selected_symptoms.join(", ")
        };

        report.push_str(&format!(
            "┌{LIGHT_RULE}\n│ CONSULTATION #{number} - {when}\n└{LIGHT_RULE}\n\n",
            number = i + 1,
            when = stamp(turn.timestamp),
        ));
        report.push_str(&format!("SPECIALIZATION:\n{}\n\n", turn.specialization));
        report.push_str(&format!("SYMPTOMS SELECTED:\n{symptoms}\n\n"));
        report.push_str(&format!("PATIENT MESSAGE:\n{}\n\n", turn.patient_message));
        report.push_str(&format!("DOCTOR RESPONSE:\n{}\n\n", turn.doctor_response));
    }

    banner(&mut report, "REPORT SUMMARY");
    report.push('\n');
    field(&mut report, "Total Consultations:", &turns.len().to_string());
    report.push('\n');
    report.push_str(MEDICAL_DISCLAIMER);
    report.push_str("\n\n");
    report.push_str(HEAVY_RULE);
    report.push_str("\n                END OF MEDICAL CONSULTATION REPORT\n");
    report.push_str(HEAVY_RULE);
    report.push('\n');

    report
}

fn banner(out: &mut String, title: &str) {
    out.push_str(&format!("╔{HEAVY_RULE}\n║            {title}\n╚{HEAVY_RULE}\n"));
}

fn field(out: &mut String, label: &str, value: &str) {
    out.push_str(&format!("{label:<24}{value}\n"));
}

fn stamp(when: DateTime<Utc>) -> String {
    when.format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
