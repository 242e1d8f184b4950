pub mod consultation;
pub mod enums;
pub mod patient;

pub use consultation::ConsultationTurn;
pub use enums::Specialization;
pub use patient::{Patient, PatientDraft};
