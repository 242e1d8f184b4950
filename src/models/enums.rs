use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ConsultError;

/// The closed set of doctor specializations a consultation can target.
///
/// Declaration order is the stable enumeration order used everywhere a
/// specialization list is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Specialization {
    Dermatologist,
    Gynecologist,
    Cardiologist,
    Neurologist,
    Orthopedist,
}

impl Specialization {
    /// All specializations, in enumeration order.
    pub const ALL: &'static [Specialization] = &[
        Specialization::Dermatologist,
        Specialization::Gynecologist,
        Specialization::Cardiologist,
        Specialization::Neurologist,
        Specialization::Orthopedist,
    ];

    /// The human-facing label. Doubles as the wire value.
    pub fn label(&self) -> &'static str {
        match self {
            Specialization::Dermatologist => "Dermatologist",
            Specialization::Gynecologist => "Gynecologist",
            Specialization::Cardiologist => "Cardiologist",
            Specialization::Neurologist => "Neurologist",
            Specialization::Orthopedist => "Orthopedist",
        }
    }
}

impl fmt::Display for Specialization {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Specialization {
    type Err = ConsultError;

    /// The single validation boundary for specialization labels. Unknown
    /// labels are rejected here and nowhere else.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Specialization::ALL
            .iter()
            .copied()
            .find(|spec| spec.label() == s.trim())
            .ok_or_else(|| ConsultError::UnknownSpecialization(s.trim().to_string()))
    }
}
