// libs/doctor-cell/src/models.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// A doctor in the static directory. Reference data only: the directory is
/// read-only at runtime and bookings just carry the name through.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doctor {
    pub id: String,
    pub name: String,
    pub speciality: Speciality,
    pub experience_years: i32,
    pub location: String,
    pub clinic_name: String,
    pub rating: f32,
    pub review_count: i32,
    pub consultation_fee: i64,
    pub available_slots: Vec<String>,
    pub is_video_available: bool,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Speciality {
    #[serde(rename = "General Physician", alias = "general_physician")]
    GeneralPhysician,
    #[serde(alias = "cardiologist")]
    Cardiologist,
    #[serde(alias = "dermatologist")]
    Dermatologist,
    #[serde(alias = "pediatrician")]
    Pediatrician,
    #[serde(alias = "neurologist")]
    Neurologist,
    #[serde(alias = "dentist")]
    Dentist,
    #[serde(alias = "orthopedic")]
    Orthopedic,
    #[serde(alias = "gynecologist")]
    Gynecologist,
}

impl fmt::Display for Speciality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Speciality::GeneralPhysician => write!(f, "General Physician"),
            Speciality::Cardiologist => write!(f, "Cardiologist"),
            Speciality::Dermatologist => write!(f, "Dermatologist"),
            Speciality::Pediatrician => write!(f, "Pediatrician"),
            Speciality::Neurologist => write!(f, "Neurologist"),
            Speciality::Dentist => write!(f, "Dentist"),
            Speciality::Orthopedic => write!(f, "Orthopedic"),
            Speciality::Gynecologist => write!(f, "Gynecologist"),
        }
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum DoctorError {
    #[error("Doctor not found")]
    NotFound,
}
