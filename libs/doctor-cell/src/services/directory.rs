// libs/doctor-cell/src/services/directory.rs
use tracing::debug;

use crate::models::{Doctor, DoctorError, Speciality};

/// In-process doctor directory. Seeded once at startup and never mutated;
/// the appointment cell resolves doctor references against it when booking.
#[derive(Debug, Clone)]
pub struct DoctorDirectory {
    doctors: Vec<Doctor>,
}

impl DoctorDirectory {
    pub fn new(doctors: Vec<Doctor>) -> Self {
        Self { doctors }
    }

    /// Directory with the demo roster the portal ships with.
    pub fn with_demo_roster() -> Self {
        Self::new(demo_roster())
    }

    pub fn resolve(&self, doctor_id: &str) -> Result<&Doctor, DoctorError> {
        debug!("Resolving doctor reference: {}", doctor_id);
        self.doctors
            .iter()
            .find(|d| d.id == doctor_id)
            .ok_or(DoctorError::NotFound)
    }

    pub fn list(&self) -> &[Doctor] {
        &self.doctors
    }

    pub fn by_speciality(&self, speciality: Speciality) -> Vec<&Doctor> {
        self.doctors
            .iter()
            .filter(|d| d.speciality == speciality)
            .collect()
    }
}

impl Default for DoctorDirectory {
    fn default() -> Self {
        Self::with_demo_roster()
    }
}

fn demo_roster() -> Vec<Doctor> {
    vec![
        Doctor {
            id: "d1".to_string(),
            name: "Dr. Aarav Patel".to_string(),
            speciality: Speciality::Cardiologist,
            experience_years: 11,
            location: "Mumbai, MH".to_string(),
            clinic_name: "Heart Care Clinic".to_string(),
            rating: 4.9,
            review_count: 124,
            consultation_fee: 1500,
            available_slots: vec![
                "10:00 AM".to_string(),
                "11:30 AM".to_string(),
                "2:00 PM".to_string(),
                "4:30 PM".to_string(),
            ],
            is_video_available: false,
        },
        Doctor {
            id: "d2".to_string(),
            name: "Dr. Rajesh Iyer".to_string(),
            speciality: Speciality::Neurologist,
            experience_years: 22,
            location: "Chennai, TN".to_string(),
            clinic_name: "NeuroCare Centre".to_string(),
            rating: 4.8,
            review_count: 98,
            consultation_fee: 1800,
            available_slots: vec![
                "9:00 AM".to_string(),
                "10:00 AM".to_string(),
                "3:00 PM".to_string(),
            ],
            is_video_available: true,
        },
        Doctor {
            id: "d3".to_string(),
            name: "Dr. Vikram Singh".to_string(),
            speciality: Speciality::Orthopedic,
            experience_years: 15,
            location: "Delhi, DL".to_string(),
            clinic_name: "Bone & Joint Clinic".to_string(),
            rating: 4.7,
            review_count: 156,
            consultation_fee: 1200,
            available_slots: vec![
                "11:00 AM".to_string(),
                "1:00 PM".to_string(),
                "5:00 PM".to_string(),
            ],
            is_video_available: true,
        },
        Doctor {
            id: "d4".to_string(),
            name: "Dr. Priya Sharma".to_string(),
            speciality: Speciality::Dermatologist,
            experience_years: 9,
            location: "Bengaluru, KA".to_string(),
            clinic_name: "SkinFirst Clinic".to_string(),
            rating: 4.9,
            review_count: 203,
            consultation_fee: 1000,
            available_slots: vec![
                "12:00 PM".to_string(),
                "2:00 PM".to_string(),
                "4:00 PM".to_string(),
            ],
            is_video_available: true,
        },
        Doctor {
            id: "d5".to_string(),
            name: "Dr. Sneha Gupta".to_string(),
            speciality: Speciality::Pediatrician,
            experience_years: 12,
            location: "Pune, MH".to_string(),
            clinic_name: "Little Stars Children's Clinic".to_string(),
            rating: 4.8,
            review_count: 178,
            consultation_fee: 900,
            available_slots: vec![
                "9:30 AM".to_string(),
                "1:00 PM".to_string(),
                "3:30 PM".to_string(),
            ],
            is_video_available: false,
        },
        Doctor {
            id: "d6".to_string(),
            name: "Dr. Meera Reddy".to_string(),
            speciality: Speciality::Gynecologist,
            experience_years: 17,
            location: "Hyderabad, TS".to_string(),
            clinic_name: "Women's Wellness Centre".to_string(),
            rating: 4.9,
            review_count: 141,
            consultation_fee: 1400,
            available_slots: vec![
                "10:30 AM".to_string(),
                "12:30 PM".to_string(),
                "2:00 PM".to_string(),
            ],
            is_video_available: true,
        },
    ]
}
