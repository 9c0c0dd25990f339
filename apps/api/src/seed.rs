use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use appointment_cell::models::{Appointment, AppointmentStatus, AppointmentType, PaymentStatus};

/// Demo appointments the server starts with, matching the portal's mock
/// data set. State resets on restart; there is no persistence layer.
pub fn demo_appointments() -> Vec<Appointment> {
    let date = NaiveDate::from_ymd_opt(2026, 2, 4).expect("valid seed date");
    let now = Utc::now();

    let seed = |doctor_id: &str, doctor_name: &str, time: &str| Appointment {
        id: Uuid::new_v4(),
        doctor_id: doctor_id.to_string(),
        doctor_name: doctor_name.to_string(),
        date,
        time: time.to_string(),
        appointment_type: AppointmentType::ClinicVisit,
        status: AppointmentStatus::Confirmed,
        payment_status: PaymentStatus::Paid,
        is_follow_up: false,
        label: None,
        created_at: now,
        updated_at: now,
    };

    vec![
        seed("d1", "Dr. Aarav Patel", "09:00 AM"),
        seed("d2", "Dr. Rajesh Iyer", "10:00 AM"),
    ]
}
