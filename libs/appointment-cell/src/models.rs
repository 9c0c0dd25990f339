// libs/appointment-cell/src/models.rs
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use payment_cell::models::CardDetails;

// ==============================================================================
// CORE APPOINTMENT MODELS
// ==============================================================================

/// An appointment record. Records are never physically deleted; cancellation
/// is a status change.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Appointment {
    pub id: Uuid,
    pub doctor_id: String,
    pub doctor_name: String,
    pub date: NaiveDate,
    pub time: String,
    pub appointment_type: AppointmentType,
    pub status: AppointmentStatus,
    pub payment_status: PaymentStatus,
    pub is_follow_up: bool,
    pub label: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Rescheduled,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    /// Terminal statuses never transition again.
    pub fn is_terminal(&self) -> bool {
        matches!(self, AppointmentStatus::Completed | AppointmentStatus::Cancelled)
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentStatus::Pending => write!(f, "Pending"),
            AppointmentStatus::Confirmed => write!(f, "Confirmed"),
            AppointmentStatus::Rescheduled => write!(f, "Rescheduled"),
            AppointmentStatus::Completed => write!(f, "Completed"),
            AppointmentStatus::Cancelled => write!(f, "Cancelled"),
        }
    }
}

/// Canonical visit types. The portal's surfaces used several labels for the
/// same thing; serde aliases absorb them on the way in.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "PascalCase")]
pub enum AppointmentType {
    #[serde(alias = "Clinic Visit", alias = "clinic_visit")]
    ClinicVisit,

    #[serde(alias = "Video Consult", alias = "video_consult")]
    VideoConsult,

    #[serde(alias = "Online Consult", alias = "online_consult")]
    OnlineConsult,

    #[serde(alias = "Follow-up Visit", alias = "follow_up_visit", alias = "followup")]
    FollowUpVisit,
}

impl fmt::Display for AppointmentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppointmentType::ClinicVisit => write!(f, "Clinic Visit"),
            AppointmentType::VideoConsult => write!(f, "Video Consult"),
            AppointmentType::OnlineConsult => write!(f, "Online Consult"),
            AppointmentType::FollowUpVisit => write!(f, "Follow-up Visit"),
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum PaymentStatus {
    Pending,
    Paid,
}

impl fmt::Display for PaymentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PaymentStatus::Pending => write!(f, "Pending"),
            PaymentStatus::Paid => write!(f, "Paid"),
        }
    }
}

// ==============================================================================
// REQUEST/RESPONSE MODELS
// ==============================================================================

/// Booking input as the ledger sees it: payment has already been confirmed
/// by the payment collaborator before this is applied.
#[derive(Debug, Clone)]
pub struct BookingRequest {
    pub doctor_id: String,
    pub date: NaiveDate,
    pub time: String,
    pub appointment_type: AppointmentType,
}

/// Wire-level booking request. Dates arrive as strings in either ISO or the
/// legacy DD-MM-YYYY format and are parsed at the boundary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookAppointmentRequest {
    pub doctor_id: String,
    pub date: String,
    pub time: String,
    pub appointment_type: AppointmentType,
    pub amount: i64,
    pub card: CardDetails,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RescheduleAppointmentRequest {
    pub new_date: String,
    pub new_time: String,
}

/// Result of completing an appointment: the updated primary record, plus the
/// synthesized follow-up when one was created.
#[derive(Debug, Clone, Serialize)]
pub struct CompletionOutcome {
    pub primary: Appointment,
    pub follow_up: Option<Appointment>,
}

/// Response payload of the external reschedule collaborator:
/// `{ doctor_name, appointment_date, appointment_time, status }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RescheduleApiData {
    pub doctor_name: String,
    pub appointment_date: String,
    pub appointment_time: String,
    pub status: String,
}

// ==============================================================================
// ERROR TYPES
// ==============================================================================

#[derive(Debug, Clone, thiserror::Error)]
pub enum AppointmentError {
    #[error("Appointment not found")]
    NotFound,

    #[error("Doctor not found")]
    DoctorNotFound,

    #[error("Appointment cannot be modified in current status: {0}")]
    InvalidStateTransition(AppointmentStatus),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("External service error: {0}")]
    ExternalServiceError(String),
}
