// libs/appointment-cell/src/services/ledger.rs
use chrono::{Days, NaiveDate, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use doctor_cell::services::directory::DoctorDirectory;

use crate::models::{
    Appointment, AppointmentError, AppointmentStatus, AppointmentType, BookingRequest,
    CompletionOutcome, PaymentStatus,
};
use crate::services::lifecycle::AppointmentLifecycleService;

pub const FOLLOW_UP_LABEL: &str = "Follow-up Visit (Doctor Suggested)";
const FOLLOW_UP_OFFSET_DAYS: u64 = 7;

/// The authoritative appointment collection. All mutations go through the
/// methods below; callers only ever get clones of the records.
///
/// Single-threaded semantics: the HTTP layer serializes access behind a
/// mutex, so each operation runs to completion before the next is applied.
pub struct AppointmentLedger {
    appointments: Vec<Appointment>,
    directory: DoctorDirectory,
    lifecycle: AppointmentLifecycleService,
}

impl AppointmentLedger {
    pub fn new(directory: DoctorDirectory) -> Self {
        Self {
            appointments: Vec::new(),
            directory,
            lifecycle: AppointmentLifecycleService::new(),
        }
    }

    /// Ledger pre-populated with existing records, e.g. the demo seed set.
    pub fn with_appointments(directory: DoctorDirectory, appointments: Vec<Appointment>) -> Self {
        Self {
            appointments,
            directory,
            lifecycle: AppointmentLifecycleService::new(),
        }
    }

    /// Book a new appointment. Payment must already be confirmed by the
    /// payment collaborator; the ledger records it as paid.
    pub fn book(&mut self, request: BookingRequest) -> Result<Appointment, AppointmentError> {
        let doctor = self
            .directory
            .resolve(&request.doctor_id)
            .map_err(|_| AppointmentError::DoctorNotFound)?;

        let now = Utc::now();
        let appointment = Appointment {
            id: Uuid::new_v4(),
            doctor_id: doctor.id.clone(),
            doctor_name: doctor.name.clone(),
            date: request.date,
            time: request.time,
            appointment_type: request.appointment_type,
            status: AppointmentStatus::Confirmed,
            payment_status: PaymentStatus::Paid,
            is_follow_up: false,
            label: None,
            created_at: now,
            updated_at: now,
        };

        info!(
            "Appointment {} booked with doctor {} for {}",
            appointment.id, appointment.doctor_id, appointment.date
        );

        self.appointments.push(appointment.clone());
        Ok(appointment)
    }

    /// Cancel an appointment. Cancelling an already-terminal appointment is
    /// an error, not a no-op.
    pub fn cancel(&mut self, appointment_id: Uuid) -> Result<Appointment, AppointmentError> {
        debug!("Cancelling appointment: {}", appointment_id);

        let index = self.index_of(appointment_id)?;
        self.lifecycle.validate_status_transition(
            &self.appointments[index].status,
            &AppointmentStatus::Cancelled,
        )?;

        let appointment = &mut self.appointments[index];
        appointment.status = AppointmentStatus::Cancelled;
        appointment.updated_at = Utc::now();

        info!("Appointment {} cancelled", appointment_id);
        Ok(appointment.clone())
    }

    /// Reschedule an appointment to a new date and time. No conflict check
    /// against the doctor's other bookings is performed.
    pub fn reschedule(
        &mut self,
        appointment_id: Uuid,
        new_date: NaiveDate,
        new_time: String,
    ) -> Result<Appointment, AppointmentError> {
        debug!("Rescheduling appointment: {}", appointment_id);

        let index = self.index_of(appointment_id)?;
        self.lifecycle.validate_status_transition(
            &self.appointments[index].status,
            &AppointmentStatus::Rescheduled,
        )?;

        let appointment = &mut self.appointments[index];
        appointment.date = new_date;
        appointment.time = new_time;
        appointment.status = AppointmentStatus::Rescheduled;
        appointment.updated_at = Utc::now();

        info!(
            "Appointment {} rescheduled to {} {}",
            appointment_id, appointment.date, appointment.time
        );
        Ok(appointment.clone())
    }

    /// Complete an appointment. Completing a clinic visit synthesizes a
    /// follow-up visit seven calendar days later, at most once per
    /// (doctor, follow-up date) pair.
    pub fn complete(&mut self, appointment_id: Uuid) -> Result<CompletionOutcome, AppointmentError> {
        debug!("Completing appointment: {}", appointment_id);

        let index = self.index_of(appointment_id)?;
        self.lifecycle.validate_status_transition(
            &self.appointments[index].status,
            &AppointmentStatus::Completed,
        )?;

        let appointment = &mut self.appointments[index];
        appointment.status = AppointmentStatus::Completed;
        appointment.updated_at = Utc::now();
        let primary = appointment.clone();

        let follow_up = if primary.appointment_type == AppointmentType::ClinicVisit {
            self.synthesize_follow_up(&primary)?
        } else {
            None
        };

        info!(
            "Appointment {} completed{}",
            appointment_id,
            follow_up
                .as_ref()
                .map(|f| format!(", follow-up {} created for {}", f.id, f.date))
                .unwrap_or_default()
        );

        Ok(CompletionOutcome { primary, follow_up })
    }

    pub fn get(&self, appointment_id: Uuid) -> Result<Appointment, AppointmentError> {
        self.appointments
            .iter()
            .find(|apt| apt.id == appointment_id)
            .cloned()
            .ok_or(AppointmentError::NotFound)
    }

    pub fn list(&self) -> Vec<Appointment> {
        self.appointments.clone()
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }

    fn index_of(&self, appointment_id: Uuid) -> Result<usize, AppointmentError> {
        self.appointments
            .iter()
            .position(|apt| apt.id == appointment_id)
            .ok_or(AppointmentError::NotFound)
    }

    /// Create the derived follow-up record unless one already exists for the
    /// same doctor on the same date. Calendar-day arithmetic, so month and
    /// year rollovers are handled by chrono, not string manipulation.
    fn synthesize_follow_up(
        &mut self,
        parent: &Appointment,
    ) -> Result<Option<Appointment>, AppointmentError> {
        let follow_up_date = parent
            .date
            .checked_add_days(Days::new(FOLLOW_UP_OFFSET_DAYS))
            .ok_or_else(|| {
                AppointmentError::ValidationError(format!(
                    "Follow-up date out of range for {}",
                    parent.date
                ))
            })?;

        let already_exists = self.appointments.iter().any(|apt| {
            apt.doctor_id == parent.doctor_id
                && apt.date == follow_up_date
                && apt.appointment_type == AppointmentType::FollowUpVisit
                && apt.is_follow_up
        });

        if already_exists {
            debug!(
                "Follow-up already exists for doctor {} on {}, skipping",
                parent.doctor_id, follow_up_date
            );
            return Ok(None);
        }

        let now = Utc::now();
        let follow_up = Appointment {
            id: Uuid::new_v4(),
            doctor_id: parent.doctor_id.clone(),
            doctor_name: parent.doctor_name.clone(),
            date: follow_up_date,
            time: parent.time.clone(),
            appointment_type: AppointmentType::FollowUpVisit,
            status: AppointmentStatus::Completed,
            payment_status: PaymentStatus::Pending,
            is_follow_up: true,
            label: Some(FOLLOW_UP_LABEL.to_string()),
            created_at: now,
            updated_at: now,
        };

        self.appointments.push(follow_up.clone());
        Ok(Some(follow_up))
    }
}
