pub mod dates;
pub mod handlers;
pub mod models;
pub mod router;
pub mod services;

pub use models::{
    Appointment, AppointmentError, AppointmentStatus, AppointmentType, BookAppointmentRequest,
    CompletionOutcome, PaymentStatus, RescheduleAppointmentRequest,
};
pub use services::ledger::AppointmentLedger;
