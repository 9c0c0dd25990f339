// libs/appointment-cell/src/handlers.rs
use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};
use tracing::warn;
use uuid::Uuid;

use payment_cell::models::PaymentError;
use payment_cell::services::payment::PaymentService;
use shared_models::error::AppError;

use crate::dates::{format_wire_date, parse_boundary_date};
use crate::models::{
    Appointment, AppointmentError, BookAppointmentRequest, BookingRequest,
    RescheduleAppointmentRequest,
};
use crate::router::AppointmentCellState;
use crate::services::reschedule::RescheduleApiClient;

/// Wire projection of an appointment. Dates leave in the DD-MM-YYYY format
/// the demonstration contract uses; everything internal stays ISO.
fn wire_view(appointment: &Appointment) -> Value {
    json!({
        "id": appointment.id,
        "doctor_id": appointment.doctor_id,
        "doctor_name": appointment.doctor_name,
        "appointment_date": format_wire_date(appointment.date),
        "appointment_time": appointment.time,
        "type": appointment.appointment_type.to_string(),
        "status": appointment.status.to_string(),
        "payment_status": appointment.payment_status.to_string(),
        "is_follow_up": appointment.is_follow_up,
        "label": appointment.label,
    })
}

fn into_app_error(error: AppointmentError) -> AppError {
    match error {
        AppointmentError::NotFound => AppError::NotFound("Appointment not found".to_string()),
        AppointmentError::DoctorNotFound => AppError::NotFound("Doctor not found".to_string()),
        AppointmentError::InvalidStateTransition(status) => AppError::Conflict(format!(
            "Appointment cannot be modified in current status: {}",
            status
        )),
        AppointmentError::ValidationError(msg) => AppError::ValidationError(msg),
        AppointmentError::ExternalServiceError(msg) => AppError::ExternalService(msg),
    }
}

fn into_payment_error(error: PaymentError) -> AppError {
    match error {
        PaymentError::Declined => AppError::Payment(error.to_string()),
        _ => AppError::ValidationError(error.to_string()),
    }
}

#[axum::debug_handler]
pub async fn list_appointments(
    State(state): State<AppointmentCellState>,
) -> Result<Json<Value>, AppError> {
    let ledger = state.ledger.lock().await;
    let appointments: Vec<Value> = ledger.list().iter().map(wire_view).collect();

    Ok(Json(json!({
        "success": true,
        "data": appointments
    })))
}

#[axum::debug_handler]
pub async fn get_appointment(
    State(state): State<AppointmentCellState>,
    Path(appointment_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let ledger = state.ledger.lock().await;
    let appointment = ledger.get(appointment_id).map_err(into_app_error)?;

    Ok(Json(json!({
        "success": true,
        "data": wire_view(&appointment)
    })))
}

/// Book an appointment. Payment is confirmed with the payment collaborator
/// first; the ledger is only touched once that succeeds.
#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<AppointmentCellState>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    let date = parse_boundary_date(&request.date).map_err(into_app_error)?;

    let payment = PaymentService::new(state.config.payment_decline_rate);
    let receipt = payment
        .process(request.amount, &request.card)
        .map_err(into_payment_error)?;

    let mut ledger = state.ledger.lock().await;
    let appointment = ledger
        .book(BookingRequest {
            doctor_id: request.doctor_id,
            date,
            time: request.time,
            appointment_type: request.appointment_type,
        })
        .map_err(into_app_error)?;

    Ok(Json(json!({
        "success": true,
        "data": wire_view(&appointment),
        "payment_reference": receipt.reference
    })))
}

#[axum::debug_handler]
pub async fn cancel_appointment(
    State(state): State<AppointmentCellState>,
    Path(appointment_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let mut ledger = state.ledger.lock().await;
    let appointment = ledger.cancel(appointment_id).map_err(into_app_error)?;

    Ok(Json(json!({
        "success": true,
        "data": wire_view(&appointment)
    })))
}

/// Reschedule an appointment. When a remote collaborator is configured the
/// call goes there first; whether an unreachable collaborator masks into a
/// local apply is a configuration decision, not a default.
#[axum::debug_handler]
pub async fn reschedule_appointment(
    State(state): State<AppointmentCellState>,
    Path(appointment_id): Path<Uuid>,
    Json(request): Json<RescheduleAppointmentRequest>,
) -> Result<Json<Value>, AppError> {
    let new_date = parse_boundary_date(&request.new_date).map_err(into_app_error)?;

    if let Some(base_url) = &state.config.reschedule_api_base_url {
        let client = RescheduleApiClient::new(base_url);
        match client
            .reschedule(&appointment_id.to_string(), &request.new_date, &request.new_time)
            .await
        {
            Ok(_) => {}
            Err(AppointmentError::ExternalServiceError(msg))
                if state.config.reschedule_fallback_enabled =>
            {
                warn!(
                    "Reschedule collaborator unavailable ({}), applying locally per fallback policy",
                    msg
                );
            }
            Err(e) => return Err(into_app_error(e)),
        }
    }

    let mut ledger = state.ledger.lock().await;
    let appointment = ledger
        .reschedule(appointment_id, new_date, request.new_time)
        .map_err(into_app_error)?;

    Ok(Json(json!({
        "success": true,
        "data": {
            "doctor_name": appointment.doctor_name,
            "appointment_date": format_wire_date(appointment.date),
            "appointment_time": appointment.time,
            "status": appointment.status.to_string(),
        }
    })))
}

#[axum::debug_handler]
pub async fn complete_appointment(
    State(state): State<AppointmentCellState>,
    Path(appointment_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let mut ledger = state.ledger.lock().await;
    let outcome = ledger.complete(appointment_id).map_err(into_app_error)?;

    Ok(Json(json!({
        "success": true,
        "data": {
            "primary": wire_view(&outcome.primary),
            "follow_up": outcome.follow_up.as_ref().map(wire_view),
        }
    })))
}
