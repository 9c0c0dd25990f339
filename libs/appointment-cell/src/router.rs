// libs/appointment-cell/src/router.rs
use std::sync::Arc;

use axum::{
    routing::{get, post, put},
    Router,
};
use tokio::sync::Mutex;

use shared_config::AppConfig;

use crate::handlers;
use crate::services::ledger::AppointmentLedger;

/// Shared state for the appointment cell: the configuration plus the single
/// ledger instance, constructed once in main and injected here. The mutex
/// gives each mutation run-to-completion semantics.
#[derive(Clone)]
pub struct AppointmentCellState {
    pub config: Arc<AppConfig>,
    pub ledger: Arc<Mutex<AppointmentLedger>>,
}

pub fn appointment_routes(state: AppointmentCellState) -> Router {
    Router::new()
        .route("/", get(handlers::list_appointments))
        .route("/", post(handlers::book_appointment))
        .route("/{appointment_id}", get(handlers::get_appointment))
        .route("/{appointment_id}/cancel", post(handlers::cancel_appointment))
        .route("/{appointment_id}/reschedule", put(handlers::reschedule_appointment))
        .route("/{appointment_id}/complete", post(handlers::complete_appointment))
        .with_state(state)
}
