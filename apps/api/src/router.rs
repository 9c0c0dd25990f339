use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde_json::json;

use appointment_cell::router::{appointment_routes, AppointmentCellState};
use doctor_cell::router::doctor_routes;
use doctor_cell::services::directory::DoctorDirectory;

pub fn create_router(state: AppointmentCellState, directory: Arc<DoctorDirectory>) -> Router {
    Router::new()
        .route(
            "/health",
            get(|| async { Json(json!({ "status": "OK", "message": "Backend server is running" })) }),
        )
        .nest("/api/appointments", appointment_routes(state))
        .nest("/api/doctors", doctor_routes(directory))
}
