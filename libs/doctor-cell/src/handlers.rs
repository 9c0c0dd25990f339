// libs/doctor-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use shared_models::error::AppError;

use crate::models::Speciality;
use crate::services::directory::DoctorDirectory;

#[derive(Debug, Deserialize)]
pub struct DoctorQueryParams {
    pub speciality: Option<Speciality>,
}

#[axum::debug_handler]
pub async fn list_doctors(
    State(directory): State<Arc<DoctorDirectory>>,
    Query(params): Query<DoctorQueryParams>,
) -> Result<Json<Value>, AppError> {
    let doctors: Vec<_> = match params.speciality {
        Some(speciality) => directory.by_speciality(speciality),
        None => directory.list().iter().collect(),
    };

    Ok(Json(json!({
        "success": true,
        "data": doctors
    })))
}

#[axum::debug_handler]
pub async fn get_doctor(
    State(directory): State<Arc<DoctorDirectory>>,
    Path(doctor_id): Path<String>,
) -> Result<Json<Value>, AppError> {
    let doctor = directory
        .resolve(&doctor_id)
        .map_err(|_| AppError::NotFound(format!("Doctor {} not found", doctor_id)))?;

    Ok(Json(json!({
        "success": true,
        "data": doctor
    })))
}
