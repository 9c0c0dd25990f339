// libs/appointment-cell/src/services/reschedule.rs
use reqwest::StatusCode;
use serde::Deserialize;
use serde_json::json;
use tracing::{debug, warn};

use crate::models::{AppointmentError, RescheduleApiData};

#[derive(Debug, Deserialize)]
struct RescheduleApiEnvelope {
    success: bool,
    data: Option<RescheduleApiData>,
    error: Option<String>,
}

/// Client for the external reschedule collaborator:
/// `PUT {base}/api/appointments/{id}/reschedule`.
pub struct RescheduleApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl RescheduleApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub async fn reschedule(
        &self,
        appointment_id: &str,
        new_date: &str,
        new_time: &str,
    ) -> Result<RescheduleApiData, AppointmentError> {
        let url = format!(
            "{}/api/appointments/{}/reschedule",
            self.base_url, appointment_id
        );
        debug!("Calling reschedule collaborator: {}", url);

        let response = self
            .client
            .put(&url)
            .json(&json!({
                "new_date": new_date,
                "new_time": new_time,
            }))
            .send()
            .await
            .map_err(|e| {
                warn!("Reschedule collaborator unreachable: {}", e);
                AppointmentError::ExternalServiceError(e.to_string())
            })?;

        let status = response.status();
        let envelope: RescheduleApiEnvelope = response
            .json()
            .await
            .map_err(|e| AppointmentError::ExternalServiceError(e.to_string()))?;

        if status == StatusCode::NOT_FOUND {
            return Err(AppointmentError::NotFound);
        }

        if !status.is_success() || !envelope.success {
            let message = envelope
                .error
                .unwrap_or_else(|| format!("Reschedule failed with status {}", status));
            return Err(AppointmentError::ExternalServiceError(message));
        }

        envelope.data.ok_or_else(|| {
            AppointmentError::ExternalServiceError("Reschedule response missing data".to_string())
        })
    }
}
