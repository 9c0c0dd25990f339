use assert_matches::assert_matches;
use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use appointment_cell::models::AppointmentError;
use appointment_cell::services::reschedule::RescheduleApiClient;

#[tokio::test]
async fn reschedule_success_returns_collaborator_data() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/appointments/APT-001/reschedule"))
        .and(body_json(json!({
            "new_date": "10-02-2026",
            "new_time": "11:00 AM"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "data": {
                "doctor_name": "Dr. Aarav Patel",
                "appointment_date": "10-02-2026",
                "appointment_time": "11:00 AM",
                "status": "Rescheduled"
            }
        })))
        .mount(&mock_server)
        .await;

    let client = RescheduleApiClient::new(&mock_server.uri());
    let data = client
        .reschedule("APT-001", "10-02-2026", "11:00 AM")
        .await
        .unwrap();

    assert_eq!(data.doctor_name, "Dr. Aarav Patel");
    assert_eq!(data.appointment_date, "10-02-2026");
    assert_eq!(data.status, "Rescheduled");
}

#[tokio::test]
async fn reschedule_unknown_id_maps_to_not_found() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/appointments/APT-404/reschedule"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "success": false,
            "error": "Appointment not found"
        })))
        .mount(&mock_server)
        .await;

    let client = RescheduleApiClient::new(&mock_server.uri());
    let result = client.reschedule("APT-404", "10-02-2026", "11:00 AM").await;

    assert_matches!(result, Err(AppointmentError::NotFound));
}

#[tokio::test]
async fn reschedule_failure_envelope_surfaces_error_message() {
    let mock_server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/api/appointments/APT-001/reschedule"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({
            "success": false,
            "error": "internal failure"
        })))
        .mount(&mock_server)
        .await;

    let client = RescheduleApiClient::new(&mock_server.uri());
    let result = client.reschedule("APT-001", "10-02-2026", "11:00 AM").await;

    assert_matches!(
        result,
        Err(AppointmentError::ExternalServiceError(msg)) if msg == "internal failure"
    );
}

#[tokio::test]
async fn unreachable_collaborator_is_an_external_service_error() {
    // Nothing listens on this port.
    let client = RescheduleApiClient::new("http://127.0.0.1:1");
    let result = client.reschedule("APT-001", "10-02-2026", "11:00 AM").await;

    assert_matches!(result, Err(AppointmentError::ExternalServiceError(_)));
}
