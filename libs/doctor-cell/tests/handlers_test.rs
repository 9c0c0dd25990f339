use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use doctor_cell::router::doctor_routes;
use doctor_cell::services::directory::DoctorDirectory;

fn create_test_app() -> Router {
    doctor_routes(Arc::new(DoctorDirectory::with_demo_roster()))
}

async fn send(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn lists_the_full_roster() {
    let (status, body) = send(create_test_app(), "/").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"].as_array().unwrap().len(), 6);
}

#[tokio::test]
async fn filters_by_speciality() {
    let (status, body) = send(create_test_app(), "/?speciality=Cardiologist").await;

    assert_eq!(status, StatusCode::OK);
    let doctors = body["data"].as_array().unwrap();
    assert_eq!(doctors.len(), 1);
    assert_eq!(doctors[0]["id"], "d1");
}

#[tokio::test]
async fn fetches_a_doctor_by_id() {
    let (status, body) = send(create_test_app(), "/d2").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Dr. Rajesh Iyer");
}

#[tokio::test]
async fn unknown_doctor_is_not_found() {
    let (status, body) = send(create_test_app(), "/d99").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
}
