use std::sync::Arc;

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::Utc;
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use patient_cell::router::patient_routes;
use shared_config::AppConfig;
use shared_models::{Booking, Clinic};
use shared_store::AppState;

fn create_test_app() -> (Router, Arc<AppState>) {
    let state = AppState::new(AppConfig::default());
    (patient_routes(state.clone()), state)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_create_patient_success() {
    let (app, _state) = create_test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/add",
            json!({"name": "Ann", "age": 34, "gender": "female"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["name"], "Ann");
    assert!(body["id"].as_str().is_some());
}

#[tokio::test]
async fn test_create_patient_rejects_empty_name() {
    let (app, _state) = create_test_app();

    let response = app
        .oneshot(json_request(
            "POST",
            "/add",
            json!({"name": "   ", "age": 34, "gender": "female"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_patient_by_id() {
    let (app, _state) = create_test_app();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/add",
            json!({"name": "Ann", "age": 34, "gender": "female"}),
        ))
        .await
        .unwrap();
    let created = body_json(response).await;
    let id = created["id"].as_str().unwrap().to_string();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/{}", id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["id"], json!(id));

    // Miss returns 404, not an error payload surprise.
    let response = app
        .oneshot(
            Request::builder()
                .uri(format!("/{}", Uuid::new_v4()))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_list_patients() {
    let (app, _state) = create_test_app();

    // An empty registry maps to 404.
    let response = app
        .clone()
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    for name in ["Ann", "Bob"] {
        let response = app
            .clone()
            .oneshot(json_request(
                "POST",
                "/add",
                json!({"name": name, "age": 40, "gender": "male"}),
            ))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = app
        .oneshot(Request::builder().uri("/").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["total"], 2);
}

#[tokio::test]
async fn test_remove_patient_is_silent_on_miss() {
    let (app, _state) = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/remove/Nobody")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["removed"], false);
}

#[tokio::test]
async fn test_remove_patient_cascades_to_bookings() {
    let (app, state) = create_test_app();

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/add",
            json!({"name": "Ann", "age": 34, "gender": "female"}),
        ))
        .await
        .unwrap();
    let created = body_json(response).await;
    let patient_id: Uuid = created["id"].as_str().unwrap().parse().unwrap();

    let clinic_id = state
        .store
        .insert_clinic(Clinic {
            id: Uuid::new_v4(),
            specialization: "Cardiology".to_string(),
            number_of_slots: 5,
            created_at: Utc::now(),
        })
        .await;
    state
        .store
        .commit_booking(Booking {
            id: Uuid::new_v4(),
            patient_id,
            clinic_id,
            date: Utc::now() + chrono::Duration::days(1),
            slot_number: 1,
            created_at: Utc::now(),
        })
        .await
        .unwrap();

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/remove/Ann")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["removed"], true);

    assert!(state.store.find_bookings(|_| true).await.is_empty());
    assert!(state.store.patient(patient_id).await.is_none());
}
