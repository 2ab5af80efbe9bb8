use std::sync::Arc;

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};
use uuid::Uuid;

use shared_models::error::AppError;
use shared_store::AppState;

use crate::models::{CreatePatientRequest, PatientError};
use crate::services::PatientService;

#[axum::debug_handler]
pub async fn create_patient(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreatePatientRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let service = PatientService::new(state.store.clone());

    let patient = service
        .create_patient(request)
        .await
        .map_err(|e| match e {
            PatientError::Validation(msg) => AppError::ValidationError(msg),
        })?;

    Ok((StatusCode::CREATED, Json(json!(patient))))
}

#[axum::debug_handler]
pub async fn get_patient(
    State(state): State<Arc<AppState>>,
    Path(patient_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let service = PatientService::new(state.store.clone());

    let patient = service
        .get_patient(patient_id)
        .await
        .ok_or_else(|| AppError::NotFound("Patient not found".to_string()))?;

    Ok(Json(json!(patient)))
}

#[axum::debug_handler]
pub async fn list_patients(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Value>, AppError> {
    let service = PatientService::new(state.store.clone());

    let patients = service.get_all_patients().await;

    if patients.is_empty() {
        return Err(AppError::NotFound("No patients found".to_string()));
    }

    Ok(Json(json!({
        "patients": patients,
        "total": patients.len()
    })))
}

#[axum::debug_handler]
pub async fn remove_patient(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Value>, AppError> {
    let service = PatientService::new(state.store.clone());

    // Silent success when nothing matches.
    let removed = service.remove_patient_by_name(&name).await;

    Ok(Json(json!({
        "removed": removed.is_some()
    })))
}
