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

use crate::models::{ClinicError, CreateClinicRequest};
use crate::services::ClinicService;

#[axum::debug_handler]
pub async fn create_clinic(
    State(state): State<Arc<AppState>>,
    Json(request): Json<CreateClinicRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let service = ClinicService::new(state.store.clone());

    let clinic = service.create_clinic(request).await.map_err(|e| match e {
        ClinicError::Validation(msg) => AppError::ValidationError(msg),
    })?;

    Ok((StatusCode::CREATED, Json(json!(clinic))))
}

#[axum::debug_handler]
pub async fn get_clinic(
    State(state): State<Arc<AppState>>,
    Path(clinic_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let service = ClinicService::new(state.store.clone());

    let clinic = service
        .get_clinic(clinic_id)
        .await
        .ok_or_else(|| AppError::NotFound("Clinic not found".to_string()))?;

    Ok(Json(json!(clinic)))
}

#[axum::debug_handler]
pub async fn list_clinics(State(state): State<Arc<AppState>>) -> Result<Json<Value>, AppError> {
    let service = ClinicService::new(state.store.clone());

    let clinics = service.get_all_clinics().await;

    if clinics.is_empty() {
        return Err(AppError::NotFound("No clinics found".to_string()));
    }

    Ok(Json(json!({
        "clinics": clinics,
        "total": clinics.len()
    })))
}

#[axum::debug_handler]
pub async fn remove_clinic(
    State(state): State<Arc<AppState>>,
    Path(specialization): Path<String>,
) -> Result<Json<Value>, AppError> {
    let service = ClinicService::new(state.store.clone());

    // Silent success when nothing matches.
    let removed = service.remove_clinic_by_specialization(&specialization).await;

    Ok(Json(json!({
        "removed": removed.is_some()
    })))
}
