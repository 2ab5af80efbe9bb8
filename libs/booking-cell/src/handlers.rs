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

use crate::models::{BookAppointmentRequest, BookingError};
use crate::services::BookingService;

fn booking_service(state: &AppState) -> BookingService {
    BookingService::new(state.store.clone(), state.config.duplicate_scope)
}

#[axum::debug_handler]
pub async fn book_appointment(
    State(state): State<Arc<AppState>>,
    Json(request): Json<BookAppointmentRequest>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let service = booking_service(&state);

    let booking = service
        .book_appointment(request)
        .await
        .map_err(|e| match e {
            BookingError::DuplicatePatientBooking | BookingError::DuplicateClinicBooking => {
                AppError::Conflict(e.to_string())
            }
            BookingError::InvalidDate => AppError::BadRequest(e.to_string()),
            BookingError::SlotTaken(_) => AppError::Conflict(e.to_string()),
            BookingError::ClinicFull => AppError::Conflict(e.to_string()),
            BookingError::ClinicNotFound => AppError::NotFound(e.to_string()),
        })?;

    Ok((StatusCode::CREATED, Json(json!(booking))))
}

#[axum::debug_handler]
pub async fn get_appointments_by_clinic(
    State(state): State<Arc<AppState>>,
    Path(clinic_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let service = booking_service(&state);

    let appointments = service.appointments_by_clinic(clinic_id).await;

    if appointments.is_empty() {
        return Err(AppError::NotFound(
            "No appointments found for the specified clinic".to_string(),
        ));
    }

    Ok(Json(json!(appointments)))
}

#[axum::debug_handler]
pub async fn get_appointments_by_patient(
    State(state): State<Arc<AppState>>,
    Path(patient_id): Path<Uuid>,
) -> Result<Json<Value>, AppError> {
    let service = booking_service(&state);

    let appointments = service.appointments_by_patient(patient_id).await;

    if appointments.is_empty() {
        return Err(AppError::NotFound(
            "No appointments found for the specified patient".to_string(),
        ));
    }

    Ok(Json(json!(appointments)))
}

#[axum::debug_handler]
pub async fn get_appointments_by_patient_name(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<Value>, AppError> {
    let service = booking_service(&state);

    let appointments = service.appointments_by_patient_name(&name).await;

    if appointments.is_empty() {
        return Err(AppError::NotFound(
            "No appointments found for the specified patient".to_string(),
        ));
    }

    Ok(Json(json!(appointments)))
}
