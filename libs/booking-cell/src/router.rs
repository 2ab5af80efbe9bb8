use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use shared_store::AppState;

use crate::handlers;

pub fn booking_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/book", post(handlers::book_appointment))
        .route(
            "/appointments/clinic/{clinic_id}",
            get(handlers::get_appointments_by_clinic),
        )
        .route(
            "/appointments/patient/{patient_id}",
            get(handlers::get_appointments_by_patient),
        )
        .route(
            "/appointments/patient-name/{name}",
            get(handlers::get_appointments_by_patient_name),
        )
        .with_state(state)
}
