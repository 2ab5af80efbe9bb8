use std::sync::Arc;

use axum::{routing::get, Router};

use booking_cell::router::booking_routes;
use clinic_cell::router::clinic_routes;
use patient_cell::router::patient_routes;
use shared_store::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { "Clinic Booking API is running!" }))
        .nest("/api/patients", patient_routes(state.clone()))
        .nest("/api/clinics", clinic_routes(state.clone()))
        .nest("/api/bookings", booking_routes(state))
}
