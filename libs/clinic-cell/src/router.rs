use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use shared_store::AppState;

use crate::handlers;

pub fn clinic_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/add", post(handlers::create_clinic))
        .route("/", get(handlers::list_clinics))
        .route("/{id}", get(handlers::get_clinic))
        .route("/remove/{specialization}", delete(handlers::remove_clinic))
        .with_state(state)
}
