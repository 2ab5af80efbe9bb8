use std::sync::Arc;

use axum::{
    routing::{delete, get, post},
    Router,
};

use shared_store::AppState;

use crate::handlers;

pub fn patient_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/add", post(handlers::create_patient))
        .route("/", get(handlers::list_patients))
        .route("/{id}", get(handlers::get_patient))
        .route("/remove/{name}", delete(handlers::remove_patient))
        .with_state(state)
}
