use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use shared_models::Clinic;

/// Capacity bounds enforced at creation time.
pub const MIN_SLOTS: i32 = 1;
pub const MAX_SLOTS: i32 = 20;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateClinicRequest {
    pub specialization: String,
    pub number_of_slots: i32,
}

#[derive(Error, Debug)]
pub enum ClinicError {
    #[error("Validation error: {0}")]
    Validation(String),
}
