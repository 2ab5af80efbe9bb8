use serde::{Deserialize, Serialize};
use thiserror::Error;

pub use shared_models::Patient;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePatientRequest {
    pub name: String,
    pub age: i32,
    pub gender: String,
}

#[derive(Error, Debug)]
pub enum PatientError {
    #[error("Validation error: {0}")]
    Validation(String),
}
