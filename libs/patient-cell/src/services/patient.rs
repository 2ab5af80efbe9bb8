use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use shared_store::ClinicStore;

use crate::models::{CreatePatientRequest, Patient, PatientError};

pub struct PatientService {
    store: ClinicStore,
}

impl PatientService {
    pub fn new(store: ClinicStore) -> Self {
        Self { store }
    }

    pub async fn create_patient(
        &self,
        request: CreatePatientRequest,
    ) -> Result<Patient, PatientError> {
        if request.name.trim().is_empty() {
            return Err(PatientError::Validation(
                "Patient name must not be empty".to_string(),
            ));
        }

        let patient = Patient {
            id: Uuid::new_v4(),
            name: request.name,
            age: request.age,
            gender: request.gender,
            created_at: Utc::now(),
        };

        let id = self.store.insert_patient(patient.clone()).await;
        debug!("Patient created with ID: {}", id);

        Ok(patient)
    }

    pub async fn get_patient(&self, patient_id: Uuid) -> Option<Patient> {
        self.store.patient(patient_id).await
    }

    pub async fn get_all_patients(&self) -> Vec<Patient> {
        self.store.patients().await
    }

    /// Deletes the first patient with this exact name, cascading to their
    /// bookings. A miss is not an error.
    pub async fn remove_patient_by_name(&self, name: &str) -> Option<Patient> {
        let removed = self.store.remove_patient_by_name(name).await;
        match &removed {
            Some(patient) => debug!("Removed patient {} ({})", patient.name, patient.id),
            None => debug!("No patient named '{}' to remove", name),
        }
        removed
    }
}
