use chrono::Utc;
use tracing::debug;
use uuid::Uuid;

use shared_store::ClinicStore;

use crate::models::{Clinic, ClinicError, CreateClinicRequest, MAX_SLOTS, MIN_SLOTS};

pub struct ClinicService {
    store: ClinicStore,
}

impl ClinicService {
    pub fn new(store: ClinicStore) -> Self {
        Self { store }
    }

    pub async fn create_clinic(
        &self,
        request: CreateClinicRequest,
    ) -> Result<Clinic, ClinicError> {
        if request.specialization.trim().is_empty() {
            return Err(ClinicError::Validation(
                "Clinic specialization must not be empty".to_string(),
            ));
        }

        if !(MIN_SLOTS..=MAX_SLOTS).contains(&request.number_of_slots) {
            return Err(ClinicError::Validation(format!(
                "Number of slots must be between {} and {}",
                MIN_SLOTS, MAX_SLOTS
            )));
        }

        let clinic = Clinic {
            id: Uuid::new_v4(),
            specialization: request.specialization,
            number_of_slots: request.number_of_slots,
            created_at: Utc::now(),
        };

        let id = self.store.insert_clinic(clinic.clone()).await;
        debug!("Clinic created with ID: {}", id);

        Ok(clinic)
    }

    pub async fn get_clinic(&self, clinic_id: Uuid) -> Option<Clinic> {
        self.store.clinic(clinic_id).await
    }

    pub async fn get_all_clinics(&self) -> Vec<Clinic> {
        self.store.clinics().await
    }

    /// Deletes the first clinic with this exact specialization, cascading to
    /// its bookings. A miss is not an error.
    pub async fn remove_clinic_by_specialization(&self, specialization: &str) -> Option<Clinic> {
        let removed = self
            .store
            .remove_clinic_by_specialization(specialization)
            .await;
        match &removed {
            Some(clinic) => debug!(
                "Removed clinic {} ({})",
                clinic.specialization, clinic.id
            ),
            None => debug!("No clinic specialized in '{}' to remove", specialization),
        }
        removed
    }
}
