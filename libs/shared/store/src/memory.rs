use std::sync::Arc;

use thiserror::Error;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use shared_models::{Booking, Clinic, Patient};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum StoreError {
    #[error("Clinic not found")]
    ClinicNotFound,

    #[error("Clinic has no remaining slots")]
    NoSlotsRemaining,
}

#[derive(Default)]
struct Tables {
    patients: Vec<Patient>,
    clinics: Vec<Clinic>,
    bookings: Vec<Booking>,
}

/// In-memory persistence for the three record types.
///
/// Tables are vectors to keep insertion order observable: removal by name
/// takes the first match, listings come back in creation order. All writes
/// go through the single `RwLock`, which is the serialization point for the
/// insert-plus-decrement commit in [`ClinicStore::commit_booking`].
#[derive(Clone, Default)]
pub struct ClinicStore {
    inner: Arc<RwLock<Tables>>,
}

impl ClinicStore {
    pub fn new() -> Self {
        Self::default()
    }

    // ---- patients ----

    pub async fn insert_patient(&self, patient: Patient) -> Uuid {
        let id = patient.id;
        self.inner.write().await.patients.push(patient);
        id
    }

    pub async fn patient(&self, id: Uuid) -> Option<Patient> {
        self.inner
            .read()
            .await
            .patients
            .iter()
            .find(|p| p.id == id)
            .cloned()
    }

    pub async fn patients(&self) -> Vec<Patient> {
        self.inner.read().await.patients.clone()
    }

    /// Removes the first patient whose name matches exactly, together with
    /// every booking that references them. Returns the removed patient, or
    /// `None` when nothing matched.
    pub async fn remove_patient_by_name(&self, name: &str) -> Option<Patient> {
        let mut tables = self.inner.write().await;
        let index = tables.patients.iter().position(|p| p.name == name)?;
        let removed = tables.patients.remove(index);
        let before = tables.bookings.len();
        tables.bookings.retain(|b| b.patient_id != removed.id);
        debug!(
            "Removed patient {} and {} cascading booking(s)",
            removed.id,
            before - tables.bookings.len()
        );
        Some(removed)
    }

    // ---- clinics ----

    pub async fn insert_clinic(&self, clinic: Clinic) -> Uuid {
        let id = clinic.id;
        self.inner.write().await.clinics.push(clinic);
        id
    }

    pub async fn clinic(&self, id: Uuid) -> Option<Clinic> {
        self.inner
            .read()
            .await
            .clinics
            .iter()
            .find(|c| c.id == id)
            .cloned()
    }

    pub async fn clinics(&self) -> Vec<Clinic> {
        self.inner.read().await.clinics.clone()
    }

    /// Removes the first clinic with this exact specialization and every
    /// booking referencing it. `None` when nothing matched.
    pub async fn remove_clinic_by_specialization(&self, specialization: &str) -> Option<Clinic> {
        let mut tables = self.inner.write().await;
        let index = tables
            .clinics
            .iter()
            .position(|c| c.specialization == specialization)?;
        let removed = tables.clinics.remove(index);
        let before = tables.bookings.len();
        tables.bookings.retain(|b| b.clinic_id != removed.id);
        debug!(
            "Removed clinic {} and {} cascading booking(s)",
            removed.id,
            before - tables.bookings.len()
        );
        Some(removed)
    }

    // ---- bookings ----

    pub async fn find_bookings<F>(&self, predicate: F) -> Vec<Booking>
    where
        F: Fn(&Booking) -> bool,
    {
        self.inner
            .read()
            .await
            .bookings
            .iter()
            .filter(|b| predicate(b))
            .cloned()
            .collect()
    }

    /// Commits a booking atomically: under one write-lock acquisition the
    /// clinic is looked up, its capacity checked, the booking row inserted
    /// and `number_of_slots` decremented. The conditional decrement means
    /// two racing requests for the last slot cannot both succeed, and the
    /// count never goes negative.
    pub async fn commit_booking(&self, booking: Booking) -> Result<Booking, StoreError> {
        let mut tables = self.inner.write().await;
        let clinic = tables
            .clinics
            .iter_mut()
            .find(|c| c.id == booking.clinic_id)
            .ok_or(StoreError::ClinicNotFound)?;

        if clinic.number_of_slots <= 0 {
            return Err(StoreError::NoSlotsRemaining);
        }

        clinic.number_of_slots -= 1;
        debug!(
            "Committed booking {} for clinic {}, {} slot(s) remaining",
            booking.id, booking.clinic_id, clinic.number_of_slots
        );
        tables.bookings.push(booking.clone());
        Ok(booking)
    }
}
