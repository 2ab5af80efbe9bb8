use chrono::{DateTime, Utc};
use tracing::{debug, info};
use uuid::Uuid;

use shared_config::DuplicateScope;
use shared_store::{ClinicStore, StoreError};

use crate::models::{
    BookAppointmentRequest, Booking, BookingError, BookingWithClinic, BookingWithPatient,
};

pub struct BookingService {
    store: ClinicStore,
    duplicate_scope: DuplicateScope,
}

impl BookingService {
    pub fn new(store: ClinicStore, duplicate_scope: DuplicateScope) -> Self {
        Self {
            store,
            duplicate_scope,
        }
    }

    /// Validates and commits a booking request.
    ///
    /// Checks run in a fixed order and the first failure wins: patient
    /// duplicate, clinic duplicate, date validity, slot collision. Only then
    /// is the booking committed, which atomically verifies clinic capacity
    /// and decrements it. The requested date is passed explicitly to every
    /// check.
    pub async fn book_appointment(
        &self,
        request: BookAppointmentRequest,
    ) -> Result<Booking, BookingError> {
        debug!(
            "Booking request: patient {} at clinic {} on {} slot {}",
            request.patient_id, request.clinic_id, request.date, request.slot_number
        );

        if self
            .is_patient_duplicate(request.patient_id, request.clinic_id, request.date)
            .await
        {
            return Err(BookingError::DuplicatePatientBooking);
        }

        if self
            .is_clinic_duplicate(request.clinic_id, request.date)
            .await
        {
            return Err(BookingError::DuplicateClinicBooking);
        }

        if request.date <= Utc::now() {
            return Err(BookingError::InvalidDate);
        }

        if self
            .is_slot_taken(request.clinic_id, request.slot_number, request.date)
            .await
        {
            return Err(BookingError::SlotTaken(request.slot_number));
        }

        let booking = Booking {
            id: Uuid::new_v4(),
            patient_id: request.patient_id,
            clinic_id: request.clinic_id,
            date: request.date,
            slot_number: request.slot_number,
            created_at: Utc::now(),
        };

        let committed = self
            .store
            .commit_booking(booking)
            .await
            .map_err(|e| match e {
                StoreError::ClinicNotFound => BookingError::ClinicNotFound,
                StoreError::NoSlotsRemaining => BookingError::ClinicFull,
            })?;

        info!(
            "Booked appointment {} for patient {} at clinic {}",
            committed.id, committed.patient_id, committed.clinic_id
        );
        Ok(committed)
    }

    /// Whether the patient already holds a conflicting booking at `date`.
    /// Under `ClinicAgnostic` any clinic conflicts; under `PerClinic` only a
    /// booking at the same clinic does.
    async fn is_patient_duplicate(
        &self,
        patient_id: Uuid,
        clinic_id: Uuid,
        date: DateTime<Utc>,
    ) -> bool {
        let scope = self.duplicate_scope;
        !self
            .store
            .find_bookings(|b| {
                b.patient_id == patient_id
                    && b.date == date
                    && (scope == DuplicateScope::ClinicAgnostic || b.clinic_id == clinic_id)
            })
            .await
            .is_empty()
    }

    /// Whether the clinic already holds a booking at `date` for any patient.
    /// Only applies under `ClinicAgnostic`; the narrower scope leaves clashes
    /// to the per-slot check.
    async fn is_clinic_duplicate(&self, clinic_id: Uuid, date: DateTime<Utc>) -> bool {
        if self.duplicate_scope == DuplicateScope::PerClinic {
            return false;
        }
        !self
            .store
            .find_bookings(|b| b.clinic_id == clinic_id && b.date == date)
            .await
            .is_empty()
    }

    async fn is_slot_taken(&self, clinic_id: Uuid, slot_number: i32, date: DateTime<Utc>) -> bool {
        !self
            .store
            .find_bookings(|b| {
                b.clinic_id == clinic_id && b.slot_number == slot_number && b.date == date
            })
            .await
            .is_empty()
    }

    // ==========================================================================
    // READ QUERIES
    // ==========================================================================

    /// All bookings at a clinic, each with its patient attached. Bookings
    /// whose patient no longer resolves are skipped.
    pub async fn appointments_by_clinic(&self, clinic_id: Uuid) -> Vec<BookingWithPatient> {
        let bookings = self
            .store
            .find_bookings(|b| b.clinic_id == clinic_id)
            .await;

        let mut results = Vec::with_capacity(bookings.len());
        for booking in bookings {
            if let Some(patient) = self.store.patient(booking.patient_id).await {
                results.push(BookingWithPatient { booking, patient });
            }
        }
        results
    }

    /// All bookings held by a patient, each with its clinic attached.
    pub async fn appointments_by_patient(&self, patient_id: Uuid) -> Vec<BookingWithClinic> {
        let bookings = self
            .store
            .find_bookings(|b| b.patient_id == patient_id)
            .await;

        let mut results = Vec::with_capacity(bookings.len());
        for booking in bookings {
            if let Some(clinic) = self.store.clinic(booking.clinic_id).await {
                results.push(BookingWithClinic { booking, clinic });
            }
        }
        results
    }

    /// Bookings for every patient whose name matches case-insensitively.
    pub async fn appointments_by_patient_name(&self, name: &str) -> Vec<BookingWithPatient> {
        let wanted = name.to_lowercase();
        let patients: Vec<_> = self
            .store
            .patients()
            .await
            .into_iter()
            .filter(|p| p.name.to_lowercase() == wanted)
            .collect();

        let mut results = Vec::new();
        for patient in patients {
            let bookings = self
                .store
                .find_bookings(|b| b.patient_id == patient.id)
                .await;
            for booking in bookings {
                results.push(BookingWithPatient {
                    booking,
                    patient: patient.clone(),
                });
            }
        }
        results
    }
}
