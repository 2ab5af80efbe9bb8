use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

pub use shared_models::{Booking, Clinic, Patient};

// ==============================================================================
// REQUEST/RESPONSE MODELS
// ==============================================================================

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookAppointmentRequest {
    pub patient_id: Uuid,
    pub clinic_id: Uuid,
    pub date: DateTime<Utc>,
    pub slot_number: i32,
}

/// A booking joined with the patient who holds it, for clinic-side listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingWithPatient {
    #[serde(flatten)]
    pub booking: Booking,
    pub patient: Patient,
}

/// A booking joined with its clinic, for patient-side listings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingWithClinic {
    #[serde(flatten)]
    pub booking: Booking,
    pub clinic: Clinic,
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Error, Debug, PartialEq, Eq)]
pub enum BookingError {
    #[error("This patient already has a booking for this appointment time")]
    DuplicatePatientBooking,

    #[error("This clinic is already booked for this appointment time")]
    DuplicateClinicBooking,

    #[error("Appointment date must be in the future")]
    InvalidDate,

    #[error("Slot number {0} is already taken")]
    SlotTaken(i32),

    #[error("Clinic has no remaining slots")]
    ClinicFull,

    #[error("Clinic not found")]
    ClinicNotFound,
}
