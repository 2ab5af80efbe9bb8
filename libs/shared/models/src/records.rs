use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A registered patient. Owns zero or more bookings through `patient_id`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    pub id: Uuid,
    pub name: String,
    pub age: i32,
    pub gender: String,
    pub created_at: DateTime<Utc>,
}

/// A clinic offering bookable slots. `number_of_slots` is live capacity:
/// it starts between 1 and 20 and decrements by one per successful booking.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Clinic {
    pub id: Uuid,
    pub specialization: String,
    pub number_of_slots: i32,
    pub created_at: DateTime<Utc>,
}

/// One patient booked into one clinic at a date and slot.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Booking {
    pub id: Uuid,
    pub patient_id: Uuid,
    pub clinic_id: Uuid,
    pub date: DateTime<Utc>,
    pub slot_number: i32,
    pub created_at: DateTime<Utc>,
}
