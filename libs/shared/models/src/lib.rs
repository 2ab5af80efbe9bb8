pub mod error;
pub mod records;

pub use error::AppError;
pub use records::{Booking, Clinic, Patient};
