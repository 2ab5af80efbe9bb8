use std::env;
use tracing::warn;

/// Which existing bookings count as duplicates of a new request.
///
/// `ClinicAgnostic` reproduces the historical behavior: a patient may hold at
/// most one booking per timestamp anywhere, and a clinic at most one booking
/// per timestamp for any patient. `PerClinic` narrows the rule to one booking
/// per (patient, clinic) pair at a timestamp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicateScope {
    #[default]
    ClinicAgnostic,
    PerClinic,
}

impl DuplicateScope {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "clinic_agnostic" => Some(DuplicateScope::ClinicAgnostic),
            "per_clinic" => Some(DuplicateScope::PerClinic),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub port: u16,
    pub duplicate_scope: DuplicateScope,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let port = env::var("PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or_else(|| {
                warn!("PORT not set or invalid, using 3000");
                3000
            });

        let duplicate_scope = match env::var("BOOKING_DUPLICATE_SCOPE") {
            Ok(value) => DuplicateScope::parse(&value).unwrap_or_else(|| {
                warn!(
                    "BOOKING_DUPLICATE_SCOPE '{}' not recognized, using clinic_agnostic",
                    value
                );
                DuplicateScope::default()
            }),
            Err(_) => DuplicateScope::default(),
        };

        Self {
            port,
            duplicate_scope,
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            duplicate_scope: DuplicateScope::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_known_scopes() {
        assert_eq!(
            DuplicateScope::parse("clinic_agnostic"),
            Some(DuplicateScope::ClinicAgnostic)
        );
        assert_eq!(
            DuplicateScope::parse("per_clinic"),
            Some(DuplicateScope::PerClinic)
        );
        assert_eq!(DuplicateScope::parse("strict"), None);
    }
}
