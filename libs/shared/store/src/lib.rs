pub mod memory;

use std::sync::Arc;

use shared_config::AppConfig;

pub use memory::{ClinicStore, StoreError};

/// Shared application state handed to every cell router.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
    pub store: ClinicStore,
}

impl AppState {
    pub fn new(config: AppConfig) -> Arc<Self> {
        Arc::new(Self {
            config,
            store: ClinicStore::new(),
        })
    }
}
