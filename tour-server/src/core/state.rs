//! Shared server state

use std::sync::Arc;
use std::time::Duration;

use crate::core::Config;
use crate::instructions::InstructionsService;
use crate::store::{MemoryTourStore, TourStore};

/// Application state shared across handlers
///
/// Cheap to clone; all members are behind `Arc`.
#[derive(Clone)]
pub struct ServerState {
    pub config: Arc<Config>,
    pub store: Arc<dyn TourStore>,
    pub instructions: Arc<InstructionsService>,
    /// Outbound client for the ShipHero proxy, carries the hard timeout
    pub http_client: reqwest::Client,
}

impl ServerState {
    /// Build state from configuration, loading the tour seed file when set
    pub async fn initialize(config: &Config) -> anyhow::Result<Self> {
        let store = MemoryTourStore::new();
        if let Some(path) = &config.tours_file {
            let loaded = store.load_file(path).await?;
            tracing::info!(path = %path, tours = loaded, "Tour records loaded");
        } else {
            tracing::warn!("TOURS_FILE not set, starting with an empty tour store");
        }

        Self::with_store(config.clone(), Arc::new(store))
    }

    /// Build state around an existing store (used by tests)
    pub fn with_store(config: Config, store: Arc<dyn TourStore>) -> anyhow::Result<Self> {
        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_millis(config.shiphero_timeout_ms))
            .build()?;

        Ok(Self {
            instructions: Arc::new(InstructionsService::new(config.barcode_concurrency)),
            config: Arc::new(config),
            store,
            http_client,
        })
    }
}
