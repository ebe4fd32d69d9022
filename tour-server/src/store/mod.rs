//! Tour record access
//!
//! Persistence is out of scope for this service; tours come from an
//! upstream system of record. The store trait keeps handlers decoupled
//! from where records actually live, with an in-memory implementation
//! seeded from a JSON file.

use async_trait::async_trait;
use dashmap::DashMap;
use shared::models::Tour;

/// Read access to tour records by identifier
#[async_trait]
pub trait TourStore: Send + Sync {
    /// Fetch one tour by id
    async fn get(&self, id: &str) -> Option<Tour>;

    /// Number of records available
    async fn count(&self) -> usize;
}

/// In-memory tour store backed by a concurrent map
#[derive(Default)]
pub struct MemoryTourStore {
    tours: DashMap<String, Tour>,
}

impl MemoryTourStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a tour record
    pub fn insert(&self, tour: Tour) {
        self.tours.insert(tour.id.clone(), tour);
    }

    /// Load tour records from a JSON array file, returns the count loaded
    pub async fn load_file(&self, path: &str) -> anyhow::Result<usize> {
        let raw = tokio::fs::read_to_string(path).await?;
        let tours: Vec<Tour> = serde_json::from_str(&raw)?;
        let count = tours.len();
        for tour in tours {
            self.insert(tour);
        }
        Ok(count)
    }
}

#[async_trait]
impl TourStore for MemoryTourStore {
    async fn get(&self, id: &str) -> Option<Tour> {
        self.tours.get(id).map(|entry| entry.value().clone())
    }

    async fn count(&self) -> usize {
        self.tours.len()
    }
}
