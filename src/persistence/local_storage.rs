//! Browser best-score store backed by LocalStorage

use super::{BestScoreRecord, BestScoreStore, StoreError};

/// Stores the best score under a single LocalStorage key
#[derive(Debug, Clone, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    const STORAGE_KEY: &'static str = "flappy_best_score";

    pub fn new() -> Self {
        Self
    }

    fn storage() -> Result<web_sys::Storage, StoreError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or(StoreError::Unavailable)
    }
}

impl BestScoreStore for LocalStorageStore {
    fn load_best(&self) -> Result<u32, StoreError> {
        let storage = Self::storage()?;
        match storage.get_item(Self::STORAGE_KEY) {
            Ok(Some(json)) => Ok(BestScoreRecord::from_json(&json)?.best),
            Ok(None) => Ok(0),
            Err(_) => Err(StoreError::Unavailable),
        }
    }

    fn save_best(&mut self, best: u32) -> Result<(), StoreError> {
        let storage = Self::storage()?;
        let json = BestScoreRecord::new(best).to_json()?;
        storage
            .set_item(Self::STORAGE_KEY, &json)
            .map_err(|_| StoreError::Unavailable)
    }
}
