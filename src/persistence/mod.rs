//! Best-score persistence
//!
//! The simulation never touches storage. [`crate::GameCore`] loads the best
//! score once at construction and saves it when a run beats it. Stores keep a
//! small versioned JSON record so the format can change later.

#[cfg(not(target_arch = "wasm32"))]
mod file;
#[cfg(target_arch = "wasm32")]
mod local_storage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::JsonFileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Current record format version
pub const RECORD_VERSION: u32 = 1;

/// Why a store could not load or save
#[derive(Debug)]
pub enum StoreError {
    /// Underlying I/O failed
    Io(std::io::Error),
    /// Stored data did not parse or has an unknown version
    Malformed(String),
    /// Backing storage is not available (e.g. LocalStorage disabled)
    Unavailable,
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "best score i/o failed: {e}"),
            Self::Malformed(msg) => write!(f, "best score record malformed: {msg}"),
            Self::Unavailable => write!(f, "best score storage unavailable"),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for StoreError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

/// On-disk/in-storage shape of the best score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BestScoreRecord {
    pub version: u32,
    pub best: u32,
}

impl BestScoreRecord {
    pub fn new(best: u32) -> Self {
        Self {
            version: RECORD_VERSION,
            best,
        }
    }

    pub fn to_json(&self) -> Result<String, StoreError> {
        serde_json::to_string(self).map_err(|e| StoreError::Malformed(e.to_string()))
    }

    /// Parse a record, rejecting versions this build does not understand
    pub fn from_json(json: &str) -> Result<Self, StoreError> {
        let record: Self =
            serde_json::from_str(json).map_err(|e| StoreError::Malformed(e.to_string()))?;
        if record.version != RECORD_VERSION {
            return Err(StoreError::Malformed(format!(
                "unsupported version {}",
                record.version
            )));
        }
        Ok(record)
    }
}

/// External key-value port for the best score
pub trait BestScoreStore {
    /// Read the stored best score. A missing record is `Ok(0)`.
    fn load_best(&self) -> Result<u32, StoreError>;

    fn save_best(&mut self, best: u32) -> Result<(), StoreError>;
}

/// Load the best score, falling back to 0 on any failure
pub fn load_or_default<S: BestScoreStore + ?Sized>(store: &S) -> u32 {
    match store.load_best() {
        Ok(best) => {
            log::info!("Loaded best score {}", best);
            best
        }
        Err(e) => {
            log::warn!("Could not load best score, starting at 0: {}", e);
            0
        }
    }
}

/// Save the best score; failures are logged and dropped
pub fn save_or_log<S: BestScoreStore + ?Sized>(store: &mut S, best: u32) {
    match store.save_best(best) {
        Ok(()) => log::info!("Best score saved ({})", best),
        Err(e) => log::warn!("Could not save best score {}: {}", best, e),
    }
}

/// In-process store, used by tests and the headless demo
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    best: Option<u32>,
    /// Number of successful saves
    pub saves: u32,
    /// Make every call fail (for exercising the fallback paths)
    pub fail: bool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_best(best: u32) -> Self {
        Self {
            best: Some(best),
            ..Self::default()
        }
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn stored(&self) -> Option<u32> {
        self.best
    }
}

impl BestScoreStore for MemoryStore {
    fn load_best(&self) -> Result<u32, StoreError> {
        if self.fail {
            return Err(StoreError::Unavailable);
        }
        Ok(self.best.unwrap_or(0))
    }

    fn save_best(&mut self, best: u32) -> Result<(), StoreError> {
        if self.fail {
            return Err(StoreError::Unavailable);
        }
        self.best = Some(best);
        self.saves += 1;
        Ok(())
    }
}
