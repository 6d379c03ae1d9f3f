//! Native best-score store backed by a small JSON file

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::{BestScoreRecord, BestScoreStore, StoreError};

/// Stores the best score as a JSON record at a caller-chosen path
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BestScoreStore for JsonFileStore {
    fn load_best(&self) -> Result<u32, StoreError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(0),
            Err(e) => return Err(e.into()),
        };
        Ok(BestScoreRecord::from_json(&json)?.best)
    }

    fn save_best(&mut self, best: u32) -> Result<(), StoreError> {
        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir)?;
        }
        // Temp file + rename: readers never see a partial record
        let tmp = self.path.with_extension("json.tmp");
        let result = fs::write(&tmp, BestScoreRecord::new(best).to_json()?)
            .and_then(|()| fs::rename(&tmp, &self.path));
        if result.is_err() {
            let _ = fs::remove_file(&tmp);
        }
        result.map_err(StoreError::from)
    }
}
