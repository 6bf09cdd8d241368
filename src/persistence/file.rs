//! Native best-score file
//!
//! Stored as a small JSON document so future fields can be added without
//! breaking old files.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::{BestScoreStore, PersistError};

const FILE_NAME: &str = "best_score.json";
const APP_DIR: &str = "flappy-sim";

#[derive(Debug, Serialize, Deserialize)]
struct BestScoreFile {
    best: u32,
}

/// Best score persisted to a JSON file
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// `<data dir>/flappy-sim/best_score.json`, falling back to the working directory
    pub fn default_location() -> Self {
        let dir = dirs::data_dir()
            .map(|d| d.join(APP_DIR))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(dir.join(FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl BestScoreStore for FileStore {
    fn load(&mut self) -> Result<Option<u32>, PersistError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let file: BestScoreFile = serde_json::from_str(&json)?;
        log::info!("Loaded best score {} from {}", file.best, self.path.display());
        Ok(Some(file.best))
    }

    fn save(&mut self, best: u32) -> Result<(), PersistError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(&BestScoreFile { best })?;
        fs::write(&self.path, json)?;
        log::info!("Best score {} saved to {}", best, self.path.display());
        Ok(())
    }
}
