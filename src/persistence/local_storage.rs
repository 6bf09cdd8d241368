//! Browser LocalStorage backend (wasm32 only)

use super::{BestScoreStore, PersistError};

/// Best score kept under a single LocalStorage key
#[derive(Debug, Clone)]
pub struct LocalStorageStore {
    key: String,
}

impl LocalStorageStore {
    /// LocalStorage key
    pub const DEFAULT_KEY: &'static str = "flappy_sim_best_score";

    pub fn new() -> Self {
        Self::with_key(Self::DEFAULT_KEY)
    }

    pub fn with_key(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    fn storage() -> Result<web_sys::Storage, PersistError> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten()
            .ok_or_else(|| PersistError::Unavailable("LocalStorage not accessible".into()))
    }
}

impl Default for LocalStorageStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BestScoreStore for LocalStorageStore {
    fn load(&mut self) -> Result<Option<u32>, PersistError> {
        let storage = Self::storage()?;
        let raw = storage
            .get_item(&self.key)
            .map_err(|e| PersistError::Unavailable(format!("{e:?}")))?;
        match raw {
            Some(raw) => {
                // Anything unparseable reads as no record, like a fresh browser
                let best = raw.trim().parse::<u32>().ok();
                log::info!("Loaded best score {:?}", best);
                Ok(best)
            }
            None => Ok(None),
        }
    }

    fn save(&mut self, best: u32) -> Result<(), PersistError> {
        let storage = Self::storage()?;
        storage
            .set_item(&self.key, &best.to_string())
            .map_err(|e| PersistError::Unavailable(format!("{e:?}")))?;
        log::info!("Best score {} saved", best);
        Ok(())
    }
}
