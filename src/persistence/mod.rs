//! Best-score persistence
//!
//! The engine only needs get/set on a single integer. Backends:
//! - `MemoryStore`: in-process, for tests and headless runs
//! - `FileStore`: JSON file in the platform data directory (native)
//! - `LocalStorageStore`: browser LocalStorage (wasm32)

#[cfg(not(target_arch = "wasm32"))]
pub mod file;
#[cfg(target_arch = "wasm32")]
pub mod local_storage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStore;
#[cfg(target_arch = "wasm32")]
pub use local_storage::LocalStorageStore;

use thiserror::Error;

/// Failures reading or writing the best score
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("storage I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("stored best score is corrupt: {0}")]
    Json(#[from] serde_json::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

/// Read/write access to the persisted best score
pub trait BestScoreStore {
    /// Stored best, or `None` when nothing has been recorded yet
    fn load(&mut self) -> Result<Option<u32>, PersistError>;

    /// Overwrite the stored best
    fn save(&mut self, best: u32) -> Result<(), PersistError>;
}

impl<S: BestScoreStore + ?Sized> BestScoreStore for Box<S> {
    fn load(&mut self) -> Result<Option<u32>, PersistError> {
        (**self).load()
    }

    fn save(&mut self, best: u32) -> Result<(), PersistError> {
        (**self).save(best)
    }
}

/// Process-local store
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    best: Option<u32>,
    saves: u32,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with a best score
    pub fn with_best(best: u32) -> Self {
        Self {
            best: Some(best),
            saves: 0,
        }
    }

    pub fn best(&self) -> Option<u32> {
        self.best
    }

    /// Number of writes so far
    pub fn saves(&self) -> u32 {
        self.saves
    }
}

impl BestScoreStore for MemoryStore {
    fn load(&mut self) -> Result<Option<u32>, PersistError> {
        Ok(self.best)
    }

    fn save(&mut self, best: u32) -> Result<(), PersistError> {
        self.best = Some(best);
        self.saves += 1;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.load().unwrap(), None);
        store.save(12).unwrap();
        assert_eq!(store.load().unwrap(), Some(12));
        assert_eq!(store.saves(), 1);
    }

    #[test]
    fn test_boxed_store_delegates() {
        let mut store: Box<dyn BestScoreStore> = Box::new(MemoryStore::with_best(4));
        assert_eq!(store.load().unwrap(), Some(4));
        store.save(9).unwrap();
        assert_eq!(store.load().unwrap(), Some(9));
    }
}
