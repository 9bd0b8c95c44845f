//! Storage collaborator for durable progress.
//!
//! The host writes a completion whenever a level is solved. Writes are
//! at-least-once, so stores must accept the same completion repeatedly.

use rustc_hash::FxHashMap;
use thiserror::Error;

use super::record::PlayerProgress;
use crate::catalog::LevelKey;

/// Error raised by a progress store.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("progress store unavailable: {0}")]
    Unavailable(String),

    #[error("progress snapshot could not be encoded or decoded")]
    Snapshot(#[from] bincode::Error),
}

/// Durable progress keyed by (user identifier, puzzle identifier).
pub trait ProgressStore {
    /// Record that `user_id` completed `key`. Must tolerate duplicates.
    fn record_completion(&mut self, user_id: &str, key: &LevelKey) -> Result<(), StoreError>;

    /// Load a user's progress. Unknown users have empty progress.
    fn load(&self, user_id: &str) -> Result<PlayerProgress, StoreError>;
}

/// In-process store, snapshotted with `bincode`.
#[derive(Clone, Debug, Default)]
pub struct MemoryProgressStore {
    users: FxHashMap<String, PlayerProgress>,
}

impl MemoryProgressStore {
    /// Create an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of users with recorded progress.
    #[must_use]
    pub fn user_count(&self) -> usize {
        self.users.len()
    }

    /// Encode every user's progress.
    pub fn snapshot(&self) -> Result<Vec<u8>, StoreError> {
        let users: Vec<&PlayerProgress> = self.users.values().collect();
        Ok(bincode::serialize(&users)?)
    }

    /// Rebuild a store from [`snapshot`](Self::snapshot) bytes.
    pub fn restore(bytes: &[u8]) -> Result<Self, StoreError> {
        let users: Vec<PlayerProgress> = bincode::deserialize(bytes)?;
        Ok(Self {
            users: users
                .into_iter()
                .map(|p| (p.user_id().to_string(), p))
                .collect(),
        })
    }
}

impl ProgressStore for MemoryProgressStore {
    fn record_completion(&mut self, user_id: &str, key: &LevelKey) -> Result<(), StoreError> {
        let progress = self
            .users
            .entry(user_id.to_string())
            .or_insert_with(|| PlayerProgress::new(user_id));
        if progress.record(key) {
            log::info!("{user_id} completed {key}");
        } else {
            log::debug!("{user_id} completed {key} again");
        }
        Ok(())
    }

    fn load(&self, user_id: &str) -> Result<PlayerProgress, StoreError> {
        Ok(self
            .users
            .get(user_id)
            .cloned()
            .unwrap_or_else(|| PlayerProgress::new(user_id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_load() {
        let mut store = MemoryProgressStore::new();
        store.record_completion("u1", &LevelKey::new("agni", 0)).unwrap();
        store.record_completion("u1", &LevelKey::new("agni", 1)).unwrap();

        let progress = store.load("u1").unwrap();
        assert_eq!(progress.levels_completed("agni"), 2);
        assert_eq!(store.user_count(), 1);
    }

    #[test]
    fn test_duplicate_writes_tolerated() {
        let mut store = MemoryProgressStore::new();
        let key = LevelKey::new("jala", 3);
        for _ in 0..3 {
            store.record_completion("u1", &key).unwrap();
        }
        assert_eq!(store.load("u1").unwrap().levels_completed("jala"), 1);
    }

    #[test]
    fn test_unknown_user_is_empty() {
        let store = MemoryProgressStore::new();
        let progress = store.load("nobody").unwrap();
        assert_eq!(progress.user_id(), "nobody");
        assert_eq!(progress.mandalas_completed(), 0);
    }

    #[test]
    fn test_snapshot_restore() {
        let mut store = MemoryProgressStore::new();
        store.record_completion("u1", &LevelKey::new("agni", 0)).unwrap();
        store.record_completion("u2", &LevelKey::new("soma", 8)).unwrap();

        let bytes = store.snapshot().unwrap();
        let restored = MemoryProgressStore::restore(&bytes).unwrap();

        assert_eq!(restored.user_count(), 2);
        assert_eq!(restored.load("u1").unwrap(), store.load("u1").unwrap());
        assert!(restored.load("u2").unwrap().is_completed(&LevelKey::new("soma", 8)));
    }

    #[test]
    fn test_restore_garbage_fails() {
        assert!(matches!(
            MemoryProgressStore::restore(&[0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x01]),
            Err(StoreError::Snapshot(_))
        ));
    }
}
