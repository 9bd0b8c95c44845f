//! Per-player level completion and unlock rules.
//!
//! - The first mandala in play order is always unlocked.
//! - A later mandala unlocks once every level of the one before it is done.
//! - Inside a mandala, level `l` unlocks once level `l - 1` is done.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::title::PlayerTitle;
use crate::catalog::{LevelKey, MandalaCatalog, LEVELS_PER_MANDALA};

/// Bit `l` set means level `l` is complete.
type LevelMask = u16;

const ALL_LEVELS: LevelMask = (1 << LEVELS_PER_MANDALA) - 1;

/// Completed levels of one player.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerProgress {
    user_id: String,
    completed: FxHashMap<String, LevelMask>,
}

impl PlayerProgress {
    /// Create empty progress for a user.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            completed: FxHashMap::default(),
        }
    }

    /// The user this progress belongs to.
    #[must_use]
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Mark a level complete. Returns `false` if it already was.
    ///
    /// Recording the same level twice is harmless.
    pub fn record(&mut self, key: &LevelKey) -> bool {
        if key.level >= LEVELS_PER_MANDALA {
            return false;
        }
        let mask = self.completed.entry(key.mandala_id.clone()).or_default();
        let bit = 1 << key.level;
        let newly = *mask & bit == 0;
        *mask |= bit;
        newly
    }

    /// Check if a level is complete.
    #[must_use]
    pub fn is_completed(&self, key: &LevelKey) -> bool {
        key.level < LEVELS_PER_MANDALA && self.mask(&key.mandala_id) & (1 << key.level) != 0
    }

    /// Number of completed levels in a mandala.
    #[must_use]
    pub fn levels_completed(&self, mandala_id: &str) -> u8 {
        self.mask(mandala_id).count_ones() as u8
    }

    /// Check if every level of a mandala is complete.
    #[must_use]
    pub fn is_mandala_complete(&self, mandala_id: &str) -> bool {
        self.mask(mandala_id) & ALL_LEVELS == ALL_LEVELS
    }

    /// Number of fully completed mandalas.
    #[must_use]
    pub fn mandalas_completed(&self) -> usize {
        self.completed
            .values()
            .filter(|&&m| m & ALL_LEVELS == ALL_LEVELS)
            .count()
    }

    /// Title earned so far.
    #[must_use]
    pub fn title(&self) -> PlayerTitle {
        PlayerTitle::for_mandalas_completed(self.mandalas_completed())
    }

    /// Check if a mandala may be played.
    #[must_use]
    pub fn is_mandala_unlocked(&self, catalog: &MandalaCatalog, mandala_id: &str) -> bool {
        match catalog.position(mandala_id) {
            None => false,
            Some(0) => true,
            Some(_) => catalog
                .previous(mandala_id)
                .is_some_and(|prev| self.is_mandala_complete(&prev.id)),
        }
    }

    /// Check if a level may be played.
    #[must_use]
    pub fn is_level_unlocked(&self, catalog: &MandalaCatalog, key: &LevelKey) -> bool {
        if key.level >= LEVELS_PER_MANDALA || !self.is_mandala_unlocked(catalog, &key.mandala_id) {
            return false;
        }
        key.level == 0 || self.is_completed(&LevelKey::new(key.mandala_id.clone(), key.level - 1))
    }

    /// First incomplete level of a mandala, or `None` when all are done.
    #[must_use]
    pub fn next_level(&self, mandala_id: &str) -> Option<u8> {
        let mask = self.mask(mandala_id);
        (0..LEVELS_PER_MANDALA).find(|&l| mask & (1 << l) == 0)
    }

    fn mask(&self, mandala_id: &str) -> LevelMask {
        self.completed.get(mandala_id).copied().unwrap_or(0)
    }
}
