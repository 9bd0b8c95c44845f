//! Player titles earned by completing whole mandalas.

use serde::{Deserialize, Serialize};

/// Rank shown on the player's profile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum PlayerTitle {
    Novice,
    Apprentice,
    Seeker,
    Scholar,
    Guardian,
    Enlightened,
}

impl PlayerTitle {
    /// Title for a number of fully completed mandalas.
    #[must_use]
    pub const fn for_mandalas_completed(completed: usize) -> Self {
        match completed {
            0 => PlayerTitle::Novice,
            1..=2 => PlayerTitle::Apprentice,
            3..=4 => PlayerTitle::Seeker,
            5..=6 => PlayerTitle::Scholar,
            7..=9 => PlayerTitle::Guardian,
            _ => PlayerTitle::Enlightened,
        }
    }

    /// Display name.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            PlayerTitle::Novice => "Mandala Novice",
            PlayerTitle::Apprentice => "Dharma Apprentice",
            PlayerTitle::Seeker => "Gita Seeker",
            PlayerTitle::Scholar => "Vedic Scholar",
            PlayerTitle::Guardian => "Brahman Guardian",
            PlayerTitle::Enlightened => "Enlightened Soul",
        }
    }
}

impl std::fmt::Display for PlayerTitle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
