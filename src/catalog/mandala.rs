//! Mandala definitions and level keys.
//!
//! A mandala is a themed puzzle family: one symbol sequence and a base ring
//! count. Each mandala is played over [`LEVELS_PER_MANDALA`] levels; higher
//! levels add rings.

use serde::{Deserialize, Serialize};

use super::error::CatalogError;
use crate::core::{PuzzleConfig, Symbol};

/// Number of levels in every mandala.
pub const LEVELS_PER_MANDALA: u8 = 9;

/// Static definition of one mandala.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MandalaDefinition {
    /// Stable identifier, e.g. `"agni"`.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Artwork identifier for the renderer.
    #[serde(default)]
    pub image_id: String,

    /// Ring count of the first level.
    pub base_rings: usize,

    /// Segments per ring.
    pub segments: usize,

    /// Symbol on each segment.
    pub symbols: Vec<Symbol>,

    /// One-line description.
    #[serde(default)]
    pub description: String,
}

impl MandalaDefinition {
    /// Create a definition. The segment count is taken from `symbols`.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        base_rings: usize,
        symbols: impl Into<Vec<Symbol>>,
    ) -> Self {
        let id = id.into();
        let symbols = symbols.into();
        Self {
            image_id: format!("mandala-{id}"),
            id,
            name: name.into(),
            base_rings,
            segments: symbols.len(),
            symbols,
            description: String::new(),
        }
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the artwork identifier.
    #[must_use]
    pub fn with_image(mut self, image_id: impl Into<String>) -> Self {
        self.image_id = image_id.into();
        self
    }

    /// Ring count at `level` (0-based): one extra ring every two levels.
    pub fn ring_count(&self, level: u8) -> Result<usize, CatalogError> {
        check_level(level)?;
        Ok(self.base_rings + usize::from(level / 2))
    }

    /// Puzzle configuration for `level` (0-based).
    pub fn level_config(&self, level: u8) -> Result<PuzzleConfig, CatalogError> {
        let rings = self.ring_count(level)?;
        Ok(PuzzleConfig::new(rings, self.segments, self.symbols.clone()))
    }

    /// Key identifying `level` of this mandala.
    pub fn level_key(&self, level: u8) -> Result<LevelKey, CatalogError> {
        check_level(level)?;
        Ok(LevelKey::new(self.id.clone(), level))
    }

    /// Check that every level of this mandala is a playable puzzle.
    ///
    /// Each level must scramble to an unsolved start, so one-ring and
    /// one-segment mandalas are rejected along with unsolvable ones.
    pub fn validate(&self) -> Result<(), CatalogError> {
        for level in 0..LEVELS_PER_MANDALA {
            self.level_config(level)?
                .check_playable()
                .map_err(|source| CatalogError::InvalidDefinition {
                    id: self.id.clone(),
                    source,
                })?;
        }
        Ok(())
    }
}

fn check_level(level: u8) -> Result<(), CatalogError> {
    if level < LEVELS_PER_MANDALA {
        Ok(())
    } else {
        Err(CatalogError::LevelOutOfRange {
            level,
            levels: LEVELS_PER_MANDALA,
        })
    }
}

/// Identifies one level of one mandala: the puzzle identifier used for
/// progress tracking.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LevelKey {
    /// Mandala identifier.
    pub mandala_id: String,
    /// 0-based level index.
    pub level: u8,
}

impl LevelKey {
    /// Create a new level key.
    pub fn new(mandala_id: impl Into<String>, level: u8) -> Self {
        Self {
            mandala_id: mandala_id.into(),
            level,
        }
    }
}

impl std::fmt::Display for LevelKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.mandala_id, self.level + 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brahman() -> MandalaDefinition {
        use Symbol::*;
        MandalaDefinition::new(
            "brahman",
            "Mandala of Brahman",
            7,
            vec![Logo, Fire, Water, Earth, Air, Lotus, Trishul, Phoenix, Garuda, Fire, Water, Earth],
        )
    }

    #[test]
    fn test_new_derives_segments_and_image() {
        let def = brahman();
        assert_eq!(def.segments, 12);
        assert_eq!(def.image_id, "mandala-brahman");
        assert!(def.validate().is_ok());
    }

    #[test]
    fn test_ring_count_grows_with_level() {
        let def = brahman();
        assert_eq!(def.ring_count(0).unwrap(), 7);
        assert_eq!(def.ring_count(1).unwrap(), 7);
        assert_eq!(def.ring_count(2).unwrap(), 8);
        assert_eq!(def.ring_count(8).unwrap(), 11);
    }

    #[test]
    fn test_level_out_of_range() {
        let def = brahman();
        assert!(matches!(
            def.level_config(9),
            Err(CatalogError::LevelOutOfRange { level: 9, levels: 9 })
        ));
    }

    #[test]
    fn test_level_config() {
        let config = brahman().level_config(4).unwrap();
        assert_eq!(config.ring_count, 9);
        assert_eq!(config.segment_count, 12);
        assert_eq!(config.link_positions().as_slice(), &[0]);
    }

    #[test]
    fn test_invalid_definition() {
        let def = MandalaDefinition::new("void", "Mandala of Nothing", 3, vec![Symbol::Air; 8]);
        assert!(matches!(
            def.validate(),
            Err(CatalogError::InvalidDefinition { ref id, source: crate::core::PuzzleError::NoLinkSymbol }) if id == "void"
        ));
    }

    #[test]
    fn test_single_ring_mandala_rejected() {
        let def = MandalaDefinition::new(
            "bindu",
            "Mandala of the Point",
            1,
            vec![Symbol::Logo, Symbol::Lotus],
        );
        assert!(matches!(
            def.validate(),
            Err(CatalogError::InvalidDefinition { source: crate::core::PuzzleError::SingleRing, .. })
        ));
    }

    #[test]
    fn test_single_segment_mandala_rejected() {
        let def = MandalaDefinition::new("eka", "Mandala of One", 3, vec![Symbol::Logo]);
        assert!(matches!(
            def.validate(),
            Err(CatalogError::InvalidDefinition {
                source: crate::core::PuzzleError::AlwaysSolved { ring_count: 3 },
                ..
            })
        ));
    }

    #[test]
    fn test_level_key_display() {
        let key = brahman().level_key(0).unwrap();
        assert_eq!(key.to_string(), "brahman-1");
        assert!(brahman().level_key(9).is_err());
    }
}
