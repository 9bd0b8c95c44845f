//! Mandala catalog: the explicit configuration table.
//!
//! The catalog keeps definitions in play order (which drives unlocking) and
//! indexes them by id for lookup.
//!
//! ## Example
//!
//! ```
//! use mandala_path::catalog::MandalaCatalog;
//!
//! let catalog = MandalaCatalog::builtin();
//! let config = catalog.level_config("agni", 0).unwrap();
//! assert_eq!(config.ring_count, 3);
//! assert_eq!(config.segment_count, 8);
//! ```

use rustc_hash::FxHashMap;

use super::error::CatalogError;
use super::mandala::{LevelKey, MandalaDefinition};
use crate::core::PuzzleConfig;

/// Ordered table of mandala definitions.
#[derive(Clone, Debug, Default)]
pub struct MandalaCatalog {
    mandalas: Vec<MandalaDefinition>,
    by_id: FxHashMap<String, usize>,
}

impl MandalaCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from definitions in play order.
    pub fn from_definitions(
        definitions: impl IntoIterator<Item = MandalaDefinition>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for def in definitions {
            catalog.register(def)?;
        }
        Ok(catalog)
    }

    /// Parse a JSON array of mandala definitions.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let definitions: Vec<MandalaDefinition> = serde_json::from_str(json)?;
        let catalog = Self::from_definitions(definitions)?;
        log::debug!("loaded {} mandalas from JSON", catalog.len());
        Ok(catalog)
    }

    /// Append a definition to the end of the play order.
    ///
    /// Rejects duplicate ids and definitions that are not playable puzzles.
    pub fn register(&mut self, def: MandalaDefinition) -> Result<(), CatalogError> {
        if self.by_id.contains_key(&def.id) {
            return Err(CatalogError::DuplicateMandala(def.id));
        }
        def.validate()?;
        self.by_id.insert(def.id.clone(), self.mandalas.len());
        self.mandalas.push(def);
        Ok(())
    }

    /// Get a definition by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&MandalaDefinition> {
        self.by_id.get(id).map(|&i| &self.mandalas[i])
    }

    /// Get a definition by id, or fail with [`CatalogError::UnknownMandala`].
    pub fn require(&self, id: &str) -> Result<&MandalaDefinition, CatalogError> {
        self.get(id)
            .ok_or_else(|| CatalogError::UnknownMandala(id.to_string()))
    }

    /// Position of a mandala in play order.
    #[must_use]
    pub fn position(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    /// The mandala played before `id`, if any.
    #[must_use]
    pub fn previous(&self, id: &str) -> Option<&MandalaDefinition> {
        let index = self.position(id)?;
        index.checked_sub(1).map(|i| &self.mandalas[i])
    }

    /// Check if a mandala id is registered.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.by_id.contains_key(id)
    }

    /// Get the number of mandalas.
    #[must_use]
    pub fn len(&self) -> usize {
        self.mandalas.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.mandalas.is_empty()
    }

    /// Iterate over definitions in play order.
    pub fn iter(&self) -> impl Iterator<Item = &MandalaDefinition> {
        self.mandalas.iter()
    }

    /// Puzzle configuration for a level of a mandala.
    pub fn level_config(&self, id: &str, level: u8) -> Result<PuzzleConfig, CatalogError> {
        self.require(id)?.level_config(level)
    }

    /// Puzzle configuration for a level key.
    pub fn config_for(&self, key: &LevelKey) -> Result<PuzzleConfig, CatalogError> {
        self.level_config(&key.mandala_id, key.level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{PuzzleError, Symbol};

    fn def(id: &str) -> MandalaDefinition {
        let symbols = vec![Symbol::Fire, Symbol::Logo, Symbol::Fire, Symbol::Lotus];
        MandalaDefinition::new(id, format!("Mandala of {id}"), 3, symbols)
    }

    #[test]
    fn test_register_and_get() {
        let mut catalog = MandalaCatalog::new();
        catalog.register(def("agni")).unwrap();
        catalog.register(def("jala")).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("jala").unwrap().name, "Mandala of jala");
        assert!(catalog.get("vayu").is_none());
        assert_eq!(catalog.position("jala"), Some(1));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let mut catalog = MandalaCatalog::new();
        catalog.register(def("agni")).unwrap();
        assert!(matches!(
            catalog.register(def("agni")),
            Err(CatalogError::DuplicateMandala(id)) if id == "agni"
        ));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_unplayable_definition_rejected() {
        let mut catalog = MandalaCatalog::new();
        let broken = MandalaDefinition::new("dust", "Dust", 3, vec![Symbol::Earth; 6]);
        assert!(matches!(
            catalog.register(broken),
            Err(CatalogError::InvalidDefinition { .. })
        ));
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_json_mandalas_that_start_solved_rejected() {
        let one_ring = r#"[{"id": "bindu", "name": "Bindu", "base_rings": 1, "segments": 2,
                           "symbols": ["logo", "lotus"]}]"#;
        assert!(matches!(
            MandalaCatalog::from_json(one_ring),
            Err(CatalogError::InvalidDefinition {
                ref id,
                source: PuzzleError::SingleRing,
            }) if id == "bindu"
        ));

        let one_segment = r#"[{"id": "eka", "name": "Eka", "base_rings": 3, "segments": 1,
                              "symbols": ["logo"]}]"#;
        assert!(matches!(
            MandalaCatalog::from_json(one_segment),
            Err(CatalogError::InvalidDefinition {
                source: PuzzleError::AlwaysSolved { .. },
                ..
            })
        ));

        let mut catalog = MandalaCatalog::new();
        let def = MandalaDefinition::new("bindu", "Bindu", 1, vec![Symbol::Logo, Symbol::Lotus]);
        assert!(catalog.register(def).is_err());
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_previous_follows_play_order() {
        let catalog = MandalaCatalog::from_definitions([def("a"), def("b"), def("c")]).unwrap();
        assert!(catalog.previous("a").is_none());
        assert_eq!(catalog.previous("c").unwrap().id, "b");
        assert!(catalog.previous("zzz").is_none());

        let order: Vec<_> = catalog.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_unknown_mandala() {
        let catalog = MandalaCatalog::new();
        assert!(matches!(
            catalog.level_config("agni", 0),
            Err(CatalogError::UnknownMandala(id)) if id == "agni"
        ));
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {
                "id": "surya",
                "name": "Mandala of Surya",
                "base_rings": 5,
                "segments": 8,
                "symbols": ["fire", "logo", "fire", "lotus", "fire", "logo", "fire", "lotus"],
                "description": "Bask in the radiant energy of Surya, the sun deity."
            }
        ]"#;

        let catalog = MandalaCatalog::from_json(json).unwrap();
        let config = catalog.config_for(&LevelKey::new("surya", 3)).unwrap();
        assert_eq!(config.ring_count, 6);
        assert_eq!(config.link_positions().as_slice(), &[1, 5]);
    }

    #[test]
    fn test_from_json_malformed() {
        assert!(matches!(
            MandalaCatalog::from_json(r#"[{"id": "x"}]"#),
            Err(CatalogError::Json(_))
        ));
        assert!(matches!(
            MandalaCatalog::from_json(r#"[{"id":"x","name":"X","base_rings":3,"segments":2,"symbols":["logo","dragon"]}]"#),
            Err(CatalogError::Json(_))
        ));
    }
}
