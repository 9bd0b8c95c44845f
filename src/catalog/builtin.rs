//! The shipped mandala table.

use super::mandala::MandalaDefinition;
use super::registry::MandalaCatalog;
use crate::core::Symbol::{self, *};

struct Entry {
    id: &'static str,
    name: &'static str,
    base_rings: usize,
    symbols: &'static [Symbol],
    description: &'static str,
}

const MANDALAS: &[Entry] = &[
    Entry {
        id: "agni",
        name: "Mandala of Agni",
        base_rings: 3,
        symbols: &[Fire, Phoenix, Fire, Phoenix, Logo, Phoenix, Fire, Phoenix],
        description: "Explore the purifying power of the fire god, Agni.",
    },
    Entry {
        id: "jala",
        name: "Mandala of Jala",
        base_rings: 3,
        symbols: &[Water, Garuda, Water, Garuda, Logo, Garuda, Water, Garuda],
        description: "Uncover the mysteries of the water element and its deities.",
    },
    Entry {
        id: "prithvi",
        name: "Mandala of Prithvi",
        base_rings: 3,
        symbols: &[Earth, Lotus, Earth, Lotus, Earth, Lotus, Logo, Lotus, Earth, Lotus, Earth, Lotus],
        description: "Connect with the stability and patience of the Earth Mother.",
    },
    Entry {
        id: "vayu",
        name: "Mandala of Vayu",
        base_rings: 4,
        symbols: &[Air, Phoenix, Air, Garuda, Air, Logo, Air, Phoenix, Air, Garuda, Air, Logo],
        description: "Embrace the life-giving force of Vayu, the wind god.",
    },
    Entry {
        id: "akasha",
        name: "Mandala of Akasha",
        base_rings: 4,
        symbols: &[Fire, Water, Earth, Air, Phoenix, Garuda, Logo, Garuda, Phoenix, Air, Earth, Water],
        description: "Meditate on the endless expanse of space and consciousness.",
    },
    Entry {
        id: "surya",
        name: "Mandala of Surya",
        base_rings: 5,
        symbols: &[Fire, Logo, Fire, Lotus, Fire, Logo, Fire, Lotus],
        description: "Bask in the radiant energy of Surya, the sun deity.",
    },
    Entry {
        id: "chandra",
        name: "Mandala of Chandra",
        base_rings: 5,
        symbols: &[Water, Logo, Water, Lotus, Water, Logo, Water, Lotus],
        description: "Find tranquility in the cool, serene light of the Moon god.",
    },
    Entry {
        id: "dharma",
        name: "Mandala of Dharma",
        base_rings: 6,
        symbols: &[
            Trishul, Lotus, Trishul, Logo, Trishul, Lotus, Trishul, Logo, Trishul, Lotus, Trishul, Logo,
        ],
        description: "Follow the path of righteousness and cosmic order.",
    },
    Entry {
        id: "aranyani",
        name: "Mandala of Aranyani",
        base_rings: 4,
        symbols: &[Earth, Lotus, Air, Phoenix, Logo, Earth, Lotus, Air],
        description: "Discover the secrets of the elusive goddess of forests.",
    },
    Entry {
        id: "soma",
        name: "Mandala of Soma",
        base_rings: 5,
        symbols: &[Water, Lotus, Water, Logo, Water, Lotus, Water, Logo, Water, Lotus],
        description: "Learn of the celestial drink of the gods and its power.",
    },
    Entry {
        id: "brahman",
        name: "Mandala of Brahman",
        base_rings: 7,
        symbols: &[Logo, Fire, Water, Earth, Air, Lotus, Trishul, Phoenix, Garuda, Fire, Water, Earth],
        description: "Contemplate the nature of the ultimate, formless reality.",
    },
];

/// Definitions of the shipped mandalas, in play order.
pub fn builtin_definitions() -> impl Iterator<Item = MandalaDefinition> {
    MANDALAS.iter().map(|e| {
        MandalaDefinition::new(e.id, e.name, e.base_rings, e.symbols.to_vec())
            .with_description(e.description)
    })
}

impl MandalaCatalog {
    /// The shipped catalog of eleven mandalas.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for def in builtin_definitions() {
            if let Err(e) = catalog.register(def) {
                log::error!("skipping built-in mandala: {e}");
            }
        }
        catalog
    }
}
