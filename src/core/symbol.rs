//! Symbol tags carried by ring segments.
//!
//! Symbols form a closed set. The engine only ever compares a tag against
//! [`Symbol::LINK`]; mapping a tag to a visual asset is the renderer's job
//! and lives in [`Symbol::glyph`].

use serde::{Deserialize, Serialize};

/// A symbol printed on one segment of a ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Symbol {
    /// The mandala logo. Reserved as the link symbol.
    Logo,
    Fire,
    Water,
    Earth,
    Air,
    Phoenix,
    Garuda,
    Lotus,
    Trishul,
}

impl Symbol {
    /// The reserved tag whose alignment between adjacent rings forms a link.
    pub const LINK: Symbol = Symbol::Logo;

    /// Every symbol kind, in declaration order.
    pub const ALL: [Symbol; 9] = [
        Symbol::Logo,
        Symbol::Fire,
        Symbol::Water,
        Symbol::Earth,
        Symbol::Air,
        Symbol::Phoenix,
        Symbol::Garuda,
        Symbol::Lotus,
        Symbol::Trishul,
    ];

    /// Check if this is the link symbol.
    #[must_use]
    pub const fn is_link(self) -> bool {
        matches!(self, Symbol::Logo)
    }

    /// The lowercase tag used in configuration data.
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Symbol::Logo => "logo",
            Symbol::Fire => "fire",
            Symbol::Water => "water",
            Symbol::Earth => "earth",
            Symbol::Air => "air",
            Symbol::Phoenix => "phoenix",
            Symbol::Garuda => "garuda",
            Symbol::Lotus => "lotus",
            Symbol::Trishul => "trishul",
        }
    }

    /// Parse a configuration tag.
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Symbol> {
        Symbol::ALL.into_iter().find(|s| s.tag() == tag)
    }

    /// Rendering-side lookup: the icon asset drawn for this symbol.
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Symbol::Logo => "icons/logo.svg",
            Symbol::Fire => "icons/fire.svg",
            Symbol::Water => "icons/water.svg",
            Symbol::Earth => "icons/earth.svg",
            Symbol::Air => "icons/air.svg",
            Symbol::Phoenix => "icons/phoenix.svg",
            Symbol::Garuda => "icons/garuda.svg",
            Symbol::Lotus => "icons/lotus.svg",
            Symbol::Trishul => "icons/trishul.svg",
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.tag())
    }
}
