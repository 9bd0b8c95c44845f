//! Puzzle configuration.
//!
//! A `PuzzleConfig` describes the shape of one puzzle: how many rings,
//! how many segments per ring, and which symbol sits on each segment.
//! Every ring carries the same symbol sequence.
//!
//! Configs are plain data built by the caller (usually from a
//! [`MandalaDefinition`](crate::catalog::MandalaDefinition)) and validated
//! when an engine is created from them.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::PuzzleError;
use super::symbol::Symbol;

/// Segment indices carrying the link symbol.
pub type LinkPositions = SmallVec<[usize; 4]>;

/// Immutable puzzle configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Number of concentric rings.
    pub ring_count: usize,

    /// Number of equal angular divisions per ring.
    pub segment_count: usize,

    /// Symbol on each segment, indexed by segment.
    pub symbols: Vec<Symbol>,

    /// Accept a configuration with no link symbol.
    ///
    /// Such a puzzle is decorative: it can be rotated but never solved.
    #[serde(default)]
    pub allow_unsolvable: bool,
}

impl PuzzleConfig {
    /// Create a configuration. Call [`validate`](Self::validate) (or build an
    /// engine from it) to check it.
    pub fn new(ring_count: usize, segment_count: usize, symbols: impl Into<Vec<Symbol>>) -> Self {
        Self {
            ring_count,
            segment_count,
            symbols: symbols.into(),
            allow_unsolvable: false,
        }
    }

    /// Create a configuration whose segment count is the symbol count.
    pub fn from_symbols(ring_count: usize, symbols: impl Into<Vec<Symbol>>) -> Self {
        let symbols = symbols.into();
        Self::new(ring_count, symbols.len(), symbols)
    }

    /// Create a configuration with a single link symbol at `link_position`
    /// and a neutral symbol everywhere else.
    pub fn with_single_link(ring_count: usize, segment_count: usize, link_position: usize) -> Self {
        let symbols = (0..segment_count)
            .map(|i| if i == link_position { Symbol::LINK } else { Symbol::Lotus })
            .collect::<Vec<_>>();
        Self::new(ring_count, segment_count, symbols)
    }

    /// Accept this configuration even if it has no link symbol.
    #[must_use]
    pub fn allow_unsolvable(mut self) -> Self {
        self.allow_unsolvable = true;
        self
    }

    /// Check the configuration for contract violations.
    pub fn validate(&self) -> Result<(), PuzzleError> {
        if self.ring_count == 0 {
            return Err(PuzzleError::NoRings);
        }
        if self.segment_count == 0 {
            return Err(PuzzleError::NoSegments);
        }
        if self.symbols.len() != self.segment_count {
            return Err(PuzzleError::SymbolCountMismatch {
                expected: self.segment_count,
                actual: self.symbols.len(),
            });
        }
        if !self.allow_unsolvable && !self.has_link_symbol() {
            return Err(PuzzleError::NoLinkSymbol);
        }
        Ok(())
    }

    /// Check that a scramble can reach an unsolved start.
    ///
    /// Several rings of a single linked segment are aligned in every draw.
    pub fn check_scramble(&self) -> Result<(), PuzzleError> {
        self.validate()?;
        if self.ring_count > 1 && self.segment_count == 1 && self.has_link_symbol() {
            return Err(PuzzleError::AlwaysSolved {
                ring_count: self.ring_count,
            });
        }
        Ok(())
    }

    /// Check that the puzzle can be played from an unsolved start to solved.
    ///
    /// Stricter than [`check_scramble`](Self::check_scramble): a single ring
    /// is accepted by the engine but starts solved, so it is not a level.
    pub fn check_playable(&self) -> Result<(), PuzzleError> {
        self.check_scramble()?;
        if self.ring_count < 2 {
            return Err(PuzzleError::SingleRing);
        }
        Ok(())
    }

    /// Segment indices carrying the link symbol, in ascending order.
    #[must_use]
    pub fn link_positions(&self) -> LinkPositions {
        self.symbols
            .iter()
            .enumerate()
            .filter(|(_, s)| s.is_link())
            .map(|(i, _)| i)
            .collect()
    }

    /// Check if any segment carries the link symbol.
    #[must_use]
    pub fn has_link_symbol(&self) -> bool {
        self.symbols.iter().any(|s| s.is_link())
    }

    /// Number of adjacent ring pairs.
    #[must_use]
    pub fn link_count(&self) -> usize {
        self.ring_count.saturating_sub(1)
    }
}
