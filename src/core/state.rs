//! Puzzle state: ring rotations, move counter and move history.
//!
//! Links and the solved flag are never stored here. They are derived from
//! `rotations` on demand by [`crate::engine::links`], so they cannot drift
//! out of sync with the rings.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::action::MoveRecord;

/// Per-ring rotation offsets, in segment units.
///
/// Inline storage covers every shipped mandala (at most 11 rings).
pub type Rotations = SmallVec<[usize; 12]>;

/// Mutable state of one play session.
///
/// Uses `im::Vector` for the move history so snapshots of a session clone
/// in O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleState {
    rotations: Rotations,
    segment_count: usize,
    moves: u32,
    history: Vector<MoveRecord>,
}

impl PuzzleState {
    /// Create a state from explicit rotations.
    ///
    /// Every rotation is reduced modulo `segment_count`, which must be
    /// non-zero.
    #[must_use]
    pub(crate) fn from_rotations(rotations: &[usize], segment_count: usize) -> Self {
        assert!(segment_count > 0, "Rings must have at least one segment");
        Self {
            rotations: rotations.iter().map(|r| r % segment_count).collect(),
            segment_count,
            moves: 0,
            history: Vector::new(),
        }
    }

    /// Current rotation of every ring.
    #[must_use]
    pub fn rotations(&self) -> &[usize] {
        &self.rotations
    }

    /// Rotation of a single ring.
    #[must_use]
    pub fn rotation(&self, ring: usize) -> Option<usize> {
        self.rotations.get(ring).copied()
    }

    /// Number of rings.
    #[must_use]
    pub fn ring_count(&self) -> usize {
        self.rotations.len()
    }

    /// Number of segments per ring.
    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.segment_count
    }

    /// Number of state-changing moves made so far.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Moves applied this session, oldest first.
    #[must_use]
    pub fn history(&self) -> &Vector<MoveRecord> {
        &self.history
    }

    // === Mutation (engine only) ===

    pub(crate) fn rotations_mut(&mut self) -> &mut [usize] {
        &mut self.rotations
    }

    /// Count a move and append it to the history, returning it numbered.
    pub(crate) fn record_move(&mut self, mut record: MoveRecord) -> MoveRecord {
        self.moves += 1;
        record.sequence = self.moves;
        self.history.push_back(record);
        record
    }
}
