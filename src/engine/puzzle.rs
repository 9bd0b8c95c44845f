//! The puzzle state engine.
//!
//! `PuzzleEngine` owns one play session: the configuration, the scramble RNG
//! and the current [`PuzzleState`]. Rotation uses linked-group propagation:
//! turning a ring also turns every ring currently chained to it by links.
//!
//! ```
//! use mandala_path::core::{Direction, PuzzleConfig};
//! use mandala_path::engine::PuzzleEngine;
//!
//! let config = PuzzleConfig::with_single_link(2, 8, 0);
//! let mut engine = PuzzleEngine::from_rotations(config, &[0, 1]).unwrap();
//!
//! for _ in 0..7 {
//!     engine.rotate(1, Direction::Clockwise).unwrap();
//! }
//! assert!(engine.is_solved());
//! assert!(engine.take_solved_event().is_some());
//! ```

use std::ops::Range;

use serde::{Deserialize, Serialize};

use super::links::{self, Links};
use crate::core::{
    Direction, Move, MoveRecord, PuzzleConfig, PuzzleError, PuzzleRng, PuzzleState, Rotations,
    Symbol,
};

/// Coarse session status.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PuzzleStatus {
    /// At least one adjacent pair is unlinked.
    Unsolved,
    /// Every adjacent pair is linked. Terminal until reset.
    Solved,
}

/// What a call to [`PuzzleEngine::rotate`] did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RotateOutcome {
    /// The puzzle was already solved; nothing changed.
    Ignored,
    /// Rings turned; the puzzle is still unsolved.
    Rotated(MoveRecord),
    /// Rings turned and this move solved the puzzle.
    Solved(MoveRecord),
}

impl RotateOutcome {
    /// The applied move, if any.
    #[must_use]
    pub fn record(&self) -> Option<&MoveRecord> {
        match self {
            RotateOutcome::Ignored => None,
            RotateOutcome::Rotated(r) | RotateOutcome::Solved(r) => Some(r),
        }
    }

    /// Check if this move solved the puzzle.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        matches!(self, RotateOutcome::Solved(_))
    }
}

/// One-shot notification that the puzzle became solved.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolvedEvent {
    /// Moves it took.
    pub moves: u32,
    /// Final ring rotations.
    pub rotations: Rotations,
}

/// Puzzle state engine for one play session.
#[derive(Clone, Debug)]
pub struct PuzzleEngine {
    config: PuzzleConfig,
    rng: PuzzleRng,
    state: PuzzleState,
    solved_event: Option<SolvedEvent>,
}

impl PuzzleEngine {
    /// Validate `config` and draw a scrambled, unsolved starting state.
    pub fn new(config: PuzzleConfig, seed: u64) -> Result<Self, PuzzleError> {
        Self::with_rng(config, PuzzleRng::new(seed))
    }

    /// Like [`new`](Self::new) but with a caller-supplied RNG stream.
    pub fn with_rng(config: PuzzleConfig, mut rng: PuzzleRng) -> Result<Self, PuzzleError> {
        check_config(&config)?;
        let state = scramble(&config, &mut rng);
        log::debug!(
            "initialized {}-ring puzzle ({} segments) at {:?}",
            config.ring_count,
            config.segment_count,
            state.rotations()
        );

        Ok(Self {
            config,
            rng,
            state,
            solved_event: None,
        })
    }

    /// Start from explicit rotations instead of a scramble.
    ///
    /// The starting state may already be solved; rotations are reduced
    /// modulo the segment count. Later resets draw from entropy unless a
    /// seed is set with [`with_seed`](Self::with_seed).
    pub fn from_rotations(config: PuzzleConfig, rotations: &[usize]) -> Result<Self, PuzzleError> {
        check_config(&config)?;
        if rotations.len() != config.ring_count {
            return Err(PuzzleError::RotationCountMismatch {
                expected: config.ring_count,
                actual: rotations.len(),
            });
        }

        let state = PuzzleState::from_rotations(rotations, config.segment_count);
        Ok(Self {
            config,
            rng: PuzzleRng::from_entropy(),
            state,
            solved_event: None,
        })
    }

    /// Seed the RNG used by later resets.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = PuzzleRng::new(seed);
        self
    }

    /// Discard the session and draw a fresh scramble.
    ///
    /// Clears the move counter, history and any unconsumed solved event.
    pub fn reset(&mut self) {
        self.state = scramble(&self.config, &mut self.rng);
        self.solved_event = None;
        log::debug!("reset puzzle to {:?}", self.state.rotations());
    }

    // === Views ===

    /// The configuration this engine was built from.
    #[must_use]
    pub fn config(&self) -> &PuzzleConfig {
        &self.config
    }

    /// Current state.
    #[must_use]
    pub fn state(&self) -> &PuzzleState {
        &self.state
    }

    /// Current rotation of every ring.
    #[must_use]
    pub fn rotations(&self) -> &[usize] {
        self.state.rotations()
    }

    /// Link flags between adjacent rings, recomputed from the rotations.
    #[must_use]
    pub fn links(&self) -> Links {
        links::compute_links(&self.config, self.state.rotations())
    }

    /// Check if every adjacent pair is linked.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        links::is_solved(&self.config, self.state.rotations())
    }

    /// Coarse status for display.
    #[must_use]
    pub fn status(&self) -> PuzzleStatus {
        if self.is_solved() {
            PuzzleStatus::Solved
        } else {
            PuzzleStatus::Unsolved
        }
    }

    /// Moves made this session.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.state.moves()
    }

    /// Moves applied this session, oldest first.
    #[must_use]
    pub fn history(&self) -> &im::Vector<MoveRecord> {
        self.state.history()
    }

    /// Rings that would turn together if `ring` were rotated now.
    pub fn linked_group(&self, ring: usize) -> Result<Range<usize>, PuzzleError> {
        self.check_ring(ring)?;
        Ok(links::linked_group(&self.links(), ring))
    }

    /// Symbol currently shown at absolute angular `position` on `ring`.
    pub fn symbol_at(&self, ring: usize, position: usize) -> Result<Symbol, PuzzleError> {
        self.check_ring(ring)?;
        Ok(links::symbol_at(&self.config, self.state.rotations()[ring], position))
    }

    // === Commands ===

    /// Rotate `ring` one segment in `direction`, dragging its linked group.
    ///
    /// Ignored (state and move counter untouched) once the puzzle is solved.
    pub fn rotate(&mut self, ring: usize, direction: Direction) -> Result<RotateOutcome, PuzzleError> {
        self.check_ring(ring)?;
        if self.is_solved() {
            log::trace!("ignoring rotation of ring {ring}: puzzle already solved");
            return Ok(RotateOutcome::Ignored);
        }

        let group = links::linked_group(&self.links(), ring);
        let n = self.config.segment_count;
        for rotation in &mut self.state.rotations_mut()[group.clone()] {
            *rotation = direction.step(*rotation, n);
        }

        let record = self.state.record_move(MoveRecord {
            command: Move::new(ring, direction),
            group_start: group.start,
            group_end: group.end,
            sequence: 0,
        });
        log::trace!(
            "rotated ring {ring} {direction:?} (rings {}..{}) -> {:?}",
            group.start,
            group.end,
            self.state.rotations()
        );

        if self.is_solved() {
            log::info!("puzzle solved in {} moves", self.state.moves());
            self.solved_event = Some(SolvedEvent {
                moves: self.state.moves(),
                rotations: self.state.rotations().iter().copied().collect(),
            });
            Ok(RotateOutcome::Solved(record))
        } else {
            Ok(RotateOutcome::Rotated(record))
        }
    }

    /// Apply a [`Move`].
    pub fn apply(&mut self, command: Move) -> Result<RotateOutcome, PuzzleError> {
        self.rotate(command.ring, command.direction)
    }

    /// Take the pending solved notification.
    ///
    /// Returns `Some` exactly once per transition to solved.
    pub fn take_solved_event(&mut self) -> Option<SolvedEvent> {
        self.solved_event.take()
    }

    fn check_ring(&self, ring: usize) -> Result<(), PuzzleError> {
        if ring < self.config.ring_count {
            Ok(())
        } else {
            Err(PuzzleError::RingOutOfRange {
                ring,
                ring_count: self.config.ring_count,
            })
        }
    }
}

/// Validate a config for scrambling.
fn check_config(config: &PuzzleConfig) -> Result<(), PuzzleError> {
    config.check_scramble()?;
    if !config.has_link_symbol() {
        log::warn!(
            "{}-ring puzzle has no link symbol and can never be solved",
            config.ring_count
        );
    }
    Ok(())
}

/// Draw uniform rotations until the candidate is unsolved.
///
/// A single-ring puzzle is solved by definition, so its first draw is kept.
fn scramble(config: &PuzzleConfig, rng: &mut PuzzleRng) -> PuzzleState {
    let mut draws = 0u32;
    loop {
        draws += 1;
        let candidate: Rotations = (0..config.ring_count)
            .map(|_| rng.gen_rotation(config.segment_count))
            .collect();

        if config.ring_count <= 1 || !links::is_solved(config, &candidate) {
            if draws > 1 {
                log::trace!("scramble needed {draws} draws");
            }
            return PuzzleState::from_rotations(&candidate, config.segment_count);
        }
    }
}
