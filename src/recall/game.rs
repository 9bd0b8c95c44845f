//! Recall game state machine.
//!
//! The game shows a growing sequence of symbol slots and the player repeats
//! it. Timing is left to the host; [`FLASH_MS`] and [`FLASH_GAP_MS`] are the
//! suggested pacing for the showing phase.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::MandalaDefinition;
use crate::core::{PuzzleRng, Symbol};

/// How long each slot stays lit while the sequence is shown.
pub const FLASH_MS: u64 = 400;

/// Pause between two flashes.
pub const FLASH_GAP_MS: u64 = 200;

/// Phase of a recall game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RecallPhase {
    Idle,
    ShowingSequence,
    AwaitingInput,
    GameOver,
}

/// Result of a single press.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PressOutcome {
    /// Not accepting input right now.
    Ignored,
    /// Correct, more of the sequence to go.
    Correct,
    /// Sequence repeated; the next round is being shown.
    RoundComplete,
    /// Wrong slot.
    GameOver,
}

/// Final score to persist for a mandala.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecallScore {
    pub mandala_id: String,
    pub score: u32,
}

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum RecallError {
    #[error("slot {slot} out of range (slots: {slots})")]
    SlotOutOfRange { slot: usize, slots: usize },
}

/// One recall game over a mandala's symbol slots.
#[derive(Clone, Debug)]
pub struct RecallGame {
    mandala_id: String,
    symbols: Vec<Symbol>,
    rng: PuzzleRng,
    phase: RecallPhase,
    sequence: Vec<usize>,
    input: Vec<usize>,
    score: u32,
    final_score: Option<RecallScore>,
}

impl RecallGame {
    /// Create an idle game on a mandala's slots.
    #[must_use]
    pub fn new(mandala: &MandalaDefinition, rng: PuzzleRng) -> Self {
        Self {
            mandala_id: mandala.id.clone(),
            symbols: mandala.symbols.clone(),
            rng,
            phase: RecallPhase::Idle,
            sequence: Vec::new(),
            input: Vec::new(),
            score: 0,
            final_score: None,
        }
    }

    #[must_use]
    pub fn phase(&self) -> RecallPhase {
        self.phase
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Slots to flash, in order.
    #[must_use]
    pub fn sequence(&self) -> &[usize] {
        &self.sequence
    }

    /// Number of slots on the board.
    #[must_use]
    pub fn slot_count(&self) -> usize {
        self.symbols.len()
    }

    /// Symbol drawn in a slot.
    #[must_use]
    pub fn symbol(&self, slot: usize) -> Option<Symbol> {
        self.symbols.get(slot).copied()
    }

    /// Start (or restart) a game.
    pub fn start(&mut self) {
        self.sequence.clear();
        self.input.clear();
        self.score = 0;
        self.final_score = None;
        self.next_round();
    }

    /// The host finished flashing the sequence.
    pub fn finish_showing(&mut self) {
        if self.phase == RecallPhase::ShowingSequence {
            self.phase = RecallPhase::AwaitingInput;
        }
    }

    /// Player pressed `slot`.
    pub fn press(&mut self, slot: usize) -> Result<PressOutcome, RecallError> {
        if slot >= self.symbols.len() {
            return Err(RecallError::SlotOutOfRange {
                slot,
                slots: self.symbols.len(),
            });
        }
        if self.phase != RecallPhase::AwaitingInput {
            return Ok(PressOutcome::Ignored);
        }

        let index = self.input.len();
        self.input.push(slot);
        if self.sequence[index] != slot {
            self.phase = RecallPhase::GameOver;
            log::debug!("recall on {} over at score {}", self.mandala_id, self.score);
            if self.score > 0 {
                self.final_score = Some(RecallScore {
                    mandala_id: self.mandala_id.clone(),
                    score: self.score,
                });
            }
            return Ok(PressOutcome::GameOver);
        }

        if self.input.len() == self.sequence.len() {
            self.score += 1;
            self.next_round();
            return Ok(PressOutcome::RoundComplete);
        }
        Ok(PressOutcome::Correct)
    }

    /// Final score of a finished game, yielded once.
    pub fn take_final_score(&mut self) -> Option<RecallScore> {
        self.final_score.take()
    }

    fn next_round(&mut self) {
        self.input.clear();
        let slot = self.rng.gen_index(0..self.symbols.len());
        self.sequence.push(slot);
        self.phase = RecallPhase::ShowingSequence;
    }
}
