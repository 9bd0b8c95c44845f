//! Cosmic Recall: a memory-sequence side game played on a mandala's symbols.

pub mod game;

pub use game::{PressOutcome, RecallError, RecallGame, RecallPhase, RecallScore, FLASH_GAP_MS, FLASH_MS};
