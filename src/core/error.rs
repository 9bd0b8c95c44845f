//! Puzzle construction and command errors.

use thiserror::Error;

/// Error raised when a puzzle configuration or command is invalid.
///
/// Invalid configurations are contract violations caught at construction.
/// Rotating an already-solved puzzle is not an error; it is ignored.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum PuzzleError {
    #[error("puzzle must have at least one ring")]
    NoRings,

    #[error("rings must have at least one segment")]
    NoSegments,

    #[error("expected {expected} symbols (one per segment), got {actual}")]
    SymbolCountMismatch { expected: usize, actual: usize },

    #[error("no segment carries the link symbol; the puzzle can never be solved")]
    NoLinkSymbol,

    #[error("{ring_count} rings of a single segment are always aligned; nothing to scramble")]
    AlwaysSolved { ring_count: usize },

    #[error("a single ring is solved from the start; a level needs at least two")]
    SingleRing,

    #[error("expected {expected} ring rotations, got {actual}")]
    RotationCountMismatch { expected: usize, actual: usize },

    #[error("ring {ring} out of range for a {ring_count}-ring puzzle")]
    RingOutOfRange { ring: usize, ring_count: usize },
}
