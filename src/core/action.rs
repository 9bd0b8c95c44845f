//! Player commands and move records.
//!
//! A move is a ring index plus a direction. Under linked-group rotation the
//! command names one ring but may turn several; the [`MoveRecord`] keeps the
//! full span that actually moved.

use serde::{Deserialize, Serialize};

/// Rotation direction, one segment per step.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Advance the ring's rotation by one segment.
    Clockwise,
    /// Move the ring's rotation back by one segment.
    CounterClockwise,
}

impl Direction {
    /// The opposite direction.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }

    /// Apply one step in this direction to `rotation`, modulo `segment_count`.
    #[must_use]
    pub const fn step(self, rotation: usize, segment_count: usize) -> usize {
        match self {
            Direction::Clockwise => (rotation + 1) % segment_count,
            Direction::CounterClockwise => (rotation + segment_count - 1) % segment_count,
        }
    }
}

/// A rotation command issued by the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Ring the player touched.
    pub ring: usize,
    /// Direction to turn it.
    pub direction: Direction,
}

impl Move {
    /// Create a new move.
    #[must_use]
    pub const fn new(ring: usize, direction: Direction) -> Self {
        Self { ring, direction }
    }

    /// Clockwise move on `ring`.
    #[must_use]
    pub const fn cw(ring: usize) -> Self {
        Self::new(ring, Direction::Clockwise)
    }

    /// Counter-clockwise move on `ring`.
    #[must_use]
    pub const fn ccw(ring: usize) -> Self {
        Self::new(ring, Direction::CounterClockwise)
    }
}

/// A move that changed the puzzle, with the rings it dragged along.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveRecord {
    /// The command as issued.
    pub command: Move,
    /// First ring of the linked group that turned.
    pub group_start: usize,
    /// One past the last ring of the linked group that turned.
    pub group_end: usize,
    /// 1-based move number within the session.
    pub sequence: u32,
}

impl MoveRecord {
    /// Number of rings turned by this move.
    #[must_use]
    pub fn group_len(&self) -> usize {
        self.group_end - self.group_start
    }
}
