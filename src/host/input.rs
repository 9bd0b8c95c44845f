//! Mapping raw pointer gestures to rotation directions.
//!
//! This is an input-layer convenience; the engine only knows [`Direction`].

use serde::{Deserialize, Serialize};

use crate::core::Direction;

/// A gesture on a ring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gesture {
    /// Left mouse button.
    PrimaryClick,
    /// Right mouse button / context menu.
    SecondaryClick,
    /// Single touch.
    Tap,
    /// Double touch.
    DoubleTap,
}

impl Gesture {
    /// Direction this gesture turns a ring.
    #[must_use]
    pub const fn direction(self) -> Direction {
        match self {
            Gesture::PrimaryClick | Gesture::Tap => Direction::Clockwise,
            Gesture::SecondaryClick | Gesture::DoubleTap => Direction::CounterClockwise,
        }
    }
}
