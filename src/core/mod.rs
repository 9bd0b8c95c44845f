//! Core puzzle types: symbols, configuration, moves, state, RNG, errors.
//!
//! These are plain data. The rules that operate on them live in
//! [`crate::engine`].

pub mod symbol;
pub mod config;
pub mod action;
pub mod state;
pub mod rng;
pub mod error;

pub use symbol::Symbol;
pub use config::{LinkPositions, PuzzleConfig};
pub use action::{Direction, Move, MoveRecord};
pub use state::{PuzzleState, Rotations};
pub use rng::PuzzleRng;
pub use error::PuzzleError;
