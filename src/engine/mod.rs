//! Puzzle rules: link computation, linked groups, and the state engine.
//!
//! The engine performs no I/O. Hosts read its views, send rotation commands,
//! and consume the one-shot solved event.

pub mod links;
pub mod puzzle;

pub use links::{compute_links, is_solved, linked_group, symbol_at, Links};
pub use puzzle::{PuzzleEngine, PuzzleStatus, RotateOutcome, SolvedEvent};
