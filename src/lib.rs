//! # mandala-path
//!
//! Engine for a ring-rotation puzzle game built on concentric mandala rings.
//!
//! ## Design Principles
//!
//! 1. **Derived, Not Stored**: Ring links and the solved flag are always
//!    computed from the rotations. Nothing can drift out of sync.
//!
//! 2. **One Rule Set**: Rotating a ring turns its whole linked group.
//!
//! 3. **Configuration Over Convention**: Levels come from a
//!    `MandalaCatalog` passed explicitly. There is no global table.
//!
//! ## Architecture
//!
//! - **Pure Engine**: `PuzzleEngine` is synchronous and side-effect free
//!   apart from logging. The solved event is a value the host consumes.
//!
//! - **Persistent History**: Move history uses `im-rs`, so snapshots of an
//!   engine clone in O(1).
//!
//! - **Session Identity**: Host work triggered by a solve (insight,
//!   narration, progress writes) is tagged with a `SessionId`; late answers
//!   for a previous session are dropped.
//!
//! ## Modules
//!
//! - `core`: Symbols, configuration, moves, state, RNG, errors
//! - `engine`: Link computation and the puzzle engine
//! - `catalog`: Mandala definitions and level derivation
//! - `progress`: Completed levels, unlocks, titles and storage
//! - `host`: Play sessions and generative collaborators
//! - `recall`: Cosmic Recall memory game

pub mod core;
pub mod engine;
pub mod catalog;
pub mod progress;
pub mod host;
pub mod recall;

// Re-export commonly used types
pub use crate::core::{
    Symbol, LinkPositions, PuzzleConfig,
    Direction, Move, MoveRecord,
    PuzzleState, Rotations,
    PuzzleRng,
    PuzzleError,
};

pub use crate::engine::{
    compute_links, is_solved, linked_group, symbol_at,
    Links, PuzzleEngine, PuzzleStatus, RotateOutcome, SolvedEvent,
};

pub use crate::catalog::{
    LevelKey, MandalaDefinition, MandalaCatalog, CatalogError, LEVELS_PER_MANDALA,
};

pub use crate::progress::{
    PlayerProgress, PlayerTitle, ProgressStore, MemoryProgressStore, StoreError,
};

pub use crate::host::{
    PlaySession, SessionConfig, SessionId, Reveal, InsightStatus,
    InsightGenerator, AudioSynthesizer, InsightKind, CollaboratorError, HostError, Gesture,
};

pub use crate::recall::{RecallGame, RecallPhase, RecallScore};
