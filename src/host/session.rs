//! Play session: one level attempt wired to its collaborators.
//!
//! A `PlaySession` owns the puzzle engine for one attempt and reacts to its
//! solved event by opening a reveal, queueing an insight request and queueing
//! a progress write. Collaborator answers come back tagged with the
//! [`SessionId`] they were issued for; answers for any other session are
//! dropped, so a reset or a new level never shows a stale insight.
//!
//! ## Flow
//!
//! ```
//! use mandala_path::catalog::{LevelKey, MandalaCatalog};
//! use mandala_path::host::{PlaySession, SessionConfig, InsightStatus};
//! use mandala_path::progress::{MemoryProgressStore, ProgressStore};
//!
//! let catalog = MandalaCatalog::builtin();
//! let mut store = MemoryProgressStore::new();
//! let mut session =
//!     PlaySession::start(&catalog, LevelKey::new("agni", 0), SessionConfig::default()).unwrap();
//!
//! // Line every ring up with the first one.
//! while !session.is_solved() {
//!     let rotations = session.engine().rotations().to_vec();
//!     let ring = (1..rotations.len()).find(|&r| rotations[r] != rotations[0]).unwrap();
//!     session.rotate(ring, mandala_path::core::Direction::Clockwise).unwrap();
//! }
//!
//! let request = session.take_insight_request().unwrap();
//! session.complete_insight(request.session, Ok("Agni purifies.".to_string()));
//! assert_eq!(session.reveal().unwrap().insight, InsightStatus::Ready("Agni purifies.".to_string()));
//!
//! assert_eq!(session.flush_progress(&mut store), 1);
//! assert_eq!(store.load("guest").unwrap().levels_completed("agni"), 1);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use super::collaborator::{
    AudioClip, AudioRequest, AudioSynthesizer, CollaboratorError, InsightGenerator, InsightKind,
    InsightRequest,
};
use super::error::HostError;
use super::input::Gesture;
use crate::catalog::{LevelKey, MandalaCatalog};
use crate::core::{Direction, PuzzleError, PuzzleRng};
use crate::engine::{PuzzleEngine, RotateOutcome, SolvedEvent};
use crate::progress::ProgressStore;

/// Apology shown when no insight could be generated.
pub const INSIGHT_UNAVAILABLE: &str = "Could not retrieve wisdom at this time. Please try again later.";

static NEXT_SESSION: AtomicU64 = AtomicU64::new(1);

/// Identity of one level attempt. Never reused within a process.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SessionId(pub u64);

impl SessionId {
    /// Create a session ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    fn next() -> Self {
        Self(NEXT_SESSION.fetch_add(1, Ordering::Relaxed))
    }
}

impl std::fmt::Display for SessionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Session({})", self.0)
    }
}

/// Host-side settings for a play session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Player whose progress is written on completion.
    pub user_id: String,

    /// Preferred kind of insight.
    pub insight_kind: InsightKind,

    /// Request narration once an insight arrives.
    pub audio_enabled: bool,

    /// Scramble seed. Combined with the level key, so each level of the
    /// same seed scrambles differently.
    pub seed: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            user_id: "guest".to_string(),
            insight_kind: InsightKind::default(),
            audio_enabled: true,
            seed: 42,
        }
    }
}

impl SessionConfig {
    /// Set the player.
    #[must_use]
    pub fn with_user(mut self, user_id: impl Into<String>) -> Self {
        self.user_id = user_id.into();
        self
    }

    /// Set the preferred insight kind.
    #[must_use]
    pub fn with_insight_kind(mut self, kind: InsightKind) -> Self {
        self.insight_kind = kind;
        self
    }

    /// Enable or disable narration.
    #[must_use]
    pub fn with_audio(mut self, enabled: bool) -> Self {
        self.audio_enabled = enabled;
        self
    }

    /// Set the scramble seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }
}

/// State of the insight shown in the reveal.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InsightStatus {
    /// Request issued, no answer yet.
    Pending,
    /// Insight text to display.
    Ready(String),
    /// Generation failed; show this apology instead.
    Unavailable(String),
}

/// Congratulatory reveal opened when the puzzle is solved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reveal {
    pub mandala_name: String,
    pub moves: u32,
    pub insight: InsightStatus,
    /// Narration, if one was requested and produced.
    pub audio: Option<AudioClip>,
}

/// One level attempt.
#[derive(Debug)]
pub struct PlaySession {
    config: SessionConfig,
    level: LevelKey,
    mandala_name: String,
    engine: PuzzleEngine,
    id: SessionId,
    reveal: Option<Reveal>,
    insight_request: Option<InsightRequest>,
    audio_request: Option<AudioRequest>,
    pending_writes: Vec<LevelKey>,
}

impl PlaySession {
    /// Start a session on `level`.
    pub fn start(
        catalog: &MandalaCatalog,
        level: LevelKey,
        config: SessionConfig,
    ) -> Result<Self, HostError> {
        let def = catalog.require(&level.mandala_id)?;
        let puzzle = def.level_config(level.level)?;
        let rng = PuzzleRng::new(config.seed).for_context(&level.to_string());
        let engine = PuzzleEngine::with_rng(puzzle, rng)?;
        let id = SessionId::next();
        log::debug!("{id}: {} started {level}", config.user_id);

        Ok(Self {
            mandala_name: def.name.clone(),
            config,
            level,
            engine,
            id,
            reveal: None,
            insight_request: None,
            audio_request: None,
            pending_writes: Vec::new(),
        })
    }

    /// Start a session only if the player has unlocked `level`.
    pub fn start_unlocked(
        catalog: &MandalaCatalog,
        store: &impl ProgressStore,
        level: LevelKey,
        config: SessionConfig,
    ) -> Result<Self, HostError> {
        catalog.config_for(&level)?;
        let progress = store.load(&config.user_id)?;
        if !progress.is_level_unlocked(catalog, &level) {
            return Err(HostError::Locked(level));
        }
        Self::start(catalog, level, config)
    }

    // === Views ===

    /// Current session identity.
    #[must_use]
    pub fn id(&self) -> SessionId {
        self.id
    }

    /// Level being played.
    #[must_use]
    pub fn level(&self) -> &LevelKey {
        &self.level
    }

    /// Session settings.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// The puzzle engine, read-only.
    #[must_use]
    pub fn engine(&self) -> &PuzzleEngine {
        &self.engine
    }

    /// Check if the puzzle is solved.
    #[must_use]
    pub fn is_solved(&self) -> bool {
        self.engine.is_solved()
    }

    /// The open reveal, if the puzzle was solved this session.
    #[must_use]
    pub fn reveal(&self) -> Option<&Reveal> {
        self.reveal.as_ref()
    }

    /// Progress writes not yet accepted by the store.
    #[must_use]
    pub fn pending_writes(&self) -> &[LevelKey] {
        &self.pending_writes
    }

    // === Play ===

    /// Rotate a ring, opening the reveal if this solves the puzzle.
    pub fn rotate(&mut self, ring: usize, direction: Direction) -> Result<RotateOutcome, PuzzleError> {
        let outcome = self.engine.rotate(ring, direction)?;
        if let Some(event) = self.engine.take_solved_event() {
            self.on_solved(event);
        }
        Ok(outcome)
    }

    /// Rotate a ring in the direction a gesture maps to.
    pub fn gesture(&mut self, ring: usize, gesture: Gesture) -> Result<RotateOutcome, PuzzleError> {
        self.rotate(ring, gesture.direction())
    }

    /// Start over on the same level with a fresh scramble and a new identity.
    ///
    /// Outstanding collaborator requests become stale. Queued progress
    /// writes are kept.
    pub fn reset(&mut self) {
        self.engine.reset();
        let old = std::mem::replace(&mut self.id, SessionId::next());
        self.reveal = None;
        self.insight_request = None;
        self.audio_request = None;
        log::debug!("{old} reset as {}", self.id);
    }

    /// Close the reveal. Like the original dialog, this starts over.
    pub fn dismiss_reveal(&mut self) {
        self.reset();
    }

    fn on_solved(&mut self, event: SolvedEvent) {
        log::info!(
            "{}: {} solved {} in {} moves",
            self.id,
            self.config.user_id,
            self.level,
            event.moves
        );
        self.reveal = Some(Reveal {
            mandala_name: self.mandala_name.clone(),
            moves: event.moves,
            insight: InsightStatus::Pending,
            audio: None,
        });
        self.insight_request = Some(InsightRequest {
            session: self.id,
            mandala_name: self.mandala_name.clone(),
            kind: self.config.insight_kind,
        });
        self.pending_writes.push(self.level.clone());
    }

    // === Collaborators ===

    /// Take the insight request issued on solve, if not yet taken.
    pub fn take_insight_request(&mut self) -> Option<InsightRequest> {
        self.insight_request.take()
    }

    /// Take the narration request issued once an insight arrived.
    pub fn take_audio_request(&mut self) -> Option<AudioRequest> {
        self.audio_request.take()
    }

    /// Deliver an insight answer. Returns `false` if it was discarded.
    ///
    /// Failures show [`INSIGHT_UNAVAILABLE`]; they never affect the puzzle.
    pub fn complete_insight(
        &mut self,
        session: SessionId,
        result: Result<String, CollaboratorError>,
    ) -> bool {
        if session != self.id {
            log::warn!("discarding insight for stale {session} (now {})", self.id);
            return false;
        }
        let Some(reveal) = self.reveal.as_mut() else {
            log::warn!("{session}: insight arrived with no reveal open");
            return false;
        };
        if reveal.insight != InsightStatus::Pending {
            return false;
        }

        let result = result.and_then(|text| {
            if text.trim().is_empty() {
                Err(CollaboratorError::Empty)
            } else {
                Ok(text)
            }
        });
        match result {
            Ok(text) => {
                if self.config.audio_enabled {
                    self.audio_request = Some(AudioRequest {
                        session,
                        text: text.clone(),
                    });
                }
                reveal.insight = InsightStatus::Ready(text);
            }
            Err(e) => {
                log::warn!("{session}: insight generation failed: {e}");
                reveal.insight = InsightStatus::Unavailable(INSIGHT_UNAVAILABLE.to_string());
            }
        }
        true
    }

    /// Deliver narration. Returns `false` if it was discarded.
    ///
    /// A failure simply leaves the reveal without audio.
    pub fn complete_audio(
        &mut self,
        session: SessionId,
        result: Result<AudioClip, CollaboratorError>,
    ) -> bool {
        if session != self.id {
            log::warn!("discarding audio for stale {session} (now {})", self.id);
            return false;
        }
        let Some(reveal) = self.reveal.as_mut() else {
            return false;
        };
        if !matches!(reveal.insight, InsightStatus::Ready(_)) || reveal.audio.is_some() {
            return false;
        }

        match result {
            Ok(clip) => reveal.audio = Some(clip),
            Err(e) => log::warn!("{session}: narration unavailable: {e}"),
        }
        true
    }

    /// Run outstanding requests through the given collaborators, in order.
    pub fn resolve_pending(
        &mut self,
        insight: &mut impl InsightGenerator,
        audio: &mut impl AudioSynthesizer,
    ) {
        if let Some(request) = self.take_insight_request() {
            let result = insight.generate(&request);
            self.complete_insight(request.session, result);
        }
        if let Some(request) = self.take_audio_request() {
            let result = audio.synthesize(&request);
            self.complete_audio(request.session, result);
        }
    }

    /// Write queued completions. Failed writes stay queued for the next
    /// call. Returns the number of writes accepted.
    pub fn flush_progress(&mut self, store: &mut impl ProgressStore) -> usize {
        let user_id = &self.config.user_id;
        let before = self.pending_writes.len();
        self.pending_writes
            .retain(|key| match store.record_completion(user_id, key) {
                Ok(()) => false,
                Err(e) => {
                    log::warn!("progress write for {key} failed, will retry: {e}");
                    true
                }
            });
        before - self.pending_writes.len()
    }
}
