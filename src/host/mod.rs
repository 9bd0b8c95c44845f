//! Host integration: play sessions, collaborators and input mapping.
//!
//! Everything here sits on top of the engine. The engine stays pure and
//! synchronous; the host layer owns the side effects a solved puzzle
//! triggers and the identity needed to discard late answers.

pub mod collaborator;
pub mod error;
pub mod input;
pub mod session;

pub use collaborator::{
    AudioClip, AudioRequest, AudioSynthesizer, CollaboratorError, InsightGenerator, InsightKind,
    InsightRequest,
};
pub use error::HostError;
pub use input::Gesture;
pub use session::{
    InsightStatus, PlaySession, Reveal, SessionConfig, SessionId, INSIGHT_UNAVAILABLE,
};
