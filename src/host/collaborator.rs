//! Generative collaborators triggered by a solved puzzle.
//!
//! The crate never talks to a model itself. Hosts implement these traits
//! over whatever service they use; requests carry the [`SessionId`] they
//! were issued for so late answers can be matched against the live session.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::session::SessionId;

/// Kind of cultural insight the player prefers.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InsightKind {
    /// A Sanskrit shloka with its English meaning.
    #[default]
    Shloka,
    /// A historical fact.
    HistoricalFact,
    /// A brief mythological story.
    MythologicalStory,
}

/// Error reported by a generative collaborator.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum CollaboratorError {
    #[error("generation failed: {0}")]
    Failed(String),

    #[error("collaborator returned no output")]
    Empty,
}

/// Request for a cultural insight about a solved mandala.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InsightRequest {
    pub session: SessionId,
    pub mandala_name: String,
    pub kind: InsightKind,
}

/// Request to narrate an insight.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioRequest {
    pub session: SessionId,
    pub text: String,
}

/// Playable audio returned by a synthesizer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct AudioClip {
    /// MIME type, e.g. `audio/wav`.
    pub mime_type: String,
    /// Encoded audio.
    pub data: Vec<u8>,
}

impl AudioClip {
    /// Create a WAV clip.
    #[must_use]
    pub fn wav(data: Vec<u8>) -> Self {
        Self {
            mime_type: "audio/wav".to_string(),
            data,
        }
    }
}

/// Produces short insight text for a mandala.
pub trait InsightGenerator {
    /// Generate insight text for `request`.
    fn generate(&mut self, request: &InsightRequest) -> Result<String, CollaboratorError>;
}

/// Turns insight text into speech.
pub trait AudioSynthesizer {
    /// Synthesize narration for `request`.
    fn synthesize(&mut self, request: &AudioRequest) -> Result<AudioClip, CollaboratorError>;
}

impl<F> InsightGenerator for F
where
    F: FnMut(&InsightRequest) -> Result<String, CollaboratorError>,
{
    fn generate(&mut self, request: &InsightRequest) -> Result<String, CollaboratorError> {
        self(request)
    }
}

impl<F> AudioSynthesizer for F
where
    F: FnMut(&AudioRequest) -> Result<AudioClip, CollaboratorError>,
{
    fn synthesize(&mut self, request: &AudioRequest) -> Result<AudioClip, CollaboratorError> {
        self(request)
    }
}
