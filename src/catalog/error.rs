//! Catalog lookup and loading errors.

use thiserror::Error;

use crate::core::PuzzleError;

/// Error raised while building or querying a [`MandalaCatalog`](super::MandalaCatalog).
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("unknown mandala {0:?}")]
    UnknownMandala(String),

    #[error("level {level} out of range; mandalas have {levels} levels")]
    LevelOutOfRange { level: u8, levels: u8 },

    #[error("mandala {0:?} is already registered")]
    DuplicateMandala(String),

    #[error("mandala {id:?} does not describe a playable puzzle")]
    InvalidDefinition {
        id: String,
        #[source]
        source: PuzzleError,
    },

    #[error("malformed catalog JSON")]
    Json(#[from] serde_json::Error),
}
