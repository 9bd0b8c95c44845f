//! Host session errors.

use thiserror::Error;

use crate::catalog::{CatalogError, LevelKey};
use crate::core::PuzzleError;
use crate::progress::StoreError;

/// Error raised while starting or driving a play session.
#[derive(Error, Debug)]
pub enum HostError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),

    #[error(transparent)]
    Puzzle(#[from] PuzzleError),

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("level {0} is still locked")]
    Locked(LevelKey),
}
