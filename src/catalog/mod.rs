//! Mandala catalog: definitions, the shipped table and level configuration.
//!
//! The catalog is passed explicitly to whatever needs it; there is no global
//! puzzle list.

pub mod mandala;
pub mod registry;
pub mod builtin;
pub mod error;

pub use mandala::{LevelKey, MandalaDefinition, LEVELS_PER_MANDALA};
pub use registry::MandalaCatalog;
pub use builtin::builtin_definitions;
pub use error::CatalogError;
