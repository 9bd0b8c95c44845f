//! Player progress: completed levels, unlocks, titles and storage.

pub mod record;
pub mod title;
pub mod store;

pub use record::PlayerProgress;
pub use title::PlayerTitle;
pub use store::{MemoryProgressStore, ProgressStore, StoreError};
