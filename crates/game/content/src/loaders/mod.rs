//! Content loaders for reading game data from files.
//!
//! This module provides loaders that convert RON/TOML files into the types
//! consumed by [`game_core`] when an encounter starts.

pub mod config;
pub mod encounter;
pub mod factory;

pub use config::ConfigLoader;
pub use encounter::EncounterLoader;
pub use factory::ContentFactory;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

/// Helper function to read file contents.
pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    tracing::debug!(target: "content::loaders", path = %path.display(), "Reading content file");
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
