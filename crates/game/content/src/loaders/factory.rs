//! Content factory for building encounters from data files.

use std::path::{Path, PathBuf};

use game_core::{CombatConfig, CombatState, VariantRegistry};

use crate::encounter::{EncounterDefinition, builtin_encounters};
use crate::loaders::{ConfigLoader, EncounterLoader, LoadResult};

/// Content factory that loads all game content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── config.toml
/// └── encounters.ron
/// ```
///
/// [`ContentFactory::builtin`] serves the same data from code instead.
#[derive(Clone, Debug)]
pub struct ContentFactory {
    data_dir: Option<PathBuf>,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: Some(data_dir.into()),
        }
    }

    /// Factory backed by the default config and [`builtin_encounters`].
    pub fn builtin() -> Self {
        Self { data_dir: None }
    }

    /// Load combat configuration from `config.toml`.
    pub fn load_config(&self) -> LoadResult<CombatConfig> {
        match &self.data_dir {
            Some(dir) => ConfigLoader::load(&dir.join("config.toml")),
            None => Ok(CombatConfig::default()),
        }
    }

    /// Load the encounter catalog from `encounters.ron`.
    pub fn load_encounters(&self) -> LoadResult<Vec<EncounterDefinition>> {
        match &self.data_dir {
            Some(dir) => EncounterLoader::load(&dir.join("encounters.ron")),
            None => Ok(builtin_encounters()),
        }
    }

    /// Load config and catalog, then build the starting state of encounter `index`.
    ///
    /// Every enemy and spell name is resolved against `registry`.
    pub fn build_encounter(
        &self,
        registry: &VariantRegistry,
        index: usize,
    ) -> LoadResult<CombatState> {
        let config = self.load_config()?;
        let encounters = self.load_encounters()?;
        let encounter = encounters.get(index).ok_or_else(|| {
            anyhow::anyhow!(
                "encounter {} not found (catalog has {})",
                index,
                encounters.len()
            )
        })?;

        tracing::info!(
            target: "content::loaders",
            encounter = %encounter.name,
            enemies = encounter.enemies.len(),
            "Building encounter"
        );

        registry
            .build_state(&config, encounter.enemies.as_slice())
            .map_err(|e| anyhow::anyhow!("Failed to build encounter '{}': {}", encounter.name, e))
    }

    /// Returns the data directory path, or `None` for built-in content.
    pub fn data_dir(&self) -> Option<&Path> {
        self.data_dir.as_deref()
    }
}
