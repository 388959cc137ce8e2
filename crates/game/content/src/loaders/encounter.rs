//! Encounter catalog loader.

use std::path::Path;

use crate::encounter::EncounterDefinition;
use crate::loaders::{LoadResult, read_file};

/// Loader for encounter catalogs from RON files.
pub struct EncounterLoader;

impl EncounterLoader {
    /// Load an encounter catalog.
    ///
    /// RON format: `Vec<EncounterDefinition>`
    ///
    /// ```ron
    /// [
    ///     (name: "Goblin ambush", enemies: ["Goblin", "Goblin"]),
    /// ]
    /// ```
    pub fn load(path: &Path) -> LoadResult<Vec<EncounterDefinition>> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse an encounter catalog from RON text.
    pub fn parse(content: &str) -> LoadResult<Vec<EncounterDefinition>> {
        let encounters: Vec<EncounterDefinition> = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse encounter catalog RON: {}", e))?;

        if let Some(empty) = encounters.iter().find(|e| e.enemies.is_empty()) {
            anyhow::bail!("encounter '{}' has no enemies", empty.name);
        }

        tracing::debug!(
            target: "content::loaders",
            count = encounters.len(),
            "Loaded encounter catalog"
        );
        Ok(encounters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_roster_in_order() {
        let encounters = EncounterLoader::parse(
            r#"[
                (name: "Crypt", enemies: ["Skeleton", "Shaman"]),
            ]"#,
        )
        .unwrap();

        assert_eq!(
            encounters,
            vec![EncounterDefinition::new("Crypt", ["Skeleton", "Shaman"])]
        );
    }

    #[test]
    fn empty_roster_is_rejected() {
        let result = EncounterLoader::parse(r#"[(name: "Nobody", enemies: [])]"#);
        assert!(result.is_err());
    }
}
