//! Name-keyed lookup of spell and enemy variants.

use std::collections::HashMap;
use std::sync::Arc;

use crate::config::CombatConfig;
use crate::state::{CombatState, EnemyState, SpellState};

use super::{EnemyVariant, SpellVariant, VariantError, VariantKind};

/// Registry of every spell and enemy variant known to an encounter.
///
/// Lookups use the exact variant name; there is no fallback.
#[derive(Clone, Default)]
pub struct VariantRegistry {
    spells: HashMap<String, Arc<dyn SpellVariant>>,
    enemies: HashMap<String, Arc<dyn EnemyVariant>>,
}

impl VariantRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a spell under its own name.
    pub fn register_spell(&mut self, spell: impl SpellVariant + 'static) -> Result<(), VariantError> {
        let name = spell.name().to_owned();
        if self.spells.contains_key(&name) {
            return Err(VariantError::DuplicateVariant {
                kind: VariantKind::Spell,
                name,
            });
        }
        self.spells.insert(name, Arc::new(spell));
        Ok(())
    }

    /// Registers an enemy under its own name.
    pub fn register_enemy(&mut self, enemy: impl EnemyVariant + 'static) -> Result<(), VariantError> {
        let name = enemy.name().to_owned();
        if self.enemies.contains_key(&name) {
            return Err(VariantError::DuplicateVariant {
                kind: VariantKind::Enemy,
                name,
            });
        }
        self.enemies.insert(name, Arc::new(enemy));
        Ok(())
    }

    /// Builder form of [`register_spell`](Self::register_spell).
    pub fn with_spell(mut self, spell: impl SpellVariant + 'static) -> Result<Self, VariantError> {
        self.register_spell(spell)?;
        Ok(self)
    }

    /// Builder form of [`register_enemy`](Self::register_enemy).
    pub fn with_enemy(mut self, enemy: impl EnemyVariant + 'static) -> Result<Self, VariantError> {
        self.register_enemy(enemy)?;
        Ok(self)
    }

    pub fn spell(&self, name: &str) -> Result<Arc<dyn SpellVariant>, VariantError> {
        self.spells
            .get(name)
            .cloned()
            .ok_or_else(|| VariantError::unknown(VariantKind::Spell, name))
    }

    pub fn enemy(&self, name: &str) -> Result<Arc<dyn EnemyVariant>, VariantError> {
        self.enemies
            .get(name)
            .cloned()
            .ok_or_else(|| VariantError::unknown(VariantKind::Enemy, name))
    }

    pub fn spell_names(&self) -> impl Iterator<Item = &str> {
        self.spells.keys().map(String::as_str)
    }

    pub fn enemy_names(&self) -> impl Iterator<Item = &str> {
        self.enemies.keys().map(String::as_str)
    }

    /// Starting loadout entry for a spell name.
    pub fn starting_spell(&self, name: &str) -> Result<SpellState, VariantError> {
        Ok(self.spell(name)?.starting_state())
    }

    /// Starting roster entry for an enemy name.
    pub fn starting_enemy(&self, name: &str) -> Result<EnemyState, VariantError> {
        Ok(self.enemy(name)?.starting_state())
    }

    /// Builds the starting state for an encounter roster.
    ///
    /// Every enemy and spell name is resolved here, so a misconfigured
    /// encounter fails before the first turn.
    pub fn build_state<S: AsRef<str>>(
        &self,
        config: &CombatConfig,
        enemy_names: &[S],
    ) -> Result<CombatState, VariantError> {
        let enemies = enemy_names
            .iter()
            .map(|name| self.starting_enemy(name.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        let spells = config
            .starting_spells
            .iter()
            .map(|name| self.starting_spell(name))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(CombatState::from_config(config, enemies, spells)?)
    }

    /// Checks that every name in `state` resolves.
    pub fn validate(&self, state: &CombatState) -> Result<(), VariantError> {
        for spell in &state.spells {
            self.spell(&spell.name)?;
        }
        for enemy in &state.enemies {
            self.enemy(&enemy.name)?;
        }
        Ok(())
    }
}

impl std::fmt::Debug for VariantRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut spells: Vec<_> = self.spell_names().collect();
        let mut enemies: Vec<_> = self.enemy_names().collect();
        spells.sort_unstable();
        enemies.sort_unstable();
        f.debug_struct("VariantRegistry")
            .field("spells", &spells)
            .field("enemies", &enemies)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::{EffectTarget, Mutation};
    use crate::variant::TargetSelection;

    struct Spark;

    impl SpellVariant for Spark {
        fn name(&self) -> &str {
            "Spark"
        }

        fn starting_state(&self) -> SpellState {
            SpellState::new("Spark", 1)
        }

        fn describe(&self, _state: &CombatState, spell: &SpellState) -> Result<String, VariantError> {
            Ok(format!("Deal {} damage", spell.power))
        }

        fn compute_effect(
            &self,
            target: &TargetSelection,
            state: &CombatState,
        ) -> Result<Mutation, VariantError> {
            let index = target.resolve_primary(state)?;
            Ok(Mutation::new().damage(EffectTarget::Enemy(index), 1))
        }
    }

    struct Rat;

    impl EnemyVariant for Rat {
        fn name(&self) -> &str {
            "Rat"
        }

        fn starting_state(&self) -> EnemyState {
            EnemyState::new("Rat", 2)
        }

        fn describe(&self, _state: &CombatState, _enemy: &EnemyState) -> String {
            "Bites for 1".to_owned()
        }

        fn act(&self, _self_index: usize, _state: &CombatState) -> Result<Mutation, VariantError> {
            Ok(Mutation::new().damage(EffectTarget::Player, 1))
        }
    }

    fn registry() -> VariantRegistry {
        VariantRegistry::new()
            .with_spell(Spark)
            .unwrap()
            .with_enemy(Rat)
            .unwrap()
    }

    fn config() -> CombatConfig {
        CombatConfig {
            starting_spells: vec!["Spark".to_owned()],
            ..CombatConfig::default()
        }
    }

    #[test]
    fn unknown_name_is_an_error() {
        let result = registry().spell("Meteor");
        assert!(matches!(
            result,
            Err(VariantError::UnknownVariant {
                kind: VariantKind::Spell,
                ref name
            }) if name == "Meteor"
        ));
    }

    #[test]
    fn duplicate_registration_is_rejected() {
        let result = registry().with_enemy(Rat);
        assert!(matches!(
            result,
            Err(VariantError::DuplicateVariant {
                kind: VariantKind::Enemy,
                ..
            })
        ));
    }

    #[test]
    fn builds_state_from_roster() {
        let state = registry().build_state(&config(), &["Rat", "Rat"]).unwrap();

        assert_eq!(state.enemies.len(), 2);
        assert_eq!(state.enemies[0], EnemyState::new("Rat", 2));
        assert_eq!(state.spells, vec![SpellState::new("Spark", 1)]);
        assert_eq!(state.player_health, CombatConfig::DEFAULT_PLAYER_HEALTH);
        assert!(state.player_turn);
    }

    #[test]
    fn build_state_fails_on_unknown_enemy() {
        let result = registry().build_state(&config(), &["Rat", "Dragon"]);
        assert!(matches!(
            result,
            Err(VariantError::UnknownVariant {
                kind: VariantKind::Enemy,
                ..
            })
        ));
    }

    #[test]
    fn validate_catches_foreign_names() {
        let mut state = registry().build_state(&config(), &["Rat"]).unwrap();
        state.enemies.push(EnemyState::new("Dragon", 50));

        assert!(registry().validate(&state).is_err());
    }

    #[test]
    fn empty_selection_is_rejected() {
        let state = registry().build_state(&config(), &["Rat"]).unwrap();
        let spell = registry().spell("Spark").unwrap();

        let result = spell.compute_effect(&TargetSelection::default(), &state);
        assert_eq!(result, Err(VariantError::EmptyTargetSelection));
    }
}
