//! Pluggable spell and enemy behavior.
//!
//! A variant is a named behavior unit. Spells implement [`SpellVariant`] and
//! enemies implement [`EnemyVariant`]; a [`VariantRegistry`] maps names to
//! implementations and is validated against the starting state once, so an
//! unknown name surfaces as a construction error instead of a mid-turn crash.
//!
//! Variants are pure: they read a snapshot and return a [`Mutation`] that the
//! engine applies later. They never hold on to state.

mod cue;
mod error;
mod registry;
mod target;

pub use cue::AnimationCue;
pub use error::{VariantError, VariantKind};
pub use registry::VariantRegistry;
pub use target::TargetSelection;

use crate::action::Mutation;
use crate::state::{CombatState, EnemyState, SpellState};

/// Behavior of one spell.
pub trait SpellVariant: Send + Sync {
    /// Registry key. Must match [`SpellState::name`].
    fn name(&self) -> &str;

    /// Loadout entry for a fresh encounter.
    fn starting_state(&self) -> SpellState;

    /// Human-readable preview with nominal and slot-adjusted power.
    fn describe(&self, state: &CombatState, spell: &SpellState) -> Result<String, VariantError>;

    /// Effects of casting this spell at `target` against `state`.
    fn compute_effect(
        &self,
        target: &TargetSelection,
        state: &CombatState,
    ) -> Result<Mutation, VariantError>;

    /// Cue shown while the spell resolves.
    fn animation_cue(&self, target: &TargetSelection, _state: &CombatState) -> AnimationCue {
        AnimationCue::SpellCast {
            spell: self.name().to_owned(),
            targets: target.indices().to_vec(),
        }
    }
}

/// Behavior of one enemy type.
pub trait EnemyVariant: Send + Sync {
    /// Registry key. Must match [`EnemyState::name`].
    fn name(&self) -> &str;

    /// Initial health and afflictions when the encounter starts.
    fn starting_state(&self) -> EnemyState;

    /// Intent preview shown next to the enemy.
    fn describe(&self, state: &CombatState, enemy: &EnemyState) -> String;

    /// Effects of the enemy at `self_index` acting against `state`.
    fn act(&self, self_index: usize, state: &CombatState) -> Result<Mutation, VariantError>;

    /// Cue shown while the enemy acts.
    fn animation_cue(&self, self_index: usize, _state: &CombatState) -> AnimationCue {
        AnimationCue::EnemyActs {
            enemy: self_index,
            name: self.name().to_owned(),
        }
    }
}
