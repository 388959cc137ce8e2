//! Built-in spell and enemy variants plus data loaders.
//!
//! This crate houses the static content of the game:
//! - Spell variants (Fireball, Lightning strike, Shadow bolt)
//! - Enemy variants (Goblin, Skeleton, Shaman)
//! - Encounter catalogs (data-driven via RON)
//! - Combat configuration (data-driven via TOML)
//!
//! Content is resolved once at encounter start; the turn loop only ever sees
//! the resulting [`game_core::VariantRegistry`] and [`game_core::CombatState`].

pub mod encounter;
pub mod enemies;
pub mod spells;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use encounter::{EncounterDefinition, builtin_encounters};
pub use enemies::{Goblin, Shaman, Skeleton};
pub use spells::{Fireball, LightningStrike, ShadowBolt};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, EncounterLoader};

use game_core::{VariantError, VariantRegistry};

/// Registry holding every built-in spell and enemy.
pub fn builtin_registry() -> Result<VariantRegistry, VariantError> {
    VariantRegistry::new()
        .with_spell(Fireball)?
        .with_spell(LightningStrike)?
        .with_spell(ShadowBolt)?
        .with_enemy(Goblin)?
        .with_enemy(Skeleton)?
        .with_enemy(Shaman)
}
