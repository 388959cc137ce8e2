//! Authoritative combat state representation.
//!
//! This module owns the data structures that describe the player, the enemy
//! roster, the spell loadout and the spell-slot cycle. Runtime layers clone or
//! query this state but mutate it exclusively through the engine.
pub mod affliction;
pub mod error;

pub use affliction::{Affliction, AfflictionKind, Afflictions};
pub use error::StateError;

use crate::config::CombatConfig;

/// Runtime state of one enemy in the encounter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyState {
    /// Variant key used to look up behavior in the registry.
    pub name: String,
    /// Current health. May drop below zero until the enemy is removed.
    pub health: i32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub afflictions: Afflictions,
}

impl EnemyState {
    pub fn new(name: impl Into<String>, health: i32) -> Self {
        Self {
            name: name.into(),
            health,
            afflictions: Afflictions::empty(),
        }
    }

    /// Builder: attach an initial affliction set.
    #[must_use]
    pub fn with_afflictions(mut self, afflictions: Afflictions) -> Self {
        self.afflictions = afflictions;
        self
    }

    /// Adds one curse stack and returns the resulting count.
    pub fn apply_curse(&mut self) -> u32 {
        self.afflictions.apply(AfflictionKind::Curse, 1)
    }

    pub fn is_dead(&self) -> bool {
        self.health <= 0
    }
}

/// A spell known by the player for this encounter.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellState {
    /// Variant key used to look up behavior in the registry.
    pub name: String,
    /// Base magnitude before the slot multiplier.
    pub power: u32,
}

impl SpellState {
    pub fn new(name: impl Into<String>, power: u32) -> Self {
        Self {
            name: name.into(),
            power,
        }
    }
}

/// One bucket of the spell-slot cycle.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpellSlotState {
    /// Multiplier applied to a spell's base power.
    pub power: f64,
}

impl SpellSlotState {
    pub const fn new(power: f64) -> Self {
        Self { power }
    }
}

/// Canonical snapshot of one encounter.
///
/// Every transition produces a fresh value; a retained snapshot is never
/// mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatState {
    pub player_health: i32,
    /// Ordered roster; the order is the retaliation order.
    pub enemies: Vec<EnemyState>,
    pub spells: Vec<SpellState>,
    pub spell_slots: Vec<SpellSlotState>,
    pub current_slot: usize,
    pub current_spell: usize,
    pub player_turn: bool,
}

impl CombatState {
    /// Creates the starting state of an encounter.
    ///
    /// Both the spell loadout and the slot cycle must be non-empty and every
    /// slot multiplier must be a finite, positive number.
    pub fn new(
        player_health: i32,
        enemies: Vec<EnemyState>,
        spells: Vec<SpellState>,
        spell_slots: Vec<SpellSlotState>,
    ) -> Result<Self, StateError> {
        if spells.is_empty() {
            return Err(StateError::EmptySpellLoadout);
        }
        if spell_slots.is_empty() {
            return Err(StateError::EmptySpellSlots);
        }
        if let Some((index, slot)) = spell_slots
            .iter()
            .enumerate()
            .find(|(_, slot)| !(slot.power.is_finite() && slot.power > 0.0))
        {
            return Err(StateError::InvalidSlotPower {
                index,
                power: slot.power,
            });
        }

        Ok(Self {
            player_health,
            enemies,
            spells,
            spell_slots,
            current_slot: 0,
            current_spell: 0,
            player_turn: true,
        })
    }

    /// Creates the starting state using the player health from `config`.
    pub fn from_config(
        config: &CombatConfig,
        enemies: Vec<EnemyState>,
        spells: Vec<SpellState>,
    ) -> Result<Self, StateError> {
        let slots = config
            .spell_slots
            .iter()
            .copied()
            .map(SpellSlotState::new)
            .collect();
        Self::new(config.player_health, enemies, spells, slots)
    }

    pub fn enemy(&self, index: usize) -> Option<&EnemyState> {
        self.enemies.get(index)
    }

    /// The spell selected for the next cast.
    pub fn current_spell(&self) -> Result<&SpellState, StateError> {
        self.spells
            .get(self.current_spell)
            .ok_or(StateError::SpellIndexOutOfBounds {
                index: self.current_spell,
                len: self.spells.len(),
            })
    }

    /// Multiplier of the active spell slot.
    pub fn current_slot_power(&self) -> Result<f64, StateError> {
        self.spell_slots
            .get(self.current_slot)
            .map(|slot| slot.power)
            .ok_or(StateError::SlotIndexOutOfBounds {
                index: self.current_slot,
                len: self.spell_slots.len(),
            })
    }

    /// Slot-adjusted magnitude: `ceil(power * current slot multiplier)`.
    pub fn effective_power(&self, power: u32) -> Result<u32, StateError> {
        let slot_power = self.current_slot_power()?;
        Ok(scale_power(power, slot_power))
    }

    /// Indices of every enemy whose health is at or below zero.
    pub fn dead_enemies(&self) -> Vec<usize> {
        self.enemies
            .iter()
            .enumerate()
            .filter(|(_, enemy)| enemy.is_dead())
            .map(|(index, _)| index)
            .collect()
    }

    /// True once the roster is empty.
    pub fn is_victory(&self) -> bool {
        self.enemies.is_empty()
    }
}

/// Applies a slot multiplier and rounds up, saturating at `u32::MAX`.
pub fn scale_power(power: u32, multiplier: f64) -> u32 {
    let scaled = (f64::from(power) * multiplier).ceil();
    if scaled <= 0.0 {
        0
    } else if scaled >= f64::from(u32::MAX) {
        u32::MAX
    } else {
        scaled as u32
    }
}
