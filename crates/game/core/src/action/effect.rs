//! Declarative effect descriptors.
//!
//! Spells and enemies never touch [`CombatState`] directly. They describe what
//! should happen as a [`Mutation`], a list of [`Effect`]s computed from a
//! snapshot, and the engine interprets that list. This keeps the engine
//! variant-agnostic and makes every transition serializable.
//!
//! Effects are applied in order, so a later effect observes the result of an
//! earlier one within the same mutation. Targets are validated before the
//! first effect lands: a mutation is applied entirely or not at all.

use crate::state::{AfflictionKind, CombatState};

use super::error::ActionError;

/// Who an effect lands on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EffectTarget {
    Player,
    /// Index into the roster of the snapshot the mutation was computed from.
    Enemy(usize),
}

/// A single atomic change to the combat state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effect {
    /// Subtracts `amount` from the target's health.
    Damage { target: EffectTarget, amount: u32 },

    /// Adds `amount` to the target's health. Maximum health is not modeled.
    Heal { target: EffectTarget, amount: u32 },

    /// Adds `stacks` of `kind` to an enemy (see [`crate::state::Afflictions::apply`]).
    ApplyAffliction {
        enemy: usize,
        kind: AfflictionKind,
        stacks: u32,
    },
}

impl Effect {
    /// Enemy index addressed by this effect, if any.
    pub fn enemy_index(&self) -> Option<usize> {
        match *self {
            Effect::Damage {
                target: EffectTarget::Enemy(index),
                ..
            }
            | Effect::Heal {
                target: EffectTarget::Enemy(index),
                ..
            }
            | Effect::ApplyAffliction { enemy: index, .. } => Some(index),
            _ => None,
        }
    }
}

/// What an effect actually did once applied.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AppliedEffect {
    Damaged {
        target: EffectTarget,
        amount: u32,
        health_after: i32,
    },
    Healed {
        target: EffectTarget,
        amount: u32,
        health_after: i32,
    },
    Afflicted {
        enemy: usize,
        kind: AfflictionKind,
        stacks_after: u32,
    },
}

/// Ordered list of effects produced by a spell or enemy variant.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mutation {
    effects: Vec<Effect>,
}

impl Mutation {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: append a damage effect.
    #[must_use]
    pub fn damage(mut self, target: EffectTarget, amount: u32) -> Self {
        self.effects.push(Effect::Damage { target, amount });
        self
    }

    /// Builder: append a heal effect.
    #[must_use]
    pub fn heal(mut self, target: EffectTarget, amount: u32) -> Self {
        self.effects.push(Effect::Heal { target, amount });
        self
    }

    /// Builder: append an affliction effect.
    #[must_use]
    pub fn afflict(mut self, enemy: usize, kind: AfflictionKind, stacks: u32) -> Self {
        self.effects.push(Effect::ApplyAffliction {
            enemy,
            kind,
            stacks,
        });
        self
    }

    pub fn effects(&self) -> &[Effect] {
        &self.effects
    }

    pub fn is_empty(&self) -> bool {
        self.effects.is_empty()
    }

    /// Checks every enemy index against `state` without mutating anything.
    pub fn validate(&self, state: &CombatState) -> Result<(), ActionError> {
        let len = state.enemies.len();
        match self
            .effects
            .iter()
            .filter_map(Effect::enemy_index)
            .find(|&index| index >= len)
        {
            Some(index) => Err(ActionError::invalid_enemy(index, len)),
            None => Ok(()),
        }
    }

    /// Applies every effect in order and reports what happened.
    ///
    /// Validates first, so an error leaves `state` untouched.
    pub fn apply(&self, state: &mut CombatState) -> Result<Vec<AppliedEffect>, ActionError> {
        self.validate(state)?;
        Ok(self
            .effects
            .iter()
            .map(|effect| apply_effect(state, effect))
            .collect())
    }
}

impl From<Vec<Effect>> for Mutation {
    fn from(effects: Vec<Effect>) -> Self {
        Self { effects }
    }
}

impl FromIterator<Effect> for Mutation {
    fn from_iter<I: IntoIterator<Item = Effect>>(iter: I) -> Self {
        Self {
            effects: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Mutation {
    type Item = &'a Effect;
    type IntoIter = core::slice::Iter<'a, Effect>;

    fn into_iter(self) -> Self::IntoIter {
        self.effects.iter()
    }
}

fn health_mut(state: &mut CombatState, target: EffectTarget) -> &mut i32 {
    match target {
        EffectTarget::Player => &mut state.player_health,
        // Bounds were checked by Mutation::validate.
        EffectTarget::Enemy(index) => &mut state.enemies[index].health,
    }
}

fn as_health_delta(amount: u32) -> i32 {
    i32::try_from(amount).unwrap_or(i32::MAX)
}

fn apply_effect(state: &mut CombatState, effect: &Effect) -> AppliedEffect {
    match *effect {
        Effect::Damage { target, amount } => {
            let health = health_mut(state, target);
            *health = health.saturating_sub(as_health_delta(amount));
            AppliedEffect::Damaged {
                target,
                amount,
                health_after: *health,
            }
        }
        Effect::Heal { target, amount } => {
            let health = health_mut(state, target);
            *health = health.saturating_add(as_health_delta(amount));
            AppliedEffect::Healed {
                target,
                amount,
                health_after: *health,
            }
        }
        Effect::ApplyAffliction {
            enemy,
            kind,
            stacks,
        } => {
            let stacks_after = state.enemies[enemy].afflictions.apply(kind, stacks);
            AppliedEffect::Afflicted {
                enemy,
                kind,
                stacks_after,
            }
        }
    }
}
