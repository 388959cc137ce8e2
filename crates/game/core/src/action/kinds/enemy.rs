//! Enemy-side actions: retaliation effects and roster removal.

use crate::action::{ActionError, ActionResult, ActionTransition, Mutation};
use crate::state::CombatState;

/// Applies the effects computed by an enemy variant during retaliation.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemyAction {
    pub mutation: Mutation,
}

impl EnemyAction {
    pub fn new(mutation: Mutation) -> Self {
        Self { mutation }
    }
}

impl ActionTransition for EnemyAction {
    type Error = ActionError;

    fn pre_validate(&self, state: &CombatState) -> Result<(), Self::Error> {
        self.mutation.validate(state)
    }

    fn apply(&self, state: &mut CombatState) -> Result<ActionResult, Self::Error> {
        self.mutation.apply(state).map(ActionResult::Effects)
    }
}

/// Removes dead enemies from the roster.
///
/// Indices refer to the roster of the snapshot this action is applied to.
/// Survivors keep their relative order, so every index after a removed one
/// shifts down; indices held from before the removal are stale afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnemiesDiedAction {
    pub indices: Vec<usize>,
}

impl EnemiesDiedAction {
    pub fn new(indices: Vec<usize>) -> Self {
        Self { indices }
    }
}

impl ActionTransition for EnemiesDiedAction {
    type Error = ActionError;

    fn pre_validate(&self, state: &CombatState) -> Result<(), Self::Error> {
        let len = state.enemies.len();
        match self.indices.iter().copied().find(|&index| index >= len) {
            Some(index) => Err(ActionError::invalid_enemy(index, len)),
            None => Ok(()),
        }
    }

    fn apply(&self, state: &mut CombatState) -> Result<ActionResult, Self::Error> {
        let mut removed = self.indices.clone();
        removed.sort_unstable();
        removed.dedup();

        let mut position = 0;
        state.enemies.retain(|_| {
            let keep = removed.binary_search(&position).is_err();
            position += 1;
            keep
        });

        Ok(ActionResult::EnemiesRemoved { indices: removed })
    }
}
