//! Player-side spell actions.

use crate::action::{ActionError, ActionResult, ActionTransition, Mutation};
use crate::state::CombatState;

/// Selects which spell of the loadout the next cast uses.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChangeSpellAction {
    pub spell: usize,
}

impl ChangeSpellAction {
    pub fn new(spell: usize) -> Self {
        Self { spell }
    }
}

impl ActionTransition for ChangeSpellAction {
    type Error = ActionError;

    fn pre_validate(&self, state: &CombatState) -> Result<(), Self::Error> {
        if self.spell >= state.spells.len() {
            return Err(ActionError::invalid_spell(self.spell, state.spells.len()));
        }
        Ok(())
    }

    fn apply(&self, state: &mut CombatState) -> Result<ActionResult, Self::Error> {
        let previous = state.current_spell;
        state.current_spell = self.spell;
        Ok(ActionResult::SpellChanged {
            previous,
            current: self.spell,
        })
    }

    fn post_validate(&self, state: &CombatState) -> Result<(), Self::Error> {
        debug_assert!(
            state.current_spell < state.spells.len(),
            "current_spell must address the loadout"
        );
        Ok(())
    }
}

/// Applies the effects computed by a spell variant.
///
/// The engine does not know which spell produced the mutation; the variant
/// registry resolved that before dispatch.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CastSpellAction {
    pub mutation: Mutation,
}

impl CastSpellAction {
    pub fn new(mutation: Mutation) -> Self {
        Self { mutation }
    }
}

impl ActionTransition for CastSpellAction {
    type Error = ActionError;

    fn pre_validate(&self, state: &CombatState) -> Result<(), Self::Error> {
        self.mutation.validate(state)
    }

    fn apply(&self, state: &mut CombatState) -> Result<ActionResult, Self::Error> {
        self.mutation.apply(state).map(ActionResult::Effects)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::action::EffectTarget;
    use crate::state::{EnemyState, SpellSlotState, SpellState};

    fn loadout_state() -> CombatState {
        CombatState::new(
            100,
            vec![EnemyState::new("Goblin", 10)],
            vec![
                SpellState::new("Fireball", 10),
                SpellState::new("Lightning strike", 4),
                SpellState::new("Shadow bolt", 6),
            ],
            vec![SpellSlotState::new(1.0)],
        )
        .unwrap()
    }

    #[test]
    fn change_spell_selects_valid_index() {
        let mut state = loadout_state();
        let action = ChangeSpellAction::new(2);

        action.pre_validate(&state).unwrap();
        let result = action.apply(&mut state).unwrap();

        assert_eq!(state.current_spell, 2);
        assert_eq!(
            result,
            ActionResult::SpellChanged {
                previous: 0,
                current: 2
            }
        );
    }

    #[test]
    fn change_spell_rejects_out_of_range_index() {
        let state = loadout_state();
        let result = ChangeSpellAction::new(3).pre_validate(&state);
        assert_eq!(result, Err(ActionError::invalid_spell(3, 3)));
    }

    #[test]
    fn cast_spell_rejects_stale_enemy_index() {
        let state = loadout_state();
        let action = CastSpellAction::new(Mutation::new().damage(EffectTarget::Enemy(1), 10));
        assert_eq!(
            action.pre_validate(&state),
            Err(ActionError::invalid_enemy(1, 1))
        );
    }
}
