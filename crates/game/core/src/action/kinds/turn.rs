//! Turn bookkeeping actions.

use crate::action::{ActionError, ActionResult, ActionTransition};
use crate::error::NeverError;
use crate::state::CombatState;

/// Hands control away from the player while the turn resolves.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EndTurnAction;

impl ActionTransition for EndTurnAction {
    type Error = NeverError;

    fn apply(&self, state: &mut CombatState) -> Result<ActionResult, Self::Error> {
        state.player_turn = false;
        Ok(ActionResult::TurnEnded)
    }
}

/// Returns control to the player and advances the spell-slot cycle.
///
/// The slot only moves here, after the whole turn resolved, so the slot a
/// spell was previewed and cast with stays stable for the entire turn.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StartTurnAction;

impl ActionTransition for StartTurnAction {
    type Error = ActionError;

    fn pre_validate(&self, state: &CombatState) -> Result<(), Self::Error> {
        if state.spell_slots.is_empty() {
            return Err(ActionError::NoSpellSlots);
        }
        Ok(())
    }

    fn apply(&self, state: &mut CombatState) -> Result<ActionResult, Self::Error> {
        let slots = state.spell_slots.len();
        state.player_turn = true;
        state.current_slot = (state.current_slot + 1) % slots;
        Ok(ActionResult::TurnStarted {
            slot: state.current_slot,
        })
    }

    fn post_validate(&self, state: &CombatState) -> Result<(), Self::Error> {
        debug_assert!(state.current_slot < state.spell_slots.len());
        debug_assert!(state.player_turn);
        Ok(())
    }
}
