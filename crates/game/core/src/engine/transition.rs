//! Action transition dispatch and execution logic.

use crate::action::{Action, ActionResult, ActionTransition};
use crate::state::CombatState;

use super::errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

/// Executes a transition through the three-phase pipeline and returns the result.
///
/// Phases:
/// 1. `pre_validate` - Check preconditions before mutation
/// 2. `apply` - Mutate the state and return result
/// 3. `post_validate` - Verify postconditions after mutation
#[inline]
fn drive_transition<T>(
    transition: &T,
    state: &mut CombatState,
) -> Result<ActionResult, TransitionPhaseError<T::Error>>
where
    T: ActionTransition,
{
    transition
        .pre_validate(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PreValidate, error))?;

    let result = transition
        .apply(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::Apply, error))?;

    transition
        .post_validate(state)
        .map_err(|error| TransitionPhaseError::new(TransitionPhase::PostValidate, error))?;

    Ok(result)
}

/// Routes each action to its transition.
pub(super) fn execute_transition(
    action: &Action,
    state: &mut CombatState,
) -> Result<ActionResult, ExecuteError> {
    match action {
        Action::ChangeSpell(transition) => {
            drive_transition(transition, state).map_err(ExecuteError::ChangeSpell)
        }
        Action::CastSpell(transition) => {
            drive_transition(transition, state).map_err(ExecuteError::CastSpell)
        }
        Action::EnemyAction(transition) => {
            drive_transition(transition, state).map_err(ExecuteError::EnemyAction)
        }
        Action::EndTurn(transition) => {
            drive_transition(transition, state).map_err(ExecuteError::EndTurn)
        }
        Action::StartTurn(transition) => {
            drive_transition(transition, state).map_err(ExecuteError::StartTurn)
        }
        Action::EnemiesDied(transition) => {
            drive_transition(transition, state).map_err(ExecuteError::EnemiesDied)
        }
    }
}
