//! The transition engine: the only place combat state changes.
//!
//! [`reduce`] is a pure function from `(snapshot, action)` to a new snapshot.
//! It stages the action on a deep copy and only hands the copy back when every
//! pipeline phase succeeded, so the input snapshot is never touched and a
//! failed action never produces a half-applied state.
//!
//! [`CombatEngine`] runs the same pipeline directly against a mutable state
//! for callers that manage staging themselves.

mod errors;
mod transition;

pub use errors::{ExecuteError, TransitionPhase, TransitionPhaseError};

use crate::action::{Action, ActionResult};
use crate::state::CombatState;

/// Complete outcome of action execution.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExecutionOutcome {
    /// Action-specific execution result (applied effects, removed indices, ...).
    pub action_result: ActionResult,
}

/// A committed transition: the new snapshot and what produced it.
#[derive(Clone, Debug, PartialEq)]
pub struct StateTransition {
    pub state: CombatState,
    pub outcome: ExecutionOutcome,
}

/// Applies `action` to a copy of `state` and returns the new snapshot.
///
/// Depends on nothing but its two inputs: identical inputs always produce
/// identical outputs.
pub fn reduce(state: &CombatState, action: &Action) -> Result<StateTransition, ExecuteError> {
    let mut working_state = state.clone();
    let outcome = CombatEngine::new(&mut working_state).execute(action)?;
    Ok(StateTransition {
        state: working_state,
        outcome,
    })
}

/// Engine that routes actions through the three-phase pipeline:
/// pre_validate → apply → post_validate
pub struct CombatEngine<'a> {
    state: &'a mut CombatState,
}

impl<'a> CombatEngine<'a> {
    /// Creates a new engine over the given state.
    pub fn new(state: &'a mut CombatState) -> Self {
        Self { state }
    }

    /// Executes an action in place.
    ///
    /// Transitions validate before they mutate, but this method does not stage
    /// a copy; use [`reduce`] when the caller keeps older snapshots around.
    pub fn execute(&mut self, action: &Action) -> Result<ExecutionOutcome, ExecuteError> {
        let action_result = transition::execute_transition(action, self.state)?;
        Ok(ExecutionOutcome { action_result })
    }

    pub fn state(&self) -> &CombatState {
        self.state
    }
}
