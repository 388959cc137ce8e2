//! Error types for action execution pipeline.

use crate::action::{
    ActionError, ActionTransition, CastSpellAction, ChangeSpellAction, EndTurnAction,
    EnemiesDiedAction, EnemyAction, StartTurnAction,
};
use crate::error::{ErrorSeverity, GameError};

/// Identifies which stage of the transition pipeline produced an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TransitionPhase {
    PreValidate,
    Apply,
    PostValidate,
}

impl TransitionPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            TransitionPhase::PreValidate => "pre_validate",
            TransitionPhase::Apply => "apply",
            TransitionPhase::PostValidate => "post_validate",
        }
    }
}

/// Associates a transition phase with the underlying error.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionPhaseError<E> {
    pub phase: TransitionPhase,
    pub error: E,
}

impl<E> TransitionPhaseError<E> {
    pub fn new(phase: TransitionPhase, error: E) -> Self {
        Self { phase, error }
    }
}

impl<E: std::fmt::Display> std::fmt::Display for TransitionPhaseError<E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} failed: {}", self.phase.as_str(), self.error)
    }
}

impl<E: std::fmt::Display + std::fmt::Debug> std::error::Error for TransitionPhaseError<E> {}

/// Errors surfaced while executing an action through the engine.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ExecuteError {
    #[error("change spell action failed: {0}")]
    ChangeSpell(TransitionPhaseError<<ChangeSpellAction as ActionTransition>::Error>),

    #[error("cast spell action failed: {0}")]
    CastSpell(TransitionPhaseError<<CastSpellAction as ActionTransition>::Error>),

    #[error("enemy action failed: {0}")]
    EnemyAction(TransitionPhaseError<<EnemyAction as ActionTransition>::Error>),

    #[error("end turn action failed: {0}")]
    EndTurn(TransitionPhaseError<<EndTurnAction as ActionTransition>::Error>),

    #[error("start turn action failed: {0}")]
    StartTurn(TransitionPhaseError<<StartTurnAction as ActionTransition>::Error>),

    #[error("enemies died action failed: {0}")]
    EnemiesDied(TransitionPhaseError<<EnemiesDiedAction as ActionTransition>::Error>),
}

impl ExecuteError {
    /// Pipeline phase that rejected the action.
    pub fn phase(&self) -> TransitionPhase {
        match self {
            ExecuteError::ChangeSpell(e)
            | ExecuteError::CastSpell(e)
            | ExecuteError::EnemyAction(e)
            | ExecuteError::StartTurn(e)
            | ExecuteError::EnemiesDied(e) => e.phase,
            ExecuteError::EndTurn(e) => match e.error {},
        }
    }

    /// Underlying action error, if the failing transition can produce one.
    pub fn action_error(&self) -> &ActionError {
        match self {
            ExecuteError::ChangeSpell(e)
            | ExecuteError::CastSpell(e)
            | ExecuteError::EnemyAction(e)
            | ExecuteError::StartTurn(e)
            | ExecuteError::EnemiesDied(e) => &e.error,
            ExecuteError::EndTurn(e) => match e.error {},
        }
    }
}

impl GameError for ExecuteError {
    fn severity(&self) -> ErrorSeverity {
        self.action_error().severity()
    }

    fn error_code(&self) -> &'static str {
        self.action_error().error_code()
    }
}
