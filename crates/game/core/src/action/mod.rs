//! Action domain - the closed vocabulary of state transitions.
//!
//! Every change to [`CombatState`] is expressed as an [`Action`]. Spell and
//! enemy behavior is pre-computed by the variant registry into a [`Mutation`]
//! of declarative [`Effect`]s, so the actions themselves carry data only.
//!
//! # Module Structure
//!
//! - `effect`: Effect descriptors and their interpretation
//! - `error`: Action error types
//! - `kinds`: One transition type per action

pub mod effect;
pub mod error;
pub mod kinds;

pub use effect::{AppliedEffect, Effect, EffectTarget, Mutation};
pub use error::{ActionError, IndexKind};
pub use kinds::{
    CastSpellAction, ChangeSpellAction, EndTurnAction, EnemiesDiedAction, EnemyAction,
    StartTurnAction,
};

use crate::state::CombatState;

/// Defines how a concrete action variant mutates combat state.
///
/// Transitions see nothing but the state and their own payload. Implementors
/// can override the validation hooks to surface pre- and post-conditions that
/// must hold around the mutation.
pub trait ActionTransition {
    type Error;

    /// Validates pre-conditions using the state **before** mutation.
    fn pre_validate(&self, _state: &CombatState) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Applies the action by mutating the state directly. Implementations may
    /// assume that `pre_validate` has already run successfully.
    fn apply(&self, state: &mut CombatState) -> Result<ActionResult, Self::Error>;

    /// Validates post-conditions using the state **after** mutation.
    fn post_validate(&self, _state: &CombatState) -> Result<(), Self::Error> {
        Ok(())
    }
}

/// Top-level action enum dispatched into the engine.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Action {
    ChangeSpell(ChangeSpellAction),
    CastSpell(CastSpellAction),
    EnemyAction(EnemyAction),
    EndTurn(EndTurnAction),
    StartTurn(StartTurnAction),
    EnemiesDied(EnemiesDiedAction),
}

impl Action {
    pub fn change_spell(spell: usize) -> Self {
        Self::ChangeSpell(ChangeSpellAction::new(spell))
    }

    pub fn cast_spell(mutation: Mutation) -> Self {
        Self::CastSpell(CastSpellAction::new(mutation))
    }

    pub fn enemy_action(mutation: Mutation) -> Self {
        Self::EnemyAction(EnemyAction::new(mutation))
    }

    pub fn end_turn() -> Self {
        Self::EndTurn(EndTurnAction)
    }

    pub fn start_turn() -> Self {
        Self::StartTurn(StartTurnAction)
    }

    pub fn enemies_died(indices: Vec<usize>) -> Self {
        Self::EnemiesDied(EnemiesDiedAction::new(indices))
    }

    /// Returns the snake_case name of the action.
    ///
    /// Used for logging and event labels.
    pub fn as_snake_case(&self) -> &'static str {
        match self {
            Action::ChangeSpell(_) => "change_spell",
            Action::CastSpell(_) => "cast_spell",
            Action::EnemyAction(_) => "enemy_action",
            Action::EndTurn(_) => "end_turn",
            Action::StartTurn(_) => "start_turn",
            Action::EnemiesDied(_) => "enemies_died",
        }
    }
}

/// What a committed action did.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionResult {
    SpellChanged { previous: usize, current: usize },
    Effects(Vec<AppliedEffect>),
    TurnEnded,
    TurnStarted { slot: usize },
    /// Sorted, de-duplicated indices that were removed.
    EnemiesRemoved { indices: Vec<usize> },
}
