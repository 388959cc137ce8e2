//! Event types for different topics.

use game_core::{Action, ExecutionOutcome, TransitionPhase};
use serde::{Deserialize, Serialize};

use crate::orchestrator::TurnPhase;

/// Events related to state transitions
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CombatEvent {
    /// The store committed an action and published a new snapshot.
    ActionApplied {
        action: Action,
        outcome: ExecutionOutcome,
    },

    /// The reducer rejected an action; the snapshot is unchanged.
    ActionRejected {
        action: Action,
        phase: TransitionPhase,
        error: String,
    },
}

/// Events related to turn sequencing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum TurnEvent {
    PhaseEntered { phase: TurnPhase },
    /// Enemies removed after their death animations, as pre-removal indices.
    EnemiesDied { indices: Vec<usize> },
    /// The roster is empty. No further turns follow.
    Victory,
    /// Retaliation finished and the next player turn started.
    TurnCompleted { slot: usize },
}
