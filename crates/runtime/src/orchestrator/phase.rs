//! Turn phase machine and the in-flight guard.

use std::sync::{Mutex, MutexGuard, PoisonError};

use serde::{Deserialize, Serialize};

use crate::api::{Result, RuntimeError};

/// Where the orchestrator currently is within a turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Waiting for player input.
    Idle,
    /// A spell change is being committed.
    SelectingSpell,
    EndingPlayerPhase,
    Casting,
    DeathDetection,
    DeathAnimation,
    Removal,
    Retaliation,
    TurnAdvance,
    /// Terminal. The roster is empty.
    Victory,
}

impl TurnPhase {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::SelectingSpell => "selecting_spell",
            Self::EndingPlayerPhase => "ending_player_phase",
            Self::Casting => "casting",
            Self::DeathDetection => "death_detection",
            Self::DeathAnimation => "death_animation",
            Self::Removal => "removal",
            Self::Retaliation => "retaliation",
            Self::TurnAdvance => "turn_advance",
            Self::Victory => "victory",
        }
    }

    pub const fn is_in_flight(&self) -> bool {
        !matches!(self, Self::Idle | Self::Victory)
    }
}

/// Shared phase cell of one encounter.
#[derive(Debug)]
pub(crate) struct PhaseCell {
    phase: Mutex<TurnPhase>,
}

impl PhaseCell {
    pub(crate) fn new() -> Self {
        Self {
            phase: Mutex::new(TurnPhase::Idle),
        }
    }

    fn lock(&self) -> MutexGuard<'_, TurnPhase> {
        // A poisoned lock still holds a valid phase.
        self.phase.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub(crate) fn current(&self) -> TurnPhase {
        *self.lock()
    }

    /// Claims the encounter for one unit of work starting in `first`.
    ///
    /// Fails without waiting if another unit is in flight or the encounter
    /// has ended.
    pub(crate) fn begin(&self, first: TurnPhase) -> Result<TurnGuard<'_>> {
        let mut phase = self.lock();
        match *phase {
            TurnPhase::Idle => {
                *phase = first;
                Ok(TurnGuard {
                    cell: self,
                    finished: false,
                })
            }
            TurnPhase::Victory => Err(RuntimeError::EncounterOver),
            _ => Err(RuntimeError::ConcurrentTurnViolation),
        }
    }
}

/// Holds the phase cell while a turn is in flight.
///
/// Dropping the guard returns the encounter to [`TurnPhase::Idle`], including
/// when a step fails or the turn future is dropped.
#[derive(Debug)]
pub(crate) struct TurnGuard<'a> {
    cell: &'a PhaseCell,
    finished: bool,
}

impl TurnGuard<'_> {
    pub(crate) fn enter(&self, next: TurnPhase) {
        *self.cell.lock() = next;
    }

    /// Moves to [`TurnPhase::Victory`] and keeps it after the guard is gone.
    pub(crate) fn finish_victory(mut self) {
        self.enter(TurnPhase::Victory);
        self.finished = true;
    }
}

impl Drop for TurnGuard<'_> {
    fn drop(&mut self) {
        if !self.finished {
            *self.cell.lock() = TurnPhase::Idle;
        }
    }
}
