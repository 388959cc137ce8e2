//! State store worker that owns the authoritative [`CombatState`].
//!
//! Receives commands from [`RuntimeHandle`](crate::RuntimeHandle), runs every
//! action through [`game_core::reduce`], and publishes the resulting snapshot.
//! Snapshots are shared as `Arc<CombatState>` and never mutated after
//! publication; a rejected action leaves the current snapshot in place.
//!
//! While a turn is in flight only the orchestrator may dispatch. Other
//! dispatches are refused with [`RuntimeError::ConcurrentTurnViolation`].

use std::sync::Arc;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, warn};

use game_core::{Action, CombatState, ExecuteError, StateTransition, reduce};

use crate::api::{Result, RuntimeError};
use crate::events::{CombatEvent, EventBus};
use crate::orchestrator::PhaseCell;

/// Who sent a dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatchOrigin {
    /// The orchestrator, on behalf of the turn it owns.
    Orchestrator,
    /// Any caller of the public [`RuntimeHandle::dispatch`](crate::RuntimeHandle::dispatch).
    External,
}

/// Commands that can be sent to the store worker
pub enum Command {
    /// Reduce an action against the current snapshot and commit the result.
    Dispatch {
        action: Action,
        origin: DispatchOrigin,
        reply: oneshot::Sender<Result<Arc<CombatState>>>,
    },
    /// Query the current snapshot (read-only).
    QueryState {
        reply: oneshot::Sender<Arc<CombatState>>,
    },
}

/// Background task that serializes all state transitions.
pub struct StoreWorker {
    state: Arc<CombatState>,
    command_rx: mpsc::Receiver<Command>,
    event_bus: EventBus,
    phase: Arc<PhaseCell>,
}

impl StoreWorker {
    pub(crate) fn new(
        state: CombatState,
        command_rx: mpsc::Receiver<Command>,
        event_bus: EventBus,
        phase: Arc<PhaseCell>,
    ) -> Self {
        tracing::info!(
            target: "runtime::store",
            enemies = state.enemies.len(),
            spells = state.spells.len(),
            slots = state.spell_slots.len(),
            "StoreWorker initialized"
        );

        Self {
            state: Arc::new(state),
            command_rx,
            event_bus,
            phase,
        }
    }

    /// Main worker loop. Ends once every handle is dropped.
    pub async fn run(mut self) {
        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd);
        }
        debug!(target: "runtime::store", "Command channel closed, StoreWorker stopping");
    }

    fn handle_command(&mut self, cmd: Command) {
        match cmd {
            Command::Dispatch {
                action,
                origin,
                reply,
            } => {
                let result = self
                    .admit(origin, &action)
                    .and_then(|()| self.dispatch(action).map_err(Into::into));
                if reply.send(result).is_err() {
                    debug!(target: "runtime::store", "Dispatch reply channel closed (caller dropped)");
                }
            }
            Command::QueryState { reply } => {
                if reply.send(Arc::clone(&self.state)).is_err() {
                    debug!(target: "runtime::store", "QueryState reply channel closed (caller dropped)");
                }
            }
        }
    }

    /// Refuses outside dispatches while a turn owns the snapshot.
    fn admit(&self, origin: DispatchOrigin, action: &Action) -> Result<()> {
        let phase = self.phase.current();
        if origin == DispatchOrigin::External && phase.is_in_flight() {
            warn!(
                target: "runtime::store",
                action = action.as_snake_case(),
                phase = phase.as_str(),
                "External dispatch refused while a turn is in flight"
            );
            return Err(RuntimeError::ConcurrentTurnViolation);
        }
        Ok(())
    }

    /// Stages `action` on a copy of the snapshot and commits it on success.
    fn dispatch(&mut self, action: Action) -> std::result::Result<Arc<CombatState>, ExecuteError> {
        match reduce(&self.state, &action) {
            Ok(StateTransition { state, outcome }) => {
                debug!(
                    target: "runtime::store",
                    action = action.as_snake_case(),
                    result = ?outcome.action_result,
                    "Action committed"
                );

                self.state = Arc::new(state);
                self.event_bus
                    .publish(CombatEvent::ActionApplied { action, outcome });
                Ok(Arc::clone(&self.state))
            }
            Err(error) => {
                warn!(
                    target: "runtime::store",
                    action = action.as_snake_case(),
                    phase = error.phase().as_str(),
                    %error,
                    "Action rejected"
                );

                self.event_bus.publish(CombatEvent::ActionRejected {
                    action,
                    phase: error.phase(),
                    error: error.to_string(),
                });
                Err(error)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{Event, Topic};
    use crate::orchestrator::TurnPhase;
    use game_core::{EnemyState, SpellSlotState, SpellState};

    fn worker() -> (StoreWorker, EventBus, Arc<PhaseCell>) {
        let state = CombatState::new(
            100,
            vec![EnemyState::new("Goblin", 10)],
            vec![SpellState::new("Fireball", 10)],
            vec![SpellSlotState::new(1.0), SpellSlotState::new(1.5)],
        )
        .unwrap();
        let bus = EventBus::new();
        let phase = Arc::new(PhaseCell::new());
        let (_tx, rx) = mpsc::channel(1);
        let worker = StoreWorker::new(state, rx, bus.clone(), Arc::clone(&phase));
        (worker, bus, phase)
    }

    fn send(
        worker: &mut StoreWorker,
        action: Action,
        origin: DispatchOrigin,
    ) -> oneshot::Receiver<Result<Arc<CombatState>>> {
        let (reply, rx) = oneshot::channel();
        worker.handle_command(Command::Dispatch {
            action,
            origin,
            reply,
        });
        rx
    }

    #[tokio::test]
    async fn committed_action_replaces_snapshot() {
        let (mut worker, bus, _phase) = worker();
        let mut rx = bus.subscribe(Topic::Combat);
        let before = Arc::clone(&worker.state);

        let after = worker.dispatch(Action::start_turn()).unwrap();

        assert_eq!(after.current_slot, 1);
        assert_eq!(before.current_slot, 0);
        assert!(matches!(
            rx.recv().await.unwrap(),
            Event::Combat(CombatEvent::ActionApplied { .. })
        ));
    }

    #[tokio::test]
    async fn rejected_action_keeps_snapshot() {
        let (mut worker, bus, _phase) = worker();
        let mut rx = bus.subscribe(Topic::Combat);
        let before = Arc::clone(&worker.state);

        let result = worker.dispatch(Action::change_spell(7));

        assert!(result.is_err());
        assert!(Arc::ptr_eq(&before, &worker.state));
        assert!(matches!(
            rx.recv().await.unwrap(),
            Event::Combat(CombatEvent::ActionRejected { .. })
        ));
    }

    #[tokio::test]
    async fn external_dispatch_is_refused_mid_turn() {
        let (mut worker, _bus, phase) = worker();
        let guard = phase.begin(TurnPhase::EndingPlayerPhase).unwrap();
        guard.enter(TurnPhase::DeathAnimation);
        let before = Arc::clone(&worker.state);

        let refused = send(&mut worker, Action::start_turn(), DispatchOrigin::External);
        assert!(matches!(
            refused.await.unwrap(),
            Err(RuntimeError::ConcurrentTurnViolation)
        ));
        assert!(Arc::ptr_eq(&before, &worker.state));

        let committed = send(&mut worker, Action::start_turn(), DispatchOrigin::Orchestrator);
        assert_eq!(committed.await.unwrap().unwrap().current_slot, 1);
    }

    #[tokio::test]
    async fn external_dispatch_is_accepted_between_turns() {
        let (mut worker, _bus, phase) = worker();
        drop(phase.begin(TurnPhase::EndingPlayerPhase).unwrap());

        let committed = send(&mut worker, Action::start_turn(), DispatchOrigin::External);

        assert_eq!(committed.await.unwrap().unwrap().current_slot, 1);
    }
}
