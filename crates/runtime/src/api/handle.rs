//! Cloneable façade for issuing commands to the state store.
//!
//! [`RuntimeHandle`] hides channel plumbing and offers async helpers for
//! dispatching actions, reading snapshots, or streaming events from specific
//! topics.
use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{broadcast, mpsc, oneshot};

use game_core::{Action, CombatState};

use super::errors::{Result, RuntimeError};
use crate::events::{Event, EventBus, Topic};
use crate::workers::{Command, DispatchOrigin};

/// Client-facing handle to interact with the runtime
#[derive(Clone)]
pub struct RuntimeHandle {
    command_tx: mpsc::Sender<Command>,
    event_bus: EventBus,
}

impl RuntimeHandle {
    pub(crate) fn new(command_tx: mpsc::Sender<Command>, event_bus: EventBus) -> Self {
        Self {
            command_tx,
            event_bus,
        }
    }

    /// Dispatch a single action and return the committed snapshot.
    ///
    /// Refused with [`RuntimeError::ConcurrentTurnViolation`] while a turn is
    /// in flight. Between turns the action goes straight to the store.
    pub async fn dispatch(&self, action: Action) -> Result<Arc<CombatState>> {
        self.send_dispatch(action, DispatchOrigin::External).await
    }

    /// Dispatch on behalf of the orchestrator's in-flight turn.
    pub(crate) async fn dispatch_in_turn(&self, action: Action) -> Result<Arc<CombatState>> {
        self.send_dispatch(action, DispatchOrigin::Orchestrator).await
    }

    async fn send_dispatch(
        &self,
        action: Action,
        origin: DispatchOrigin,
    ) -> Result<Arc<CombatState>> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::Dispatch {
                action,
                origin,
                reply: reply_tx,
            })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)?
    }

    /// Query the current snapshot (read-only)
    pub async fn query_state(&self) -> Result<Arc<CombatState>> {
        let (reply_tx, reply_rx) = oneshot::channel();

        self.command_tx
            .send(Command::QueryState { reply: reply_tx })
            .await
            .map_err(|_| RuntimeError::CommandChannelClosed)?;

        reply_rx.await.map_err(RuntimeError::ReplyChannelClosed)
    }

    /// Subscribe to events from a specific topic
    ///
    /// # Topics
    ///
    /// - `Topic::Combat` - Committed and rejected actions
    /// - `Topic::Turn` - Turn phase progress
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use runtime::Topic;
    ///
    /// let mut turn_rx = handle.subscribe(Topic::Turn);
    /// while let Ok(event) = turn_rx.recv().await {
    ///     // Handle turn events
    /// }
    /// ```
    pub fn subscribe(&self, topic: Topic) -> broadcast::Receiver<Event> {
        self.event_bus.subscribe(topic)
    }

    /// Subscribe to multiple topics at once
    pub fn subscribe_multiple(&self, topics: &[Topic]) -> HashMap<Topic, broadcast::Receiver<Event>> {
        self.event_bus.subscribe_multiple(topics)
    }

    /// Get a reference to the event bus for advanced usage
    pub fn event_bus(&self) -> &EventBus {
        &self.event_bus
    }
}
