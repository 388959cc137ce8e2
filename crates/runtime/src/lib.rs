//! Runtime orchestration for the spell-combat rules engine.
//!
//! This crate wires together the state store, the turn orchestrator, and the
//! animation boundary into a cohesive runtime API. Consumers embed [`Runtime`]
//! to play turns, subscribe to events, and read snapshots through
//! [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the facade and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides topic-based event bus for flexible event routing
//! - [`orchestrator`] sequences the phases of a turn
//! - `workers` keeps background tasks internal to the crate
pub mod api;
pub mod events;
pub mod orchestrator;
pub mod runtime;

mod workers;

pub use api::{Animator, DelayAnimator, NoopAnimator, Result, RuntimeError, RuntimeHandle};
pub use events::{CombatEvent, Event, EventBus, Topic, TurnEvent};
pub use orchestrator::{Orchestrator, TurnOutcome, TurnPhase, TurnReport};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
