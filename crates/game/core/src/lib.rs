//! Deterministic combat rules shared by the runtime and content crates.
//!
//! `game-core` defines the canonical rules (actions, effects, engine, combat
//! state) and the variant traits spells and enemies implement. All state
//! mutation flows through [`engine::reduce`]; nothing in this crate performs
//! I/O, spawns tasks or logs.
pub mod action;
pub mod config;
pub mod engine;
pub mod error;
pub mod state;
pub mod variant;

pub use action::{
    Action, ActionError, ActionResult, ActionTransition, AppliedEffect, Effect, EffectTarget,
    IndexKind, Mutation,
};
pub use config::CombatConfig;
pub use engine::{
    CombatEngine, ExecuteError, ExecutionOutcome, StateTransition, TransitionPhase,
    TransitionPhaseError, reduce,
};
pub use error::{ErrorSeverity, GameError};
pub use state::{
    Affliction, AfflictionKind, Afflictions, CombatState, EnemyState, SpellSlotState, SpellState,
    StateError, scale_power,
};
pub use variant::{
    AnimationCue, EnemyVariant, SpellVariant, TargetSelection, VariantError, VariantKind,
    VariantRegistry,
};
