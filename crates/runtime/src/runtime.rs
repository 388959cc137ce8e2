//! High-level runtime facade.
//!
//! The runtime owns the state store worker, wires up command/event channels,
//! and exposes a builder-based API for clients to drive an encounter.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use game_content::ContentFactory;
use game_core::{CombatState, TargetSelection, VariantRegistry};

use crate::api::{Animator, NoopAnimator, Result, RuntimeError, RuntimeHandle};
use crate::events::EventBus;
use crate::orchestrator::{Orchestrator, PhaseCell, TurnPhase, TurnReport};
use crate::workers::StoreWorker;

/// Runtime configuration shared across the orchestrator and workers.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub event_buffer_size: usize,
    pub command_buffer_size: usize,
    /// Encounter to start when no initial state is provided.
    pub encounter_index: usize,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            event_buffer_size: 100,
            command_buffer_size: 32,
            encounter_index: 0,
        }
    }
}

/// Main runtime that drives one encounter
///
/// Design: Runtime owns the store worker and the turn orchestrator.
/// [`RuntimeHandle`] provides a cloneable façade for clients.
pub struct Runtime {
    handle: RuntimeHandle,
    orchestrator: Orchestrator,
    store_worker_handle: JoinHandle<()>,
}

impl Runtime {
    /// Create a new runtime builder
    pub fn builder() -> RuntimeBuilder {
        RuntimeBuilder::new()
    }

    /// Get a cloneable handle to this runtime
    ///
    /// The handle can be shared across clients and async tasks.
    pub fn handle(&self) -> RuntimeHandle {
        self.handle.clone()
    }

    pub fn orchestrator(&self) -> &Orchestrator {
        &self.orchestrator
    }

    /// Current turn phase.
    pub fn phase(&self) -> TurnPhase {
        self.orchestrator.phase()
    }

    /// Cast the selected spell at `target` and resolve the full turn.
    pub async fn play_turn(&self, target: TargetSelection) -> Result<TurnReport> {
        self.orchestrator.play_turn(target).await
    }

    /// Select the spell for the next cast.
    pub async fn change_spell(&self, spell: usize) -> Result<Arc<CombatState>> {
        self.orchestrator.change_spell(spell).await
    }

    pub async fn describe_current_spell(&self) -> Result<String> {
        self.orchestrator.describe_current_spell().await
    }

    /// Latest committed snapshot.
    pub async fn state(&self) -> Result<Arc<CombatState>> {
        self.handle.query_state().await
    }

    /// Shutdown the runtime gracefully
    ///
    /// Waits for the store worker, so every outstanding handle clone must be
    /// dropped first.
    pub async fn shutdown(self) -> Result<()> {
        let Runtime {
            handle,
            orchestrator,
            store_worker_handle,
        } = self;
        drop(orchestrator);
        drop(handle);

        store_worker_handle
            .await
            .map_err(RuntimeError::WorkerJoin)
    }
}

impl std::fmt::Debug for Runtime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Runtime")
            .field("orchestrator", &self.orchestrator)
            .finish_non_exhaustive()
    }
}

/// Builder for [`Runtime`] with flexible configuration.
pub struct RuntimeBuilder {
    config: RuntimeConfig,
    registry: Option<VariantRegistry>,
    state: Option<CombatState>,
    content: Option<ContentFactory>,
    animator: Option<Arc<dyn Animator>>,
}

impl RuntimeBuilder {
    fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            registry: None,
            state: None,
            content: None,
            animator: None,
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Variant registry (defaults to the built-in spells and enemies)
    pub fn registry(mut self, registry: VariantRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Provide initial combat state
    ///
    /// Takes precedence over [`content`](Self::content).
    pub fn initial_state(mut self, state: CombatState) -> Self {
        self.state = Some(state);
        self
    }

    /// Content source used to build the starting state of
    /// [`RuntimeConfig::encounter_index`] (defaults to built-in content)
    pub fn content(mut self, content: ContentFactory) -> Self {
        self.content = Some(content);
        self
    }

    /// Animation collaborator (defaults to [`NoopAnimator`])
    pub fn animator(mut self, animator: impl Animator + 'static) -> Self {
        self.animator = Some(Arc::new(animator));
        self
    }

    /// Validates every variant name and spawns the store worker.
    ///
    /// Must be called from within a Tokio runtime.
    pub async fn build(self) -> Result<Runtime> {
        let registry = match self.registry {
            Some(registry) => registry,
            None => game_content::builtin_registry()?,
        };

        let state = match self.state {
            Some(state) => state,
            None => self
                .content
                .unwrap_or_else(ContentFactory::builtin)
                .build_encounter(&registry, self.config.encounter_index)?,
        };
        registry.validate(&state)?;

        let event_bus = EventBus::with_capacity(self.config.event_buffer_size);
        let (command_tx, command_rx) = mpsc::channel(self.config.command_buffer_size);

        let phase = Arc::new(PhaseCell::new());
        let worker = StoreWorker::new(state, command_rx, event_bus.clone(), Arc::clone(&phase));
        let store_worker_handle = tokio::spawn(worker.run());

        let handle = RuntimeHandle::new(command_tx, event_bus);
        let animator = self
            .animator
            .unwrap_or_else(|| Arc::new(NoopAnimator) as Arc<dyn Animator>);
        let orchestrator = Orchestrator::new(handle.clone(), Arc::new(registry), animator, phase);

        Ok(Runtime {
            handle,
            orchestrator,
            store_worker_handle,
        })
    }
}
