//! Turn orchestrator.
//!
//! Sequences one player turn as a fixed series of phases:
//!
//! 1. `EndingPlayerPhase` - compute the spell's mutation, then dispatch `EndTurn`
//! 2. `Casting` - await the spell's cue, dispatch `CastSpell`
//! 3. `DeathDetection` - collect enemies at or below zero health
//! 4. `DeathAnimation` - play every death cue concurrently and join them
//! 5. `Removal` - dispatch `EnemiesDied`
//! 6. `Retaliation` (or `Victory` when the roster is empty) - each enemy acts in
//!    roster order against the latest snapshot
//! 7. `TurnAdvance` - dispatch `StartTurn`
//!
//! All state changes go through the store worker. Animations only ever see
//! an [`AnimationCue`].

mod phase;

pub(crate) use phase::PhaseCell;
pub use phase::TurnPhase;

use std::sync::Arc;

use tokio::task::JoinSet;
use tracing::{debug, error, info};

use game_core::{
    Action, ActionError, AnimationCue, CombatState, TargetSelection, VariantError, VariantRegistry,
};

use crate::api::{Animator, Result, RuntimeError, RuntimeHandle};
use crate::events::TurnEvent;
use phase::TurnGuard;

/// How a turn ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Enemies retaliated and the next player turn has started.
    Continue,
    /// The roster is empty. No retaliation or turn advance happened.
    Victory,
}

/// Summary of one resolved turn.
#[derive(Clone, Debug)]
pub struct TurnReport {
    pub outcome: TurnOutcome,
    /// Roster indices (pre-removal) of enemies killed by the cast.
    pub deaths: Vec<usize>,
    /// Snapshot committed by the turn's last action.
    pub snapshot: Arc<CombatState>,
}

/// Drives turns for one encounter.
pub struct Orchestrator {
    handle: RuntimeHandle,
    registry: Arc<VariantRegistry>,
    animator: Arc<dyn Animator>,
    phase: Arc<PhaseCell>,
}

impl Orchestrator {
    pub(crate) fn new(
        handle: RuntimeHandle,
        registry: Arc<VariantRegistry>,
        animator: Arc<dyn Animator>,
        phase: Arc<PhaseCell>,
    ) -> Self {
        Self {
            handle,
            registry,
            animator,
            phase,
        }
    }

    /// Current phase of the encounter.
    pub fn phase(&self) -> TurnPhase {
        self.phase.current()
    }

    /// Plays one full turn: the current spell is cast at `target`, then the
    /// dead are animated and removed, then surviving enemies retaliate.
    ///
    /// Returns [`RuntimeError::ConcurrentTurnViolation`] while another turn is
    /// in flight and [`RuntimeError::EncounterOver`] after victory. If a step
    /// fails, the turn stops there and the last committed snapshot stands.
    pub async fn play_turn(&self, target: TargetSelection) -> Result<TurnReport> {
        let guard = self.phase.begin(TurnPhase::EndingPlayerPhase)?;
        info!(target: "runtime::orchestrator", targets = ?target.indices(), "Turn started");

        match self.run_turn(guard, &target).await {
            Ok(report) => Ok(report),
            Err(e) => {
                error!(target: "runtime::orchestrator", error = %e, "Turn aborted");
                Err(e)
            }
        }
    }

    async fn run_turn(&self, guard: TurnGuard<'_>, target: &TargetSelection) -> Result<TurnReport> {
        let bus = self.handle.event_bus();

        self.enter(&guard, TurnPhase::EndingPlayerPhase);
        // A bad target must fail before EndTurn commits.
        let snapshot = self.handle.query_state().await?;
        let spell_state = snapshot.current_spell().map_err(VariantError::from)?;
        let spell = self.registry.spell(&spell_state.name)?;
        let mutation = spell.compute_effect(target, &snapshot)?;
        let snapshot = self.handle.dispatch_in_turn(Action::end_turn()).await?;

        self.enter(&guard, TurnPhase::Casting);
        self.animator
            .play(spell.animation_cue(target, &snapshot))
            .await;
        let snapshot = self.handle.dispatch_in_turn(Action::cast_spell(mutation)).await?;

        self.enter(&guard, TurnPhase::DeathDetection);
        let deaths = snapshot.dead_enemies();

        self.enter(&guard, TurnPhase::DeathAnimation);
        self.play_death_cues(&deaths).await?;

        self.enter(&guard, TurnPhase::Removal);
        let mut snapshot = if deaths.is_empty() {
            snapshot
        } else {
            let snapshot = self
                .handle
                .dispatch_in_turn(Action::enemies_died(deaths.clone()))
                .await?;
            bus.publish(TurnEvent::EnemiesDied {
                indices: deaths.clone(),
            });
            snapshot
        };

        if snapshot.is_victory() {
            guard.finish_victory();
            bus.publish(TurnEvent::PhaseEntered {
                phase: TurnPhase::Victory,
            });
            bus.publish(TurnEvent::Victory);
            info!(target: "runtime::orchestrator", "Victory");
            return Ok(TurnReport {
                outcome: TurnOutcome::Victory,
                deaths,
                snapshot,
            });
        }

        self.enter(&guard, TurnPhase::Retaliation);
        for index in 0..snapshot.enemies.len() {
            snapshot = self.retaliate(index, &snapshot).await?;
        }

        self.enter(&guard, TurnPhase::TurnAdvance);
        let snapshot = self.handle.dispatch_in_turn(Action::start_turn()).await?;
        bus.publish(TurnEvent::TurnCompleted {
            slot: snapshot.current_slot,
        });
        info!(
            target: "runtime::orchestrator",
            player_health = snapshot.player_health,
            enemies = snapshot.enemies.len(),
            slot = snapshot.current_slot,
            "Turn completed"
        );

        Ok(TurnReport {
            outcome: TurnOutcome::Continue,
            deaths,
            snapshot,
        })
    }

    /// One enemy acts against `snapshot`, the latest committed state.
    async fn retaliate(&self, index: usize, snapshot: &CombatState) -> Result<Arc<CombatState>> {
        let name = snapshot
            .enemy(index)
            .map(|enemy| enemy.name.as_str())
            .ok_or_else(|| {
                VariantError::from(ActionError::invalid_enemy(index, snapshot.enemies.len()))
            })?;
        let enemy = self.registry.enemy(name)?;
        let mutation = enemy.act(index, snapshot)?;

        debug!(
            target: "runtime::orchestrator",
            enemy = index,
            enemy_name = name,
            effects = mutation.effects().len(),
            "Enemy acting"
        );
        self.animator
            .play(enemy.animation_cue(index, snapshot))
            .await;
        self.handle.dispatch_in_turn(Action::enemy_action(mutation)).await
    }

    /// Requests one death cue per index, all at once, and waits for every one.
    async fn play_death_cues(&self, deaths: &[usize]) -> Result<()> {
        if deaths.is_empty() {
            return Ok(());
        }
        debug!(target: "runtime::orchestrator", ?deaths, "Playing death animations");

        let mut cues = JoinSet::new();
        for &enemy in deaths {
            let animator = Arc::clone(&self.animator);
            cues.spawn(async move { animator.play(AnimationCue::EnemyDies { enemy }).await });
        }
        while let Some(joined) = cues.join_next().await {
            joined.map_err(RuntimeError::AnimationJoin)?;
        }
        Ok(())
    }

    /// Selects the spell for the next cast. Only allowed between turns.
    pub async fn change_spell(&self, spell: usize) -> Result<Arc<CombatState>> {
        let guard = self.phase.begin(TurnPhase::SelectingSpell)?;
        self.enter(&guard, TurnPhase::SelectingSpell);
        let snapshot = self.handle.dispatch_in_turn(Action::change_spell(spell)).await?;
        drop(guard);

        debug!(target: "runtime::orchestrator", spell, "Spell selected");
        Ok(snapshot)
    }

    /// Preview of the selected spell with nominal and slot-adjusted power.
    pub async fn describe_current_spell(&self) -> Result<String> {
        let snapshot = self.handle.query_state().await?;
        let spell_state = snapshot.current_spell().map_err(VariantError::from)?;
        let spell = self.registry.spell(&spell_state.name)?;
        Ok(spell.describe(&snapshot, spell_state)?)
    }

    fn enter(&self, guard: &TurnGuard<'_>, phase: TurnPhase) {
        guard.enter(phase);
        debug!(target: "runtime::orchestrator", phase = phase.as_str(), "Phase entered");
        self.handle
            .event_bus()
            .publish(TurnEvent::PhaseEntered { phase });
    }
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator")
            .field("phase", &self.phase())
            .field("registry", &self.registry)
            .finish_non_exhaustive()
    }
}
