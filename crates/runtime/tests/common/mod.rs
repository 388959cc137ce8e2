#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use game_core::{AnimationCue, CombatConfig, CombatState};
use runtime::{Animator, Runtime};

/// Animator that remembers every cue it was asked to play.
#[derive(Clone, Default)]
pub struct RecordingAnimator {
    cues: Arc<Mutex<Vec<AnimationCue>>>,
}

impl RecordingAnimator {
    pub fn cues(&self) -> Vec<AnimationCue> {
        self.cues.lock().unwrap().clone()
    }
}

#[async_trait]
impl Animator for RecordingAnimator {
    async fn play(&self, cue: AnimationCue) {
        self.cues.lock().unwrap().push(cue);
    }
}

pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// Starting state with the default loadout against built-in enemies.
pub fn encounter(enemies: &[&str]) -> CombatState {
    game_content::builtin_registry()
        .unwrap()
        .build_state(&CombatConfig::default(), enemies)
        .unwrap()
}

pub async fn runtime_with(state: CombatState, animator: impl Animator + 'static) -> Runtime {
    init_tracing();
    Runtime::builder()
        .initial_state(state)
        .animator(animator)
        .build()
        .await
        .unwrap()
}
