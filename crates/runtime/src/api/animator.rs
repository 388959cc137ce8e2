//! Presentation boundary for animation cues.
//!
//! The runtime awaits an [`Animator`] between turn steps. Animators receive
//! only the [`AnimationCue`]; they have no access to combat state, and a turn's
//! outcome is already computed when a cue is requested.

use std::time::Duration;

use async_trait::async_trait;
use game_core::AnimationCue;

/// Plays animation cues. Resolves when playback ends.
#[async_trait]
pub trait Animator: Send + Sync {
    async fn play(&self, cue: AnimationCue);
}

/// Animator that completes immediately. Used for headless play and tests.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopAnimator;

#[async_trait]
impl Animator for NoopAnimator {
    async fn play(&self, _cue: AnimationCue) {}
}

/// Animator that holds every cue for a fixed duration.
#[derive(Clone, Copy, Debug)]
pub struct DelayAnimator {
    duration: Duration,
}

impl DelayAnimator {
    pub fn new(duration: Duration) -> Self {
        Self { duration }
    }
}

#[async_trait]
impl Animator for DelayAnimator {
    async fn play(&self, cue: AnimationCue) {
        tracing::trace!(target: "runtime::orchestrator", ?cue, "Playing cue");
        tokio::time::sleep(self.duration).await;
    }
}
