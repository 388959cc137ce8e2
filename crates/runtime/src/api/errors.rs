//! Unified error types surfaced by the runtime API.
//!
//! Wraps failures from worker coordination, the transition engine, and the
//! variant registry so clients can bubble them up with consistent context.
use thiserror::Error;
use tokio::sync::oneshot;

use game_core::{ErrorSeverity, ExecuteError, GameError, VariantError};

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// A turn (or spell change) is already being resolved.
    #[error("a turn is already in flight")]
    ConcurrentTurnViolation,

    /// The encounter reached victory; no further turns are accepted.
    #[error("encounter is over")]
    EncounterOver,

    #[error("state store command channel closed")]
    CommandChannelClosed,

    #[error("state store reply channel closed")]
    ReplyChannelClosed(#[source] oneshot::error::RecvError),

    #[error("state store worker join failed")]
    WorkerJoin(#[source] tokio::task::JoinError),

    #[error("death animation task failed")]
    AnimationJoin(#[source] tokio::task::JoinError),

    #[error(transparent)]
    Execute(#[from] ExecuteError),

    #[error(transparent)]
    Variant(#[from] VariantError),

    #[error(transparent)]
    Content(#[from] anyhow::Error),
}

impl RuntimeError {
    /// Severity of the underlying failure, delegating to core errors.
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            RuntimeError::ConcurrentTurnViolation => ErrorSeverity::Recoverable,
            RuntimeError::EncounterOver => ErrorSeverity::Validation,
            RuntimeError::Execute(e) => e.severity(),
            RuntimeError::Variant(e) => e.severity(),
            RuntimeError::CommandChannelClosed
            | RuntimeError::ReplyChannelClosed(_)
            | RuntimeError::WorkerJoin(_)
            | RuntimeError::AnimationJoin(_) => ErrorSeverity::Internal,
            RuntimeError::Content(_) => ErrorSeverity::Fatal,
        }
    }
}
