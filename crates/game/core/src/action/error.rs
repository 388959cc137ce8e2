//! Errors raised while validating or applying actions.

use crate::error::{ErrorSeverity, GameError};

/// Which collection an out-of-range index referred to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum IndexKind {
    Enemy,
    Spell,
}

/// Errors produced by the action transitions.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ActionError {
    /// An index does not address an element of the current snapshot.
    ///
    /// Enemy indices go stale whenever dead enemies are removed, so this is the
    /// usual symptom of holding an index across a removal.
    #[error("{kind} index {index} is out of bounds (len: {len})")]
    InvalidIndex {
        kind: IndexKind,
        index: usize,
        len: usize,
    },

    /// The slot cycle is empty, so the turn cannot advance.
    #[error("spell slot cycle is empty")]
    NoSpellSlots,
}

impl ActionError {
    pub fn invalid_enemy(index: usize, len: usize) -> Self {
        Self::InvalidIndex {
            kind: IndexKind::Enemy,
            index,
            len,
        }
    }

    pub fn invalid_spell(index: usize, len: usize) -> Self {
        Self::InvalidIndex {
            kind: IndexKind::Spell,
            index,
            len,
        }
    }
}

impl GameError for ActionError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ActionError::InvalidIndex { .. } => ErrorSeverity::Validation,
            ActionError::NoSpellSlots => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ActionError::InvalidIndex { kind, .. } => match kind {
                IndexKind::Enemy => "ACTION_INVALID_ENEMY_INDEX",
                IndexKind::Spell => "ACTION_INVALID_SPELL_INDEX",
            },
            ActionError::NoSpellSlots => "ACTION_NO_SPELL_SLOTS",
        }
    }
}
