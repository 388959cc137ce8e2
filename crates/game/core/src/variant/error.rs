//! Variant lookup and effect computation errors.

use crate::action::ActionError;
use crate::error::{ErrorSeverity, GameError};
use crate::state::StateError;

/// Which family of variants a lookup targeted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VariantKind {
    Spell,
    Enemy,
}

#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum VariantError {
    /// A name has no registry entry. The encounter cannot proceed.
    #[error("unknown {kind} variant '{name}'")]
    UnknownVariant { kind: VariantKind, name: String },

    /// Two variants were registered under the same name.
    #[error("{kind} variant '{name}' is registered twice")]
    DuplicateVariant { kind: VariantKind, name: String },

    /// A spell was cast without any target.
    #[error("target selection is empty")]
    EmptyTargetSelection,

    #[error("invalid target: {0}")]
    InvalidTarget(#[from] ActionError),

    #[error(transparent)]
    State(#[from] StateError),
}

impl VariantError {
    pub fn unknown(kind: VariantKind, name: impl Into<String>) -> Self {
        Self::UnknownVariant {
            kind,
            name: name.into(),
        }
    }
}

impl GameError for VariantError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            VariantError::UnknownVariant { .. } | VariantError::DuplicateVariant { .. } => {
                ErrorSeverity::Fatal
            }
            VariantError::EmptyTargetSelection => ErrorSeverity::Validation,
            VariantError::InvalidTarget(error) => error.severity(),
            VariantError::State(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            VariantError::UnknownVariant { .. } => "VARIANT_UNKNOWN",
            VariantError::DuplicateVariant { .. } => "VARIANT_DUPLICATE",
            VariantError::EmptyTargetSelection => "VARIANT_EMPTY_TARGET_SELECTION",
            VariantError::InvalidTarget(error) => error.error_code(),
            VariantError::State(error) => error.error_code(),
        }
    }
}
