//! State construction and lookup errors.

use crate::error::{ErrorSeverity, GameError};

/// Errors raised while building or reading a [`CombatState`](super::CombatState).
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StateError {
    /// The encounter was started without any spell.
    #[error("spell loadout must contain at least one spell")]
    EmptySpellLoadout,

    /// The encounter was started without any spell slot.
    #[error("spell slot cycle must contain at least one slot")]
    EmptySpellSlots,

    /// A slot multiplier is zero, negative, or not a number.
    #[error("spell slot {index} has invalid power {power}")]
    InvalidSlotPower { index: usize, power: f64 },

    #[error("spell index {index} is out of bounds (spells: {len})")]
    SpellIndexOutOfBounds { index: usize, len: usize },

    #[error("spell slot index {index} is out of bounds (slots: {len})")]
    SlotIndexOutOfBounds { index: usize, len: usize },
}

impl GameError for StateError {
    fn severity(&self) -> ErrorSeverity {
        use StateError::*;
        match self {
            // A malformed encounter cannot be played at all
            EmptySpellLoadout | EmptySpellSlots | InvalidSlotPower { .. } => ErrorSeverity::Fatal,

            // Indices are validated on every transition, so reaching these is a bug
            SpellIndexOutOfBounds { .. } | SlotIndexOutOfBounds { .. } => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        use StateError::*;
        match self {
            EmptySpellLoadout => "STATE_EMPTY_SPELL_LOADOUT",
            EmptySpellSlots => "STATE_EMPTY_SPELL_SLOTS",
            InvalidSlotPower { .. } => "STATE_INVALID_SLOT_POWER",
            SpellIndexOutOfBounds { .. } => "STATE_SPELL_INDEX_OUT_OF_BOUNDS",
            SlotIndexOutOfBounds { .. } => "STATE_SLOT_INDEX_OUT_OF_BOUNDS",
        }
    }
}
