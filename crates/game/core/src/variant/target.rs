use crate::action::ActionError;
use crate::state::CombatState;

use super::VariantError;

/// Enemy indices chosen by the player for one cast.
///
/// Single-target spells read [`primary`](Self::primary); spells that hit
/// several enemies walk every index. Indices address the snapshot the turn
/// started from.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetSelection {
    indices: Vec<usize>,
}

impl TargetSelection {
    pub fn single(index: usize) -> Self {
        Self {
            indices: vec![index],
        }
    }

    /// Builds a selection from several indices, dropping repeats while keeping
    /// the first-seen order.
    pub fn many(indices: impl IntoIterator<Item = usize>) -> Self {
        let mut unique = Vec::new();
        for index in indices {
            if !unique.contains(&index) {
                unique.push(index);
            }
        }
        Self { indices: unique }
    }

    pub fn primary(&self) -> Option<usize> {
        self.indices.first().copied()
    }

    pub fn indices(&self) -> &[usize] {
        &self.indices
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Returns the primary index after checking it against `state`.
    pub fn resolve_primary(&self, state: &CombatState) -> Result<usize, VariantError> {
        let index = self.primary().ok_or(VariantError::EmptyTargetSelection)?;
        check_enemy(state, index)?;
        Ok(index)
    }

    /// Checks that the selection is non-empty and every index is in bounds.
    pub fn resolve_all(&self, state: &CombatState) -> Result<&[usize], VariantError> {
        if self.indices.is_empty() {
            return Err(VariantError::EmptyTargetSelection);
        }
        for &index in &self.indices {
            check_enemy(state, index)?;
        }
        Ok(&self.indices)
    }
}

impl From<usize> for TargetSelection {
    fn from(index: usize) -> Self {
        Self::single(index)
    }
}

fn check_enemy(state: &CombatState, index: usize) -> Result<(), VariantError> {
    if index >= state.enemies.len() {
        return Err(ActionError::invalid_enemy(index, state.enemies.len()).into());
    }
    Ok(())
}
