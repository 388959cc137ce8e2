use game_core::{
    CombatState, EffectTarget, Mutation, SpellState, SpellVariant, TargetSelection, VariantError,
};

/// Hits every selected enemy for the slot-adjusted power.
pub struct LightningStrike;

impl LightningStrike {
    pub const NAME: &'static str = "Lightning strike";
    pub const POWER: u32 = 4;
}

impl SpellVariant for LightningStrike {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn starting_state(&self) -> SpellState {
        SpellState::new(Self::NAME, Self::POWER)
    }

    fn describe(&self, state: &CombatState, spell: &SpellState) -> Result<String, VariantError> {
        let effective = state.effective_power(spell.power)?;
        Ok(format!(
            "Deal {} ({}) damage to every selected enemy",
            spell.power, effective
        ))
    }

    fn compute_effect(
        &self,
        target: &TargetSelection,
        state: &CombatState,
    ) -> Result<Mutation, VariantError> {
        let indices = target.resolve_all(state)?;
        let damage = state.effective_power(state.current_spell()?.power)?;

        Ok(indices
            .iter()
            .fold(Mutation::new(), |mutation, &index| {
                mutation.damage(EffectTarget::Enemy(index), damage)
            }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spells::test_support::encounter;
    use game_core::{Action, reduce};

    #[test]
    fn damages_each_selected_enemy_once() {
        let mut state = encounter(3, 1.5);
        state.current_spell = 1;

        let mutation = LightningStrike
            .compute_effect(&TargetSelection::many([2, 0, 2]), &state)
            .unwrap();
        let next = reduce(&state, &Action::cast_spell(mutation)).unwrap().state;

        let health: Vec<i32> = next.enemies.iter().map(|e| e.health).collect();
        assert_eq!(health, vec![4, 10, 4]);
    }

    #[test]
    fn rejects_selection_with_stale_index() {
        let mut state = encounter(2, 1.0);
        state.current_spell = 1;

        let result = LightningStrike.compute_effect(&TargetSelection::many([0, 2]), &state);
        assert!(matches!(result, Err(VariantError::InvalidTarget(_))));
    }
}
