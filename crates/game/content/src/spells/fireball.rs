use game_core::{
    CombatState, EffectTarget, Mutation, SpellState, SpellVariant, TargetSelection, VariantError,
};

/// Single-target direct damage.
pub struct Fireball;

impl Fireball {
    pub const NAME: &'static str = "Fireball";
    pub const POWER: u32 = 10;
}

impl SpellVariant for Fireball {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn starting_state(&self) -> SpellState {
        SpellState::new(Self::NAME, Self::POWER)
    }

    fn describe(&self, state: &CombatState, spell: &SpellState) -> Result<String, VariantError> {
        let effective = state.effective_power(spell.power)?;
        Ok(format!(
            "Deal {} ({}) damage to the enemy",
            spell.power, effective
        ))
    }

    fn compute_effect(
        &self,
        target: &TargetSelection,
        state: &CombatState,
    ) -> Result<Mutation, VariantError> {
        let index = target.resolve_primary(state)?;
        let damage = state.effective_power(state.current_spell()?.power)?;

        Ok(Mutation::new().damage(EffectTarget::Enemy(index), damage))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spells::test_support::encounter;
    use game_core::{Action, reduce};

    fn cast(state: &CombatState, target: usize) -> CombatState {
        let mutation = Fireball
            .compute_effect(&TargetSelection::single(target), state)
            .unwrap();
        reduce(state, &Action::cast_spell(mutation)).unwrap().state
    }

    #[test]
    fn deals_base_power_at_unit_slot() {
        let state = encounter(2, 1.0);
        let next = cast(&state, 1);

        assert_eq!(next.enemies[1].health, 0);
        assert_eq!(next.enemies[0].health, 10);
    }

    #[test]
    fn rounds_slot_adjusted_damage_up() {
        let mut state = encounter(1, 1.5);
        state.enemies[0].health = 20;

        let next = cast(&state, 0);

        assert_eq!(next.enemies[0].health, 5);
    }

    #[test]
    fn leaves_afflictions_alone() {
        let next = cast(&encounter(1, 1.0), 0);
        assert!(next.enemies[0].afflictions.is_empty());
    }

    #[test]
    fn describe_shows_nominal_and_effective_power() {
        let state = encounter(1, 1.5);
        let text = Fireball.describe(&state, &Fireball.starting_state()).unwrap();
        assert_eq!(text, "Deal 10 (15) damage to the enemy");
    }

    #[test]
    fn rejects_stale_target() {
        let state = encounter(1, 1.0);
        let result = Fireball.compute_effect(&TargetSelection::single(3), &state);
        assert!(matches!(result, Err(VariantError::InvalidTarget(_))));
    }
}
