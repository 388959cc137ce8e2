use game_core::{
    AfflictionKind, CombatState, EffectTarget, Mutation, SpellState, SpellVariant,
    TargetSelection, VariantError,
};

/// Curses the target, then hits it once per accumulated curse stack.
///
/// Damage is `ceil(power * slot) * stacks`, where `stacks` counts the curse
/// applied by this very cast. Earlier casts are not retroactively scaled.
pub struct ShadowBolt;

impl ShadowBolt {
    pub const NAME: &'static str = "Shadow bolt";
    pub const POWER: u32 = 6;
}

impl SpellVariant for ShadowBolt {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn starting_state(&self) -> SpellState {
        SpellState::new(Self::NAME, Self::POWER)
    }

    fn describe(&self, state: &CombatState, spell: &SpellState) -> Result<String, VariantError> {
        let effective = state.effective_power(spell.power)?;
        Ok(format!(
            "Inflict one curse stack to the enemy and deal {} ({}) damage per each",
            spell.power, effective
        ))
    }

    fn compute_effect(
        &self,
        target: &TargetSelection,
        state: &CombatState,
    ) -> Result<Mutation, VariantError> {
        let index = target.resolve_primary(state)?;
        let per_stack = state.effective_power(state.current_spell()?.power)?;
        let stacks_after = state.enemies[index]
            .afflictions
            .stacks(AfflictionKind::Curse)
            .saturating_add(1);

        Ok(Mutation::new()
            .afflict(index, AfflictionKind::Curse, 1)
            .damage(
                EffectTarget::Enemy(index),
                per_stack.saturating_mul(stacks_after),
            ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spells::test_support::encounter;
    use game_core::{Action, reduce};

    fn cast(state: &CombatState, target: usize) -> CombatState {
        let mutation = ShadowBolt
            .compute_effect(&TargetSelection::single(target), state)
            .unwrap();
        reduce(state, &Action::cast_spell(mutation)).unwrap().state
    }

    fn shadow_bolt_selected(enemies: usize) -> CombatState {
        let mut state = encounter(enemies, 1.0);
        state.current_spell = 2;
        state.enemies.iter_mut().for_each(|enemy| enemy.health = 50);
        state
    }

    #[test]
    fn second_cast_multiplies_by_total_stacks() {
        let state = shadow_bolt_selected(1);

        let first = cast(&state, 0);
        assert_eq!(first.enemies[0].afflictions.stacks(AfflictionKind::Curse), 1);
        assert_eq!(first.enemies[0].health, 44);

        let second = cast(&first, 0);
        assert_eq!(second.enemies[0].afflictions.stacks(AfflictionKind::Curse), 2);
        assert_eq!(second.enemies[0].health, 32);
    }

    #[test]
    fn curses_are_tracked_per_enemy() {
        let state = shadow_bolt_selected(2);

        let next = cast(&cast(&state, 0), 1);

        assert_eq!(next.enemies[0].afflictions.stacks(AfflictionKind::Curse), 1);
        assert_eq!(next.enemies[1].afflictions.stacks(AfflictionKind::Curse), 1);
        assert_eq!(next.enemies[1].health, 44);
    }

    #[test]
    fn uses_power_of_selected_spell() {
        let mut state = shadow_bolt_selected(1);
        state.spells[2].power = 9;

        let next = cast(&state, 0);
        assert_eq!(next.enemies[0].health, 41);
    }

    #[test]
    fn describe_mentions_stacks() {
        let state = encounter(1, 0.5);
        let text = ShadowBolt
            .describe(&state, &ShadowBolt.starting_state())
            .unwrap();
        assert_eq!(
            text,
            "Inflict one curse stack to the enemy and deal 6 (3) damage per each"
        );
    }
}
