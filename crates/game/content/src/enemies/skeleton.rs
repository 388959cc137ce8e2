use game_core::{
    ActionError, AfflictionKind, CombatState, EffectTarget, EnemyState, EnemyVariant, Mutation,
    VariantError,
};

/// Undead attacker fed by the curses placed on it.
///
/// Deals its base damage plus one per curse stack it carries.
pub struct Skeleton;

impl Skeleton {
    pub const NAME: &'static str = "Skeleton";
    pub const HEALTH: i32 = 12;
    pub const DAMAGE: u32 = 2;

    fn damage(enemy: &EnemyState) -> u32 {
        Self::DAMAGE.saturating_add(enemy.afflictions.stacks(AfflictionKind::Curse))
    }
}

impl EnemyVariant for Skeleton {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn starting_state(&self) -> EnemyState {
        EnemyState::new(Self::NAME, Self::HEALTH)
    }

    fn describe(&self, _state: &CombatState, enemy: &EnemyState) -> String {
        format!("Slashes you for {}", Self::damage(enemy))
    }

    fn act(&self, self_index: usize, state: &CombatState) -> Result<Mutation, VariantError> {
        let me = state
            .enemy(self_index)
            .ok_or_else(|| ActionError::invalid_enemy(self_index, state.enemies.len()))?;
        Ok(Mutation::new().damage(EffectTarget::Player, Self::damage(me)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{SpellSlotState, SpellState};

    fn state_with(skeleton: EnemyState) -> CombatState {
        CombatState::new(
            50,
            vec![skeleton],
            vec![SpellState::new("Shadow bolt", 6)],
            vec![SpellSlotState::new(1.0)],
        )
        .unwrap()
    }

    #[test]
    fn curse_stacks_add_damage() {
        let mut skeleton = Skeleton.starting_state();
        skeleton.apply_curse();
        skeleton.apply_curse();
        let state = state_with(skeleton);

        let mutation = Skeleton.act(0, &state).unwrap();

        assert_eq!(
            mutation,
            Mutation::new().damage(EffectTarget::Player, 4)
        );
    }

    #[test]
    fn acting_from_stale_index_fails() {
        let state = state_with(Skeleton.starting_state());
        assert!(matches!(
            Skeleton.act(1, &state),
            Err(VariantError::InvalidTarget(_))
        ));
    }
}
