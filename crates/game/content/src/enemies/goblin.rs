use game_core::{
    CombatState, EffectTarget, EnemyState, EnemyVariant, Mutation, VariantError,
};

/// Plain melee attacker.
pub struct Goblin;

impl Goblin {
    pub const NAME: &'static str = "Goblin";
    pub const HEALTH: i32 = 10;
    pub const DAMAGE: u32 = 3;
}

impl EnemyVariant for Goblin {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn starting_state(&self) -> EnemyState {
        EnemyState::new(Self::NAME, Self::HEALTH)
    }

    fn describe(&self, _state: &CombatState, _enemy: &EnemyState) -> String {
        format!("Stabs you for {}", Self::DAMAGE)
    }

    fn act(&self, _self_index: usize, _state: &CombatState) -> Result<Mutation, VariantError> {
        Ok(Mutation::new().damage(EffectTarget::Player, Self::DAMAGE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{Action, SpellSlotState, SpellState, reduce};

    #[test]
    fn damages_player() {
        let state = CombatState::new(
            20,
            vec![Goblin.starting_state()],
            vec![SpellState::new("Fireball", 10)],
            vec![SpellSlotState::new(1.0)],
        )
        .unwrap();

        let mutation = Goblin.act(0, &state).unwrap();
        let next = reduce(&state, &Action::enemy_action(mutation)).unwrap().state;

        assert_eq!(next.player_health, 17);
    }
}
