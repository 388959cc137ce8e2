use game_core::{
    ActionError, CombatState, EffectTarget, EnemyState, EnemyVariant, Mutation, VariantError,
};

/// Support caster that mends the most wounded ally.
///
/// Heals the living ally with the lowest health (lowest index on ties). With
/// no ally left it lashes out at the player instead.
pub struct Shaman;

impl Shaman {
    pub const NAME: &'static str = "Shaman";
    pub const HEALTH: i32 = 8;
    pub const HEAL: u32 = 3;
    pub const DAMAGE: u32 = 2;

    fn most_wounded_ally(self_index: usize, state: &CombatState) -> Option<usize> {
        state
            .enemies
            .iter()
            .enumerate()
            .filter(|&(index, enemy)| index != self_index && !enemy.is_dead())
            .min_by_key(|&(index, enemy)| (enemy.health, index))
            .map(|(index, _)| index)
    }
}

impl EnemyVariant for Shaman {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn starting_state(&self) -> EnemyState {
        EnemyState::new(Self::NAME, Self::HEALTH)
    }

    fn describe(&self, state: &CombatState, _enemy: &EnemyState) -> String {
        if state.enemies.len() > 1 {
            format!("Heals an ally for {}", Self::HEAL)
        } else {
            format!("Zaps you for {}", Self::DAMAGE)
        }
    }

    fn act(&self, self_index: usize, state: &CombatState) -> Result<Mutation, VariantError> {
        if self_index >= state.enemies.len() {
            return Err(ActionError::invalid_enemy(self_index, state.enemies.len()).into());
        }

        let mutation = match Self::most_wounded_ally(self_index, state) {
            Some(ally) => Mutation::new().heal(EffectTarget::Enemy(ally), Self::HEAL),
            None => Mutation::new().damage(EffectTarget::Player, Self::DAMAGE),
        };
        Ok(mutation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use game_core::{SpellSlotState, SpellState};

    fn roster(enemies: Vec<EnemyState>) -> CombatState {
        CombatState::new(
            50,
            enemies,
            vec![SpellState::new("Fireball", 10)],
            vec![SpellSlotState::new(1.0)],
        )
        .unwrap()
    }

    #[test]
    fn heals_lowest_health_ally() {
        let state = roster(vec![
            EnemyState::new("Goblin", 7),
            Shaman.starting_state(),
            EnemyState::new("Skeleton", 4),
        ]);

        let mutation = Shaman.act(1, &state).unwrap();

        assert_eq!(mutation, Mutation::new().heal(EffectTarget::Enemy(2), 3));
    }

    #[test]
    fn ties_go_to_lower_index() {
        let state = roster(vec![
            Shaman.starting_state(),
            EnemyState::new("Goblin", 5),
            EnemyState::new("Goblin", 5),
        ]);

        let mutation = Shaman.act(0, &state).unwrap();

        assert_eq!(mutation, Mutation::new().heal(EffectTarget::Enemy(1), 3));
    }

    #[test]
    fn attacks_player_when_alone() {
        let state = roster(vec![Shaman.starting_state()]);
        let mutation = Shaman.act(0, &state).unwrap();
        assert_eq!(mutation, Mutation::new().damage(EffectTarget::Player, 2));
    }
}
