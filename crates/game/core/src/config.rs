/// Encounter configuration and tunable defaults.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CombatConfig {
    /// Player health at the start of every encounter.
    pub player_health: i32,
    /// Variant names of the starting spell loadout, in slot order.
    pub starting_spells: Vec<String>,
    /// Multipliers of the spell-slot cycle, in cycle order.
    pub spell_slots: Vec<f64>,
}

impl CombatConfig {
    pub const DEFAULT_PLAYER_HEALTH: i32 = 100;
    pub const DEFAULT_STARTING_SPELLS: [&'static str; 3] =
        ["Fireball", "Lightning strike", "Shadow bolt"];
    pub const DEFAULT_SPELL_SLOTS: [f64; 3] = [1.0, 1.5, 0.5];

    pub fn new() -> Self {
        Self {
            player_health: Self::DEFAULT_PLAYER_HEALTH,
            starting_spells: Self::DEFAULT_STARTING_SPELLS
                .iter()
                .map(|name| (*name).to_owned())
                .collect(),
            spell_slots: Self::DEFAULT_SPELL_SLOTS.to_vec(),
        }
    }
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self::new()
    }
}
