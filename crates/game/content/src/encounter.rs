//! Encounter definitions.

/// One battle: an ordered roster of enemy variant names.
///
/// Roster order becomes retaliation order.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterDefinition {
    pub name: String,
    pub enemies: Vec<String>,
}

impl EncounterDefinition {
    pub fn new<S: Into<String>>(name: impl Into<String>, enemies: impl IntoIterator<Item = S>) -> Self {
        Self {
            name: name.into(),
            enemies: enemies.into_iter().map(Into::into).collect(),
        }
    }
}

/// Encounters shipped with the game, in campaign order.
pub fn builtin_encounters() -> Vec<EncounterDefinition> {
    vec![
        EncounterDefinition::new("Goblin ambush", ["Goblin", "Goblin"]),
        EncounterDefinition::new("Crypt", ["Skeleton", "Shaman", "Skeleton"]),
    ]
}
