//! Concrete action transitions, one type per action in the vocabulary.

mod enemy;
mod spell;
mod turn;

pub use enemy::{EnemiesDiedAction, EnemyAction};
pub use spell::{CastSpellAction, ChangeSpellAction};
pub use turn::{EndTurnAction, StartTurnAction};
