/// Opaque animation request handed to the presentation layer.
///
/// A cue names what to show. It never carries state and its playback has no
/// influence on the outcome, which is computed before the cue is requested.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AnimationCue {
    SpellCast { spell: String, targets: Vec<usize> },
    EnemyActs { enemy: usize, name: String },
    EnemyDies { enemy: usize },
}
