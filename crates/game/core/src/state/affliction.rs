//! Stacking status effects attached to enemies.
//!
//! An enemy carries at most one [`Affliction`] per [`AfflictionKind`].
//! Re-applying a kind that is already present increments its stack count in
//! place. Afflictions never expire; they leave the encounter together with
//! the enemy that carries them.

use arrayvec::ArrayVec;
use strum::EnumCount;

/// Kinds of afflictions a spell can place on an enemy.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::EnumCount,
    strum::Display,
    strum::EnumString,
    strum::IntoStaticStr,
)]
#[strum(serialize_all = "snake_case")]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum AfflictionKind {
    /// Amplifies Shadow bolt damage by the number of accumulated stacks.
    Curse,
}

/// A single affliction with its current stack count (always `>= 1`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Affliction {
    pub kind: AfflictionKind,
    pub stacks: u32,
}

/// Ordered set of afflictions on one enemy, unique per kind.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Afflictions {
    entries: ArrayVec<Affliction, { AfflictionKind::COUNT }>,
}

impl Afflictions {
    /// Creates an empty affliction set.
    pub fn empty() -> Self {
        Self {
            entries: ArrayVec::new(),
        }
    }

    /// Applies `delta` stacks of `kind` and returns the resulting stack count.
    ///
    /// An existing affliction of the same kind is incremented in place;
    /// otherwise a fresh entry is appended. A `delta` of zero is treated as one
    /// so that a present affliction always has at least one stack.
    pub fn apply(&mut self, kind: AfflictionKind, delta: u32) -> u32 {
        let delta = delta.max(1);

        if let Some(existing) = self.entries.iter_mut().find(|a| a.kind == kind) {
            existing.stacks = existing.stacks.saturating_add(delta);
            return existing.stacks;
        }

        // One slot per kind, so the push cannot overflow.
        self.entries.push(Affliction {
            kind,
            stacks: delta,
        });
        delta
    }

    /// Returns the stack count of `kind`, or 0 when absent.
    pub fn stacks(&self, kind: AfflictionKind) -> u32 {
        self.entries
            .iter()
            .find(|a| a.kind == kind)
            .map_or(0, |a| a.stacks)
    }

    pub fn get(&self, kind: AfflictionKind) -> Option<&Affliction> {
        self.entries.iter().find(|a| a.kind == kind)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<Affliction> for Afflictions {
    /// Collects afflictions, merging duplicate kinds by summing their stacks.
    fn from_iter<I: IntoIterator<Item = Affliction>>(iter: I) -> Self {
        let mut set = Self::empty();
        for affliction in iter {
            set.apply(affliction.kind, affliction.stacks);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_application_inserts_single_stack() {
        let mut afflictions = Afflictions::empty();

        assert_eq!(afflictions.apply(AfflictionKind::Curse, 1), 1);
        assert_eq!(afflictions.len(), 1);
        assert_eq!(afflictions.stacks(AfflictionKind::Curse), 1);
    }

    #[test]
    fn reapplication_increments_in_place() {
        let mut afflictions = Afflictions::empty();
        afflictions.apply(AfflictionKind::Curse, 1);

        assert_eq!(afflictions.apply(AfflictionKind::Curse, 1), 2);
        assert_eq!(afflictions.apply(AfflictionKind::Curse, 1), 3);
        assert_eq!(afflictions.len(), 1, "duplicate kinds must never be appended");
    }

    #[test]
    fn absent_kind_reports_zero_stacks() {
        let afflictions = Afflictions::empty();
        assert_eq!(afflictions.stacks(AfflictionKind::Curse), 0);
        assert!(afflictions.get(AfflictionKind::Curse).is_none());
    }

    #[test]
    fn collecting_merges_duplicates() {
        let afflictions: Afflictions = [
            Affliction {
                kind: AfflictionKind::Curse,
                stacks: 2,
            },
            Affliction {
                kind: AfflictionKind::Curse,
                stacks: 1,
            },
        ]
        .into_iter()
        .collect();

        assert_eq!(afflictions.len(), 1);
        assert_eq!(afflictions.stacks(AfflictionKind::Curse), 3);
    }

    #[test]
    fn kind_names_are_snake_case() {
        assert_eq!(AfflictionKind::Curse.to_string(), "curse");
        assert_eq!("curse".parse::<AfflictionKind>(), Ok(AfflictionKind::Curse));
    }
}
