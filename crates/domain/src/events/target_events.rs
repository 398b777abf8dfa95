//! Target-related domain events
//!
//! These enums communicate what happened when a spell effect was applied,
//! allowing callers to react appropriately.

use serde::{Deserialize, Serialize};

/// Outcome of healing (or mending) a target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HealOutcome {
    /// Healing applied, capped at max HP
    Healed { amount_healed: u32, new_hp: u32 },
    /// Already at max HP
    AlreadyFull,
    /// Target is dead or destroyed, cannot heal
    Defeated,
}

/// Outcome of a spell effect taking effect on a target.
///
/// `S` is the target's state type (`CreatureState`, `ObjectState`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EffectOutcome<S> {
    /// Damage was dealt; carries the target's resulting state
    Damaged(S),
    /// Healing was applied
    Healed(HealOutcome),
}

impl<S> EffectOutcome<S> {
    /// The resulting state if this was a damage outcome.
    pub fn state(&self) -> Option<&S> {
        match self {
            Self::Damaged(state) => Some(state),
            Self::Healed(_) => None,
        }
    }
}
