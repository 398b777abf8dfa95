//! The recipient of a spell effect.

use std::fmt;

use crate::entities::Damage;
use crate::events::HealOutcome;

#[cfg(test)]
use super::CreatureState;

/// A generic target of a spell: a creature, an object, or any caller type
/// that tracks hit points.
///
/// Resistances and vulnerabilities belong to the implementor; effects hand
/// over the raw `Damage` and let the target account for itself.
#[cfg_attr(test, mockall::automock(type State = CreatureState;))]
pub trait Target {
    /// What the target reports after taking damage.
    type State: Copy + fmt::Debug;

    /// Current hit points.
    fn hp(&self) -> u32;

    /// Maximum hit points.
    fn max_hp(&self) -> u32;

    /// Restore `amount` hit points, never exceeding `max_hp`.
    ///
    /// A defeated target (a dead creature, a destroyed object) returns
    /// `HealOutcome::Defeated` and keeps its hit points at 0. Healing never
    /// raises hp on a target whose state stays defeated.
    fn heal(&mut self, amount: u32) -> HealOutcome;

    /// Take damage and report the resulting state.
    fn damage(&mut self, damage: &Damage) -> Self::State;
}

/// Shared hit point restoration for targets that clamp at their maximum.
pub(crate) fn restore_hp(hp: &mut u32, max_hp: u32, amount: u32) -> HealOutcome {
    if *hp >= max_hp {
        return HealOutcome::AlreadyFull;
    }

    let new_hp = hp.saturating_add(amount).min(max_hp);
    let amount_healed = new_hp - *hp;
    *hp = new_hp;

    HealOutcome::Healed {
        amount_healed,
        new_hp,
    }
}
