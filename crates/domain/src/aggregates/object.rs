//! Object aggregate - inanimate targets of spells
//!
//! Objects shrug off any hit that does not exceed their damage threshold.
//! Hits above it come off their hit points, and an object at zero is
//! destroyed. Mending restores hit points to a whole object only.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::target::{restore_hp, Target};
use crate::entities::{Damage, SpellEffect};
use crate::events::HealOutcome;

/// Object lifecycle state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ObjectState {
    #[default]
    Whole,
    Destroyed,
}

impl ObjectState {
    #[inline]
    pub fn is_whole(self) -> bool {
        matches!(self, Self::Whole)
    }

    #[inline]
    pub fn is_destroyed(self) -> bool {
        matches!(self, Self::Destroyed)
    }
}

impl fmt::Display for ObjectState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Whole => write!(f, "whole"),
            Self::Destroyed => write!(f, "destroyed"),
        }
    }
}

/// An inanimate object: a door, a rope, a cart.
///
/// # Invariants
///
/// - `0 <= hp <= max_hp`
/// - Damage with `amount <= threshold` changes nothing
/// - Once `Destroyed`, always `Destroyed`
///
/// # Example
///
/// ```
/// use artificer_domain::aggregates::{Object, ObjectState, Target};
/// use artificer_domain::entities::Damage;
/// use artificer_domain::value_objects::DamageType;
///
/// let mut door = Object::new(10, 5);
/// assert_eq!(door.damage(&Damage::new(DamageType::Fire, 5)), ObjectState::Whole);
/// assert_eq!(door.hp(), 10);
/// assert_eq!(door.damage(&Damage::new(DamageType::Fire, 6)), ObjectState::Whole);
/// assert_eq!(door.hp(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Object {
    max_hp: u32,
    hp: u32,
    threshold: u32,
    state: ObjectState,
}

impl Object {
    /// Create an object at full hit points.
    pub fn new(max_hp: u32, threshold: u32) -> Self {
        Self {
            max_hp,
            hp: max_hp,
            threshold,
            state: ObjectState::Whole,
        }
    }

    /// Start damaged. Clamped to `max_hp`.
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.hp = hp.min(self.max_hp);
        self
    }

    #[inline]
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    #[inline]
    pub fn state(&self) -> ObjectState {
        self.state
    }

    #[inline]
    pub fn is_destroyed(&self) -> bool {
        self.state.is_destroyed()
    }

    /// Raise the damage threshold by the effect's amount.
    ///
    /// Returns the new threshold.
    pub fn reinforce(&mut self, effect: &SpellEffect) -> u32 {
        self.threshold = self.threshold.saturating_add(effect.amount());
        tracing::debug!("Object reinforced, threshold now {}", self.threshold);
        self.threshold
    }
}

impl Target for Object {
    type State = ObjectState;

    fn hp(&self) -> u32 {
        self.hp
    }

    fn max_hp(&self) -> u32 {
        self.max_hp
    }

    /// Mend the object.
    ///
    /// Returns `Defeated` for a destroyed object and leaves hp at 0.
    fn heal(&mut self, amount: u32) -> HealOutcome {
        if self.state.is_destroyed() {
            return HealOutcome::Defeated;
        }
        restore_hp(&mut self.hp, self.max_hp, amount)
    }

    /// Damage the object, if the hit exceeds its threshold.
    fn damage(&mut self, damage: &Damage) -> ObjectState {
        if damage.amount() <= self.threshold {
            tracing::debug!(
                "Object absorbed {} damage (threshold {})",
                damage.amount(),
                self.threshold
            );
            return self.state;
        }

        self.hp = self.hp.saturating_sub(damage.amount());
        if self.hp == 0 && self.state.is_whole() {
            self.state = ObjectState::Destroyed;
            tracing::info!("Object destroyed ({} damage)", damage.damage_type());
        }
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::Healing;
    use crate::value_objects::DamageType;

    fn fire(amount: u32) -> Damage {
        Damage::new(DamageType::Fire, amount)
    }

    mod damage {
        use super::*;

        #[test]
        fn damage_at_threshold_is_absorbed() {
            let mut object = Object::new(10, 5);
            assert_eq!(object.damage(&fire(5)), ObjectState::Whole);
            assert_eq!(object.hp(), 10);
        }

        #[test]
        fn damage_below_threshold_is_absorbed() {
            let mut object = Object::new(10, 5);
            object.damage(&fire(1));
            assert_eq!(object.hp(), 10);
        }

        #[test]
        fn damage_above_threshold_is_subtracted_in_full() {
            let mut object = Object::new(10, 5);
            assert_eq!(object.damage(&fire(6)), ObjectState::Whole);
            assert_eq!(object.hp(), 4);
        }

        #[test]
        fn zero_hp_destroys() {
            let mut object = Object::new(10, 0);
            assert_eq!(object.damage(&fire(12)), ObjectState::Destroyed);
            assert_eq!(object.hp(), 0);
            assert!(object.is_destroyed());
        }

        #[test]
        fn zero_threshold_still_ignores_zero_damage() {
            let mut object = Object::new(3, 0);
            assert_eq!(object.damage(&fire(0)), ObjectState::Whole);
            assert_eq!(object.hp(), 3);
        }
    }

    mod mending {
        use super::*;

        #[test]
        fn heal_caps_at_max() {
            let mut object = Object::new(10, 0).with_hp(7);
            assert_eq!(
                object.heal(10),
                HealOutcome::Healed {
                    amount_healed: 3,
                    new_hp: 10
                }
            );
        }

        #[test]
        fn destroyed_cannot_be_mended() {
            let mut object = Object::new(4, 0);
            object.damage(&fire(4));
            assert_eq!(object.heal(4), HealOutcome::Defeated);
            assert_eq!(object.hp(), 0);
        }
    }

    mod reinforce {
        use super::*;

        #[test]
        fn reinforce_raises_threshold_by_effect_amount() {
            let mut object = Object::new(10, 5);
            let effect = SpellEffect::Healing(Healing::new(3));
            assert_eq!(object.reinforce(&effect), 8);
            assert_eq!(object.threshold(), 8);

            object.damage(&fire(8));
            assert_eq!(object.hp(), 10);
        }

        #[test]
        fn reinforce_with_damage_effect() {
            let mut object = Object::new(10, 2);
            let effect = SpellEffect::Damage(fire(4));
            assert_eq!(object.reinforce(&effect), 6);
        }
    }
}
