//! Creature aggregate - living targets of spells
//!
//! A creature starts at full hit points and alive. Damage lowers its hit
//! points (never below zero); reaching zero kills it for good. There is no
//! revival here, so a dead creature ignores healing.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::target::{restore_hp, Target};
use crate::entities::Damage;
use crate::events::HealOutcome;

/// Creature lifecycle state
///
/// ```text
/// Alive -> Dead (hp reaches 0)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CreatureState {
    #[default]
    Alive,
    Dead,
}

impl CreatureState {
    #[inline]
    pub fn is_alive(self) -> bool {
        matches!(self, Self::Alive)
    }

    #[inline]
    pub fn is_dead(self) -> bool {
        matches!(self, Self::Dead)
    }
}

impl fmt::Display for CreatureState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Alive => write!(f, "alive"),
            Self::Dead => write!(f, "dead"),
        }
    }
}

/// A living creature.
///
/// # Invariants
///
/// - `0 <= hp <= max_hp`
/// - Once `Dead`, always `Dead`
///
/// # Example
///
/// ```
/// use artificer_domain::aggregates::{Creature, CreatureState, Target};
/// use artificer_domain::entities::Damage;
/// use artificer_domain::value_objects::DamageType;
///
/// let mut commoner = Creature::new(4, 10);
/// assert_eq!(commoner.damage(&Damage::new(DamageType::Fire, 3)), CreatureState::Alive);
/// assert_eq!(commoner.hp(), 1);
/// assert_eq!(commoner.damage(&Damage::new(DamageType::Fire, 3)), CreatureState::Dead);
/// assert_eq!(commoner.hp(), 0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Creature {
    max_hp: u32,
    hp: u32,
    armor_class: u8,
    state: CreatureState,
}

impl Creature {
    /// Create a creature at full hit points.
    pub fn new(max_hp: u32, armor_class: u8) -> Self {
        Self {
            max_hp,
            hp: max_hp,
            armor_class,
            state: CreatureState::Alive,
        }
    }

    /// Start wounded. Clamped to `max_hp`.
    pub fn with_hp(mut self, hp: u32) -> Self {
        self.hp = hp.min(self.max_hp);
        self
    }

    #[inline]
    pub fn armor_class(&self) -> u8 {
        self.armor_class
    }

    #[inline]
    pub fn state(&self) -> CreatureState {
        self.state
    }

    #[inline]
    pub fn is_alive(&self) -> bool {
        self.state.is_alive()
    }

    #[inline]
    pub fn is_dead(&self) -> bool {
        self.state.is_dead()
    }
}

impl Target for Creature {
    type State = CreatureState;

    fn hp(&self) -> u32 {
        self.hp
    }

    fn max_hp(&self) -> u32 {
        self.max_hp
    }

    /// Heal the creature.
    ///
    /// Returns `Defeated` for a dead creature; the dead stay dead.
    fn heal(&mut self, amount: u32) -> HealOutcome {
        if self.state.is_dead() {
            return HealOutcome::Defeated;
        }
        restore_hp(&mut self.hp, self.max_hp, amount)
    }

    /// Deal the damage as-is.
    ///
    /// Only call this when the damage actually lands (failed save or
    /// passing attack roll).
    fn damage(&mut self, damage: &Damage) -> CreatureState {
        self.hp = self.hp.saturating_sub(damage.amount());
        tracing::debug!(
            "Creature took {} {} damage, {} hp left",
            damage.amount(),
            damage.damage_type(),
            self.hp
        );

        if self.hp == 0 && self.state.is_alive() {
            self.state = CreatureState::Dead;
            tracing::info!("Creature died ({} damage)", damage.damage_type());
        }
        self.state
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value_objects::DamageType;

    fn fire(amount: u32) -> Damage {
        Damage::new(DamageType::Fire, amount)
    }

    mod constructor {
        use super::*;

        #[test]
        fn new_starts_full_and_alive() {
            let creature = Creature::new(10, 12);
            assert_eq!(creature.hp(), 10);
            assert_eq!(creature.max_hp(), 10);
            assert_eq!(creature.armor_class(), 12);
            assert!(creature.is_alive());
        }

        #[test]
        fn with_hp_clamps_to_max() {
            assert_eq!(Creature::new(10, 10).with_hp(8).hp(), 8);
            assert_eq!(Creature::new(10, 10).with_hp(50).hp(), 10);
        }
    }

    mod damage {
        use super::*;

        #[test]
        fn damage_below_hp_wounds() {
            let mut creature = Creature::new(10, 10);
            assert_eq!(creature.damage(&fire(4)), CreatureState::Alive);
            assert_eq!(creature.hp(), 6);
        }

        #[test]
        fn damage_equal_to_hp_kills() {
            let mut creature = Creature::new(10, 10);
            assert_eq!(creature.damage(&fire(10)), CreatureState::Dead);
            assert_eq!(creature.hp(), 0);
            assert!(creature.is_dead());
        }

        #[test]
        fn overkill_bottoms_out_at_zero() {
            let mut creature = Creature::new(10, 10).with_hp(3);
            assert_eq!(creature.damage(&fire(25)), CreatureState::Dead);
            assert_eq!(creature.hp(), 0);
        }

        #[test]
        fn dead_stays_dead() {
            let mut creature = Creature::new(5, 10);
            creature.damage(&fire(5));
            assert_eq!(creature.damage(&fire(0)), CreatureState::Dead);
        }

        #[test]
        fn damage_type_does_not_change_amount() {
            for ty in DamageType::ALL {
                let mut creature = Creature::new(20, 10);
                creature.damage(&Damage::new(ty, 7));
                assert_eq!(creature.hp(), 13);
            }
        }
    }

    mod healing {
        use super::*;

        #[test]
        fn heal_caps_at_max_hp() {
            let mut creature = Creature::new(10, 10).with_hp(8);
            assert_eq!(
                creature.heal(5),
                HealOutcome::Healed {
                    amount_healed: 2,
                    new_hp: 10
                }
            );
            assert_eq!(creature.hp(), 10);
        }

        #[test]
        fn heal_never_exceeds_max() {
            for amount in [0, 1, 2, 9, 10, 100, u32::MAX] {
                let mut creature = Creature::new(10, 10).with_hp(1);
                creature.heal(amount);
                assert!(creature.hp() <= creature.max_hp());
            }
        }

        #[test]
        fn heal_at_full_is_already_full() {
            let mut creature = Creature::new(10, 10);
            assert_eq!(creature.heal(3), HealOutcome::AlreadyFull);
        }

        #[test]
        fn dead_cannot_be_healed() {
            let mut creature = Creature::new(10, 10);
            creature.damage(&fire(10));
            assert_eq!(creature.heal(5), HealOutcome::Defeated);
            assert_eq!(creature.hp(), 0);
            assert!(creature.is_dead());
        }
    }

    #[test]
    fn serializes_state() {
        let json = serde_json::to_value(Creature::new(7, 11)).unwrap();
        assert_eq!(json["maxHp"], 7);
        assert_eq!(json["armorClass"], 11);
        assert_eq!(json["state"], "alive");
    }
}
